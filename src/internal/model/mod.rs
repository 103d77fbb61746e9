//! Row models for the alias tables.

pub mod alias;
