//! Internal layer: database lifecycle, alias storage, parsing, resolution and template expansion.

pub mod db;
pub mod error;
pub mod model;
pub mod namespace;
pub mod parser;
pub mod resolver;
pub mod store;
pub mod template;
