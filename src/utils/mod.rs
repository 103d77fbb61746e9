//! Utilities module aggregator exposing data-folder preparation and testing helpers.

pub mod path;
