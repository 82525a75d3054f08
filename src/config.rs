//! Settings schema and loader.
//!
//! Settings cover the phrase catalog used for relative times and how the
//! local library is scanned. They are read from an optional TOML file and
//! environment overrides.

mod load;
mod schema;

pub use schema::*;
