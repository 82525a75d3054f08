//! Phrase catalog used to render relative times.
//!
//! Catalogs are TOML files of nested tables whose leaves are templates,
//! addressed by dotted keys (`meta.timing.hours_ago`). Templates may contain
//! a `{number}` placeholder.

mod catalog;

pub use catalog::*;
