//! Track metadata helpers for a desktop media player.
//!
//! - [`timing`]: clock-text durations (from seconds or ISO 8601) and
//!   relative "N units ago" buckets;
//! - [`artist`]: artist names derived from track titles and uploader accounts;
//! - [`i18n`]: the phrase catalog that renders relative times;
//! - [`library`]: local folder scanning grouped by artist.

pub mod artist;
pub mod config;
pub mod error;
pub mod i18n;
pub mod library;
pub mod runtime;
pub mod timing;

pub use error::{MetaError, Result};
