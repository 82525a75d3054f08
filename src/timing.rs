//! Duration and relative-time formatting.
//!
//! Durations come either as a plain count of seconds or as the ISO 8601
//! strings video platforms return (`PT4M13S`). Both are rendered as clock
//! text (`4:13`, `1:02:03`), and clock text can be turned back into seconds.
//! Relative times are bucketed into a `(bucket, magnitude)` pair that the
//! phrase catalog in [`crate::i18n`] renders.

mod duration;
mod relative;

pub use duration::*;
pub use relative::*;

#[cfg(test)]
mod tests;
