use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetaError {
    #[error("invalid duration format: {0:?} (expected PT[nH][nM][nS])")]
    InvalidDurationFormat(String),

    #[error("invalid clock time format: {0:?} (expected H:MM:SS or M:SS)")]
    InvalidClockTimeFormat(String),

    #[error("could not extract artist with the {rule} rule from title {title:?}")]
    ArtistExtraction { rule: &'static str, title: String },

    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid phrase catalog: {0}")]
    Catalog(#[from] toml::de::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, MetaError>;
