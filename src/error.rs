use std::path::PathBuf;
use thiserror::Error;

use crate::coerce::ConvertError;

#[derive(Debug, Error)]
pub enum StrataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value {value:?} for field '{field}': {source}")]
    Convert {
        field: &'static str,
        value: String,
        #[source]
        source: ConvertError,
    },

    #[error("invalid value for field '{field}' in {path}: {source}")]
    File {
        path: PathBuf,
        field: &'static str,
        #[source]
        source: ConvertError,
    },

    #[error("custom parser for field '{field}' rejected {value:?}: {source}")]
    Setter {
        field: &'static str,
        value: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
