use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Path Error: {0} not found")]
    PathNotFound(PathBuf),

    #[error("Path Error: {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("IO Error: {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Decode Error: unmarshal CustomResourceDefinition {path} failed: {source}")]
    DecodeError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Encode Error: marshal CRD({gvk}) failed: {source}")]
    EncodeError {
        gvk: String,
        #[source]
        source: serde_yaml::Error,
    },
}
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::IoError { path, source }
    }
}

pub mod convert;
pub use crate::convert::{ConvertOptions, ConvertSummary, convert};

/// Log and trace integrations
pub mod telemetry;
