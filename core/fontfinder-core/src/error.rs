//! Error types for fontfinder-core (made by FontLab https://www.fontlab.com/)

use thiserror::Error;

pub type Result<T, E = FinderError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum FinderError {
    /// A script entry of the Noto metadata lacks an expected key or has the wrong shape.
    #[error("malformed Noto metadata for script `{script}`: {source}")]
    DataShape {
        script: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Noto metadata must be an object keyed by script tag: {0}")]
    Root(#[source] serde_json::Error),

    #[error("malformed Unihan variant data: {0}")]
    UnihanShape(#[source] serde_json::Error),

    #[error("invalid fontfinder configuration: {0}")]
    Config(#[source] serde_json::Error),
}
