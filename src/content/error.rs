use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("could not read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate tip id \"{0}\"")]
    DuplicateTipId(String),

    #[error("duplicate website id \"{0}\"")]
    DuplicateWebsiteId(String),

    #[error("content must contain at least one tip")]
    NoTips,
}
