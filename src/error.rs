use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("reading icon {}: {source}", .path.display())]
    Icon {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("writing plugin output: {0}")]
    Write(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing menu document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
