use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
}
impl FlattenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FlattenError::Io {
            path: path.into(),
            source,
        }
    }
}
