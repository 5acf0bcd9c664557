use std::{io, path::PathBuf};
use thiserror::Error;

pub type CredsResult<T> = Result<T, CredsError>;

#[derive(Debug, Error)]
pub enum CredsError {
    #[error("credentials file '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("cannot open credentials file '{}': {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Read(#[from] io::Error),
}
