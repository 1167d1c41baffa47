use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("failed to archive '{path}': {source}")]
    EntryFailed { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
