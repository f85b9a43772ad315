use std::path::{Path, PathBuf};

/// Failures raised while loading a corpus or its resources.
///
/// Ranking itself never fails; unknown words simply score zero.
#[derive(thiserror::Error, Debug)]
pub enum QaError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8", .path.display())]
    NotUtf8 { path: PathBuf },
    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

impl QaError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }
}

pub type Result<T> = std::result::Result<T, QaError>;
