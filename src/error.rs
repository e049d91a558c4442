use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoaderError>;

#[derive(Debug, Error)]
pub enum LoaderError {
    /// Invalid construction arguments.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// An expected partition file is not on disk.
    #[error("missing snapshot file for timestep {timestep}, partition {partition}: {path:?}")]
    MissingFile {
        path: PathBuf,
        timestep: u32,
        partition: u32,
    },

    /// The file exists but its fields are absent, badly shaped or inconsistent.
    #[error("malformed snapshot file {path:?} (partition {partition}): {reason}")]
    MalformedInput {
        path: PathBuf,
        partition: u32,
        reason: String,
        #[source]
        source: Option<netcdf::Error>,
    },
}

impl LoaderError {
    pub(crate) fn malformed(path: &std::path::Path, partition: u32, reason: impl Into<String>) -> Self {
        LoaderError::MalformedInput {
            path: path.to_path_buf(),
            partition,
            reason: reason.into(),
            source: None,
        }
    }

    pub(crate) fn netcdf(
        path: &std::path::Path,
        partition: u32,
        reason: impl Into<String>,
        source: netcdf::Error,
    ) -> Self {
        LoaderError::MalformedInput {
            path: path.to_path_buf(),
            partition,
            reason: reason.into(),
            source: Some(source),
        }
    }
}
