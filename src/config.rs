use crate::error::{LoaderError, Result};
use std::path::{Path, PathBuf};

// Names of the datasets read from every partition file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub coords: String,
    pub cumdiff: String,
    pub discharge: String,
}

impl FieldNames {
    pub fn new() -> Self {
        FieldNames {
            coords: "coords".to_string(),
            cumdiff: "cumdiff".to_string(),
            discharge: "discharge".to_string(),
        }
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self::new()
    }
}

/// Validated loader configuration. Both values are fixed once built.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    source_dir: PathBuf,
    partitions: u32,
    fields: FieldNames,
}

impl LoaderConfig {
    pub fn new(source_dir: impl AsRef<Path>, partitions: u32) -> Result<Self> {
        let source_dir = source_dir.as_ref();
        if !source_dir.is_dir() {
            return Err(LoaderError::Configuration(format!(
                "the given folder cannot be found or is not a directory: {:?}",
                source_dir
            )));
        }
        if partitions == 0 {
            return Err(LoaderError::Configuration(
                "partition count must be at least 1".to_string(),
            ));
        }

        Ok(LoaderConfig {
            source_dir: source_dir.to_path_buf(),
            partitions,
            fields: FieldNames::new(),
        })
    }

    pub fn with_fields(mut self, fields: FieldNames) -> Self {
        self.fields = fields;
        self
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn partitions(&self) -> u32 {
        self.partitions
    }

    pub fn fields(&self) -> &FieldNames {
        &self.fields
    }
}

// Output format for the command-line summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
