use crate::config::{FieldNames, LoaderConfig};
use crate::error::{LoaderError, Result};
use crate::io::{self, netcdf::read_partition};
use crate::state::Snapshot;
use log::{debug, info};
use std::path::Path;

/// Reads per-partition mesh snapshots of one timestep into flat arrays.
///
/// The arrays stay undefined (`None`) until the first successful [`Loader::load`].
/// A failed load leaves the previously loaded timestep untouched.
#[derive(Debug)]
pub struct Loader {
    config: LoaderConfig,
    snapshot: Option<Snapshot>,
}

impl Loader {
    pub fn new(source_dir: impl AsRef<Path>, partitions: u32) -> Result<Self> {
        Ok(Self::from_config(LoaderConfig::new(source_dir, partitions)?))
    }

    pub fn with_fields(source_dir: impl AsRef<Path>, partitions: u32, fields: FieldNames) -> Result<Self> {
        Ok(Self::from_config(
            LoaderConfig::new(source_dir, partitions)?.with_fields(fields),
        ))
    }

    pub fn from_config(config: LoaderConfig) -> Self {
        Loader {
            config,
            snapshot: None,
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads every partition of `timestep` and replaces the stored arrays.
    pub fn load(&mut self, timestep: u32) -> Result<()> {
        let dir = self.config.source_dir();
        let mut snapshot = Snapshot::new(timestep);

        for partition in 0..self.config.partitions() {
            let path = io::snapshot_path(dir, timestep, partition);
            if !path.is_file() {
                return Err(LoaderError::MissingFile {
                    path,
                    timestep,
                    partition,
                });
            }
            debug!("Loading partition {} of timestep {}", partition, timestep);
            let data = read_partition(&path, partition, self.config.fields())?;
            snapshot.push_partition(&data);
        }

        info!(
            "Loaded timestep {} from {} partition(s): {} points",
            timestep,
            self.config.partitions(),
            snapshot.len()
        );
        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// Timesteps present in the source directory (by their partition 0 file).
    pub fn timesteps(&self) -> Result<Vec<u32>> {
        io::discover_timesteps(self.config.source_dir()).map_err(|e| {
            LoaderError::Configuration(format!(
                "cannot list {:?}: {}",
                self.config.source_dir(),
                e
            ))
        })
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn timestep(&self) -> Option<u32> {
        self.snapshot.as_ref().map(|s| s.timestep)
    }

    pub fn x(&self) -> Option<&[f64]> {
        self.snapshot.as_ref().map(|s| s.x.as_slice())
    }

    pub fn y(&self) -> Option<&[f64]> {
        self.snapshot.as_ref().map(|s| s.y.as_slice())
    }

    pub fn z(&self) -> Option<&[f64]> {
        self.snapshot.as_ref().map(|s| s.z.as_slice())
    }

    pub fn discharge(&self) -> Option<&[f64]> {
        self.snapshot.as_ref().map(|s| s.discharge.as_slice())
    }

    pub fn cumulative_change(&self) -> Option<&[f64]> {
        self.snapshot.as_ref().map(|s| s.cumulative_change.as_slice())
    }

    pub fn len(&self) -> usize {
        self.snapshot.as_ref().map_or(0, Snapshot::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
