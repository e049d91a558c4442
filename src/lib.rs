//! Reads partitioned TIN snapshots written by a landscape-evolution run
//! (`tin.time<T>.p<P>.hdf5`) and concatenates them into flat per-point arrays.

pub mod config;
pub mod error;
pub mod io;
pub mod loader;
pub mod state;
pub mod summary;

pub use config::{FieldNames, LoaderConfig, OutputFormat};
pub use error::{LoaderError, Result};
pub use loader::Loader;
pub use state::Snapshot;
pub use summary::{FieldRange, SnapshotSummary};
