pub mod netcdf;

use log::warn;
use std::path::{Path, PathBuf};

const PREFIX: &str = "tin.time";
const SUFFIX: &str = ".hdf5";

// <dir>/tin.time<timestep>.p<partition>.hdf5
pub fn snapshot_path(dir: &Path, timestep: u32, partition: u32) -> PathBuf {
    dir.join(format!("{}{}.p{}{}", PREFIX, timestep, partition, SUFFIX))
}

// Parses "tin.time<T>.p<P>.hdf5" into (T, P)
pub fn parse_snapshot_name(name: &str) -> Option<(u32, u32)> {
    let rest = name.strip_prefix(PREFIX)?.strip_suffix(SUFFIX)?;
    let (timestep, partition) = rest.split_once(".p")?;
    Some((timestep.parse().ok()?, partition.parse().ok()?))
}

/// Timesteps with a partition 0 file in `dir`, sorted ascending.
pub fn discover_timesteps(dir: &Path) -> std::io::Result<Vec<u32>> {
    let mut timesteps = Vec::new();
    for entry in dir.read_dir()? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.starts_with(PREFIX) {
            continue;
        }
        match parse_snapshot_name(name) {
            Some((timestep, 0)) => timesteps.push(timestep),
            Some(_) => {}
            None => warn!("Skipping unrecognised snapshot name {:?}", name),
        }
    }
    timesteps.sort_unstable();
    timesteps.dedup();
    Ok(timesteps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_has_no_padding() {
        let path = snapshot_path(Path::new("/data/out"), 12, 3);
        assert_eq!(path, PathBuf::from("/data/out/tin.time12.p3.hdf5"));
    }

    #[test]
    fn parses_snapshot_names() {
        assert_eq!(parse_snapshot_name("tin.time0.p0.hdf5"), Some((0, 0)));
        assert_eq!(parse_snapshot_name("tin.time25.p11.hdf5"), Some((25, 11)));
        assert_eq!(parse_snapshot_name("tin.time25.hdf5"), None);
        assert_eq!(parse_snapshot_name("flow.time1.p0.hdf5"), None);
        assert_eq!(parse_snapshot_name("tin.timex.p0.hdf5"), None);
    }

    #[test]
    fn discovers_partition_zero_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "tin.time3.p0.hdf5",
            "tin.time3.p1.hdf5",
            "tin.time1.p0.hdf5",
            "tin.time7.p1.hdf5",
            "tin.series.xdmf",
            "stratal.time1.p0.hdf5",
        ] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        assert_eq!(discover_timesteps(dir.path()).unwrap(), vec![1, 3]);
    }
}
