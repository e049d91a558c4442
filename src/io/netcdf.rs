use crate::config::FieldNames;
use crate::error::{LoaderError, Result};
use log::debug;
use std::path::Path;

// Raw arrays from one partition file, checked for consistent point counts
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionData {
    /// Row-major N×3 coordinates.
    pub coords: Vec<f64>,
    pub cumdiff: Vec<f64>,
    pub discharge: Vec<f64>,
}

impl PartitionData {
    pub fn points(&self) -> usize {
        self.cumdiff.len()
    }

    pub fn column(&self, axis: usize) -> impl Iterator<Item = f64> + '_ {
        self.coords.chunks_exact(3).map(move |row| row[axis])
    }

    /// Checks that all three fields describe the same number of points.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.coords.len() % 3 != 0 {
            return Err(format!(
                "coordinate field holds {} values, not a multiple of 3",
                self.coords.len()
            ));
        }
        let n = self.coords.len() / 3;
        if self.cumdiff.len() != n {
            return Err(format!(
                "coordinate field has {} points but cumulative difference has {}",
                n,
                self.cumdiff.len()
            ));
        }
        if self.discharge.len() != n {
            return Err(format!(
                "coordinate field has {} points but discharge has {}",
                n,
                self.discharge.len()
            ));
        }
        Ok(())
    }
}

// Point count of an N×3 coordinate field
pub fn coords_len(shape: &[usize]) -> Option<usize> {
    match shape {
        [n, 3] => Some(*n),
        _ => None,
    }
}

// Point count of a per-point field stored either as N or N×1
pub fn scalar_len(shape: &[usize]) -> Option<usize> {
    match shape {
        [n] => Some(*n),
        [n, 1] => Some(*n),
        _ => None,
    }
}

fn read_field(
    file: &netcdf::File,
    path: &Path,
    partition: u32,
    name: &str,
    expected: fn(&[usize]) -> Option<usize>,
) -> Result<Vec<f64>> {
    let var = file.variable(name).ok_or_else(|| {
        LoaderError::malformed(path, partition, format!("required field '{}' is absent", name))
    })?;

    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    if expected(&shape).is_none() {
        return Err(LoaderError::malformed(
            path,
            partition,
            format!("field '{}' has unexpected shape {:?}", name, shape),
        ));
    }

    match var.get_values::<f64, _>(..) {
        Ok(values) => Ok(values),
        // Single-precision outputs
        Err(e) => match var.get_values::<f32, _>(..) {
            Ok(values) => Ok(values.into_iter().map(f64::from).collect()),
            Err(_) => Err(LoaderError::netcdf(
                path,
                partition,
                format!("failed to read '{}'", name),
                e,
            )),
        },
    }
}

/// Reads the three required fields from one partition file.
///
/// The file handle is dropped before returning, on success and on error.
pub fn read_partition(path: &Path, partition: u32, fields: &FieldNames) -> Result<PartitionData> {
    let file = netcdf::open(path)
        .map_err(|e| LoaderError::netcdf(path, partition, "not a readable HDF5 file", e))?;

    let data = PartitionData {
        coords: read_field(&file, path, partition, &fields.coords, coords_len)?,
        cumdiff: read_field(&file, path, partition, &fields.cumdiff, scalar_len)?,
        discharge: read_field(&file, path, partition, &fields.discharge, scalar_len)?,
    };
    data.validate()
        .map_err(|reason| LoaderError::malformed(path, partition, reason))?;

    debug!("Read {} points from {:?}", data.points(), path);
    Ok(data)
}
