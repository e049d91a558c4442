#![allow(dead_code)]

use std::path::Path;
use tin_extract::io::snapshot_path;

// Contents of one fixture partition file
pub struct Fixture<'a> {
    pub coords: &'a [[f64; 3]],
    pub cumdiff: &'a [f64],
    pub discharge: &'a [f64],
}

pub fn write_partition(dir: &Path, timestep: u32, partition: u32, fixture: &Fixture) {
    let path = snapshot_path(dir, timestep, partition);
    let mut file = netcdf::create(&path).unwrap();
    file.add_dimension("npoints", fixture.coords.len()).unwrap();
    file.add_dimension("ncumdiff", fixture.cumdiff.len()).unwrap();
    file.add_dimension("ndischarge", fixture.discharge.len()).unwrap();
    file.add_dimension("xyz", 3).unwrap();

    let coords: Vec<f64> = fixture.coords.iter().flatten().copied().collect();
    let mut var = file.add_variable::<f64>("coords", &["npoints", "xyz"]).unwrap();
    var.put_values(&coords, ..).unwrap();

    let mut var = file.add_variable::<f64>("cumdiff", &["ncumdiff"]).unwrap();
    var.put_values(fixture.cumdiff, ..).unwrap();

    let mut var = file.add_variable::<f64>("discharge", &["ndischarge"]).unwrap();
    var.put_values(fixture.discharge, ..).unwrap();
}

// Writes only the named fields, each as the given shape, with f32 storage
pub fn write_raw(dir: &Path, timestep: u32, partition: u32, fields: &[(&str, &[usize], &[f32])]) {
    let path = snapshot_path(dir, timestep, partition);
    let mut file = netcdf::create(&path).unwrap();
    for &(name, shape, values) in fields {
        let dims: Vec<String> = shape
            .iter()
            .enumerate()
            .map(|(i, len)| {
                let dim = format!("{}_{}", name, i);
                file.add_dimension(&dim, *len).unwrap();
                dim
            })
            .collect();
        let dims: Vec<&str> = dims.iter().map(String::as_str).collect();
        let mut var = file.add_variable::<f32>(name, &dims).unwrap();
        var.put_values(values, ..).unwrap();
    }
}

pub fn three_points() -> Fixture<'static> {
    Fixture {
        coords: &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]],
        cumdiff: &[0.1, 0.2, 0.3],
        discharge: &[5.0, 6.0, 7.0],
    }
}
