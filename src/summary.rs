use crate::state::Snapshot;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    // NaN entries are skipped; None when nothing finite-comparable remains
    pub fn of(values: &[f64]) -> Option<Self> {
        values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some(FieldRange { min: v, max: v }),
                Some(r) => Some(FieldRange {
                    min: r.min.min(v),
                    max: r.max.max(v),
                }),
            })
    }
}

/// Per-field extent of a loaded snapshot, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotSummary {
    pub timestep: u32,
    pub points: usize,
    pub partition_points: Vec<usize>,
    pub x: Option<FieldRange>,
    pub y: Option<FieldRange>,
    pub z: Option<FieldRange>,
    pub cumulative_change: Option<FieldRange>,
    pub discharge: Option<FieldRange>,
}

impl SnapshotSummary {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        SnapshotSummary {
            timestep: snapshot.timestep,
            points: snapshot.len(),
            partition_points: snapshot.partition_points.clone(),
            x: FieldRange::of(&snapshot.x),
            y: FieldRange::of(&snapshot.y),
            z: FieldRange::of(&snapshot.z),
            cumulative_change: FieldRange::of(&snapshot.cumulative_change),
            discharge: FieldRange::of(&snapshot.discharge),
        }
    }
}

fn write_range(f: &mut fmt::Formatter<'_>, name: &str, range: &Option<FieldRange>) -> fmt::Result {
    match range {
        Some(r) => writeln!(f, "  {:<18} [{}, {}]", name, r.min, r.max),
        None => writeln!(f, "  {:<18} -", name),
    }
}

impl fmt::Display for SnapshotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timestep {}", self.timestep)?;
        writeln!(
            f,
            "  {:<18} {} {:?}",
            "points", self.points, self.partition_points
        )?;
        write_range(f, "x", &self.x)?;
        write_range(f, "y", &self.y)?;
        write_range(f, "z", &self.z)?;
        write_range(f, "cumulative change", &self.cumulative_change)?;
        write_range(f, "discharge", &self.discharge)
    }
}
