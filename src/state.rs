use crate::io::netcdf::PartitionData;

// Concatenated mesh arrays for a single timestep
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub timestep: u32,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub discharge: Vec<f64>,
    pub cumulative_change: Vec<f64>,
    /// Point count contributed by each partition, in partition order.
    pub partition_points: Vec<usize>,
}

impl Snapshot {
    pub fn new(timestep: u32) -> Self {
        Snapshot {
            timestep,
            ..Default::default()
        }
    }

    /// Appends one partition after those already pushed.
    pub fn push_partition(&mut self, data: &PartitionData) {
        let n = data.points();
        self.x.reserve(n);
        self.y.reserve(n);
        self.z.reserve(n);

        self.x.extend(data.column(0));
        self.y.extend(data.column(1));
        self.z.extend(data.column(2));
        self.cumulative_change.extend_from_slice(&data.cumdiff);
        self.discharge.extend_from_slice(&data.discharge);
        self.partition_points.push(n);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    // All five arrays share one length
    pub fn is_consistent(&self) -> bool {
        let n = self.x.len();
        self.y.len() == n
            && self.z.len() == n
            && self.discharge.len() == n
            && self.cumulative_change.len() == n
            && self.partition_points.iter().sum::<usize>() == n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition(rows: &[[f64; 3]], cumdiff: &[f64], discharge: &[f64]) -> PartitionData {
        PartitionData {
            coords: rows.iter().flatten().copied().collect(),
            cumdiff: cumdiff.to_vec(),
            discharge: discharge.to_vec(),
        }
    }

    #[test]
    fn partitions_concatenate_in_order() {
        let mut snapshot = Snapshot::new(4);
        snapshot.push_partition(&partition(&[[0.0, 1.0, 2.0]], &[0.5], &[9.0]));
        snapshot.push_partition(&partition(
            &[[3.0, 4.0, 5.0], [6.0, 7.0, 8.0]],
            &[0.6, 0.7],
            &[10.0, 11.0],
        ));

        assert_eq!(snapshot.timestep, 4);
        assert_eq!(snapshot.x, vec![0.0, 3.0, 6.0]);
        assert_eq!(snapshot.y, vec![1.0, 4.0, 7.0]);
        assert_eq!(snapshot.z, vec![2.0, 5.0, 8.0]);
        assert_eq!(snapshot.cumulative_change, vec![0.5, 0.6, 0.7]);
        assert_eq!(snapshot.discharge, vec![9.0, 10.0, 11.0]);
        assert_eq!(snapshot.partition_points, vec![1, 2]);
        assert!(snapshot.is_consistent());
    }

    #[test]
    fn empty_snapshot_is_consistent() {
        let snapshot = Snapshot::new(0);
        assert!(snapshot.is_empty());
        assert!(snapshot.is_consistent());
    }
}
