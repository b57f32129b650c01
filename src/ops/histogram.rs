use serde::Serialize;

use crate::table::Table;
use crate::types::{Result, AGE_COLUMN};

/// Number of age buckets
pub const AGE_BIN_COUNT: usize = 10;

/// Fixed bucket boundaries: every 10 years over [0, 100]
pub const AGE_BIN_EDGES: [f64; AGE_BIN_COUNT + 1] = [
    0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0,
];

/// Subject counts per ten-year age bucket, with the fixed bin edges.
///
/// Bucket `i` covers `[edges[i], edges[i+1])`; the last bucket is closed on
/// both ends so an age of exactly 100 is counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeDistribution {
    pub counts: [u64; AGE_BIN_COUNT],
    pub edges: [f64; AGE_BIN_COUNT + 1],
}

impl AgeDistribution {
    /// Total number of subjects counted across all buckets
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Bucket the `age` column of the table.
///
/// Missing ages contribute to no bucket, and neither do values outside
/// [0, 100].
pub fn age_distribution(table: &Table) -> Result<AgeDistribution> {
    let age_index = table.column_index(AGE_COLUMN)?;

    let mut counts = [0u64; AGE_BIN_COUNT];
    for row in table.rows() {
        let Some(age) = row[age_index].as_f64() else {
            continue;
        };
        if let Some(bucket) = bucket_for(age) {
            counts[bucket] += 1;
        }
    }

    Ok(AgeDistribution {
        counts,
        edges: AGE_BIN_EDGES,
    })
}

fn bucket_for(age: f64) -> Option<usize> {
    if !age.is_finite() || !(0.0..=100.0).contains(&age) {
        return None;
    }
    if age == 100.0 {
        return Some(AGE_BIN_COUNT - 1);
    }
    Some((age / 10.0) as usize)
}
