use log::debug;

use crate::table::Table;
use crate::types::{Cell, Result};

/// Replace each missing grade with the mean of that row's present grades.
///
/// Returns the imputed table together with the 0-based indices, in source
/// order, of every row that had at least one missing grade. Present cells
/// are carried over untouched.
///
/// A row with all five grades missing has no defined mean; its cells stay
/// missing, and its index is still reported.
pub fn fill_missing_grades(table: &Table) -> Result<(Table, Vec<usize>)> {
    let grade_indices = table.grade_indices()?;

    let mut filled = Table::new(table.columns().to_vec());
    let mut modified = Vec::new();

    for (i, row) in table.rows().enumerate() {
        let mut row = row.to_vec();

        let present: Vec<f64> = grade_indices
            .iter()
            .filter_map(|&c| row[c].as_f64())
            .collect();
        let missing: Vec<usize> = grade_indices
            .iter()
            .copied()
            .filter(|&c| row[c].is_missing())
            .collect();

        if !missing.is_empty() {
            modified.push(i);
            if !present.is_empty() {
                let mean = present.iter().sum::<f64>() / present.len() as f64;
                debug!("row {i}: imputing {} grade(s) with mean {mean}", missing.len());
                for c in missing {
                    row[c] = Cell::Float(mean);
                }
            }
        }

        filled.push_row(row);
    }

    Ok((filled, modified))
}
