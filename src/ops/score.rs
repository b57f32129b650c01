use crate::table::Table;
use crate::types::{Cell, Result, SCORE_COLUMN};

/// Append a `score` column: the floored mean of each row's present grades.
///
/// A row with more than `maximal_nans_per_sub` missing grades gets a
/// missing score. The score is an 8-bit unsigned value; flooring happens
/// explicitly before the cast.
pub fn score_subjects(table: &Table, maximal_nans_per_sub: u32) -> Result<Table> {
    let grade_indices = table.grade_indices()?;

    let mut scores: Vec<Option<u8>> = Vec::with_capacity(table.len());
    for row in table.rows() {
        let present: Vec<f64> = grade_indices
            .iter()
            .filter_map(|&c| row[c].as_f64())
            .collect();
        let missing = grade_indices
            .iter()
            .filter(|&&c| row[c].is_missing())
            .count() as u32;

        if missing > maximal_nans_per_sub || present.is_empty() {
            scores.push(None);
        } else {
            let mean = present.iter().sum::<f64>() / present.len() as f64;
            scores.push(Some(mean.floor() as u8));
        }
    }

    let cells = scores
        .into_iter()
        .map(|score| match score {
            Some(value) => Cell::Int(i64::from(value)),
            None => Cell::Missing,
        })
        .collect();

    Ok(table.with_column(SCORE_COLUMN, cells))
}
