use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::Error;
use crate::types::{Cell, Result, GRADE_COLUMNS};

/// An ordered table of uniform-shape rows with named columns.
///
/// Rows are stored aligned with `columns`; the loader enforces that every
/// source record carries the same key set, so alignment holds by
/// construction. Operations never mutate a table in place, they build a new
/// one.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. The caller is responsible for column alignment.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Position of a named column, or `Error::MissingColumn`
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// Positions of the five grade columns `q1..q5`
    pub fn grade_indices(&self) -> Result<[usize; 5]> {
        let mut indices = [0usize; 5];
        for (slot, name) in indices.iter_mut().zip(GRADE_COLUMNS) {
            *slot = self.column_index(name)?;
        }
        Ok(indices)
    }

    /// Cell at (row, column position); rows are rectangular so this only
    /// returns `None` for an out-of-range row
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// A copy of this table with one extra column appended on the right.
    /// `cells` must hold one value per row.
    pub fn with_column(&self, name: &str, cells: Vec<Cell>) -> Table {
        debug_assert_eq!(cells.len(), self.rows.len());
        let mut columns = self.columns.clone();
        columns.push(name.to_string());
        let rows = self
            .rows
            .iter()
            .zip(cells)
            .map(|(row, cell)| {
                let mut row = row.clone();
                row.push(cell);
                row
            })
            .collect();
        Table { columns, rows }
    }
}

/// Serializes records-oriented: a JSON array of one object per row.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowRecord {
                columns: &self.columns,
                row,
            })?;
        }
        seq.end()
    }
}

struct RowRecord<'a> {
    columns: &'a [String],
    row: &'a [Cell],
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.row) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}
