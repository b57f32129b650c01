use serde::Serialize;

/// Column holding the subject's age
pub const AGE_COLUMN: &str = "age";

/// Column holding the subject's email address
pub const EMAIL_COLUMN: &str = "email";

/// The five graded-question columns, in table order
pub const GRADE_COLUMNS: [&str; 5] = ["q1", "q2", "q3", "q4", "q5"];

/// Column appended by the scoring operation
pub const SCORE_COLUMN: &str = "score";

/// Missing grades tolerated per subject before the score is voided
pub const DEFAULT_MAX_NANS_PER_SUBJECT: u32 = 1;

/// A single table cell
///
/// JSON `null` maps to `Missing`; JSON numbers map to `Int` when integral
/// and `Float` otherwise. Serializes back to the same plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Missing,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    /// Numeric view of the cell, accepting both `Int` and `Float`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view of the cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

/// Result type for the application
pub type Result<T> = std::result::Result<T, crate::error::Error>;
