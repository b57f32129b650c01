//! Cleaning, imputation and scoring for questionnaire response tables.
//!
//! A dataset is a records-oriented JSON file: one object per subject with
//! `age`, `email` and the five graded questions `q1..q5` (plus any extra
//! columns, which pass through untouched). [`QuestionnaireData`] loads the
//! file once and exposes four independent operations over the immutable
//! table:
//!
//! - [`QuestionnaireData::age_distribution`] — fixed ten-bucket histogram
//!   over ages 0–100, optionally rendered through a [`HistogramSink`];
//! - [`QuestionnaireData::filter_valid_emails`] — drop rows whose email
//!   fails a deliberately loose structural check;
//! - [`QuestionnaireData::fill_missing_grades`] — replace missing grades
//!   with the row mean of the present ones;
//! - [`QuestionnaireData::score_subjects`] — floored mean grade as a `u8`
//!   score, voided past a missing-grade tolerance.
//!
//! Missing cells are ordinary domain values, never errors; errors are
//! reserved for unreadable input and absent required columns.

pub mod dataset;
pub mod error;
pub mod loader;
pub mod ops;
pub mod output;
pub mod plot;
pub mod table;
pub mod types;

pub use dataset::QuestionnaireData;
pub use error::Error;
pub use ops::{AgeDistribution, AGE_BIN_COUNT, AGE_BIN_EDGES};
pub use plot::{HistogramSink, NullSink, TextHistogram};
pub use table::Table;
pub use types::{Cell, Result, DEFAULT_MAX_NANS_PER_SUBJECT, GRADE_COLUMNS};
