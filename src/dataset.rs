use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::loader;
use crate::ops;
use crate::ops::AgeDistribution;
use crate::plot::HistogramSink;
use crate::table::Table;
use crate::types::Result;

/// A loaded questionnaire-response table and the operations over it.
///
/// The table is read once at construction and never mutated afterwards;
/// every operation is an independent pure read that returns a derived value
/// or a fresh table, so they can run in any order and any number of times.
pub struct QuestionnaireData {
    path: PathBuf,
    table: Table,
    source_hash: String,
}

impl QuestionnaireData {
    /// Load a dataset from a records-oriented JSON file.
    ///
    /// Accepts anything path-like (`&str`, `String`, `&Path`, `PathBuf`),
    /// normalized to an owned path before use.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let table = loader::load_table(&path)?;
        let source_hash = loader::compute_file_hash(&path)?;
        info!(
            "loaded {} ({} subjects, sha256 {})",
            path.display(),
            table.len(),
            &source_hash[..12]
        );
        Ok(Self {
            path,
            table,
            source_hash,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// SHA-256 of the source file, for provenance
    pub fn source_hash(&self) -> &str {
        &self.source_hash
    }

    /// Ten-bucket age histogram over [0, 100]
    pub fn age_distribution(&self) -> Result<AgeDistribution> {
        ops::age_distribution(&self.table)
    }

    /// Compute the age histogram and hand it to a rendering sink.
    ///
    /// A sink failure is logged, not surfaced; the computed numbers are the
    /// contract.
    pub fn show_age_distribution(&self, sink: &mut dyn HistogramSink) -> Result<AgeDistribution> {
        let dist = self.age_distribution()?;
        if let Err(err) = sink.render(
            &dist.counts,
            &dist.edges,
            "Age Distribution",
            "Bins",
            "Number of People",
        ) {
            warn!("histogram sink failed: {err}");
        }
        Ok(dist)
    }

    /// New table holding only rows with a structurally valid email
    pub fn filter_valid_emails(&self) -> Result<Table> {
        ops::filter_valid_emails(&self.table)
    }

    /// New table with missing grades replaced by each row's mean of present
    /// grades, plus the indices of the rows that were touched
    pub fn fill_missing_grades(&self) -> Result<(Table, Vec<usize>)> {
        ops::fill_missing_grades(&self.table)
    }

    /// New table with a `score` column appended; see
    /// [`ops::score_subjects`] and [`crate::types::DEFAULT_MAX_NANS_PER_SUBJECT`]
    pub fn score_subjects(&self, maximal_nans_per_sub: u32) -> Result<Table> {
        ops::score_subjects(&self.table, maximal_nans_per_sub)
    }
}
