pub mod email;
pub mod histogram;
pub mod impute;
pub mod score;

pub use email::{filter_valid_emails, is_valid_email};
pub use histogram::{age_distribution, AgeDistribution, AGE_BIN_COUNT, AGE_BIN_EDGES};
pub use impute::fill_missing_grades;
pub use score::score_subjects;
