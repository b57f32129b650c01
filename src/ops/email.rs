use log::debug;

use crate::table::Table;
use crate::types::{Result, EMAIL_COLUMN};

/// Structural validity check for an email address.
///
/// Deliberately loose, not RFC validation:
/// - exactly one `@`, neither at the start nor at the very end;
/// - at least one `.`, the first not at the start and the last not at the
///   very end;
/// - the character directly after the `@` is not a `.`.
///
/// Nothing requires the `.` to come after the `@`.
pub fn is_valid_email(email: &str) -> bool {
    let bytes = email.as_bytes();
    let len = bytes.len();

    let Some(at) = email.find('@') else {
        return false;
    };
    if email.rfind('@') != Some(at) {
        return false; // more than one '@'
    }
    if at == 0 || at == len - 1 {
        return false;
    }

    let Some(first_dot) = email.find('.') else {
        return false;
    };
    let last_dot = email.rfind('.').unwrap_or(first_dot);
    if first_dot == 0 || last_dot == len - 1 {
        return false;
    }

    bytes[at + 1] != b'.'
}

/// Drop every row whose `email` cell fails [`is_valid_email`].
///
/// Missing or non-text email cells are invalid. Surviving rows keep their
/// source order under a fresh contiguous index.
pub fn filter_valid_emails(table: &Table) -> Result<Table> {
    let email_index = table.column_index(EMAIL_COLUMN)?;

    let mut filtered = Table::new(table.columns().to_vec());
    for row in table.rows() {
        let valid = row[email_index]
            .as_str()
            .map(is_valid_email)
            .unwrap_or(false);
        if valid {
            filtered.push_row(row.to_vec());
        }
    }

    debug!(
        "email filter kept {} of {} rows",
        filtered.len(),
        table.len()
    );
    Ok(filtered)
}
