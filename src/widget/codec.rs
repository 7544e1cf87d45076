//! Conversions between persisted scalar values and their editable text form.

use crate::error::{ConfigToolError, Result};

/// Join a list of identifiers into its editable one-line form.
pub fn list_to_str(items: &[String]) -> String {
    items.join(",")
}

/// Split an edited line back into a list: trim every segment, drop empty
/// ones, keep the order. Already-normalized lists round-trip unchanged.
pub fn str_to_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Every non-empty segment must be all digits (QQ ids).
pub fn validate_numeric_list(text: &str) -> Result<()> {
    for item in str_to_list(text) {
        if !item.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigToolError::InvalidListItem(item));
        }
    }

    Ok(())
}
