//! Injective two-way mapping between machine tokens and display labels.

use crate::error::{ConfigToolError, Result};

/// Built once per enum-mapped field. Both directions must be unique; a
/// persisted token outside the known set falls back to a default label so
/// an old config never breaks projection.
#[derive(Debug, Clone)]
pub struct BiDict {
    pairs: Vec<(String, String)>,
    fallback_label: String,
}

impl BiDict {
    /// `pairs` is (token, label) in display order. Panics on a duplicate
    /// token or label, which is a programming error in the mapping table.
    pub fn new(pairs: &[(&str, &str)], fallback_label: &str) -> Self {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(token, label)| (token.to_string(), label.to_string()))
            .collect();

        for (i, (token, label)) in pairs.iter().enumerate() {
            for (other_token, other_label) in &pairs[i + 1..] {
                assert!(token != other_token, "duplicate token: {token}");
                assert!(label != other_label, "duplicate label: {label}");
            }
        }
        assert!(
            pairs.iter().any(|(_, label)| label == fallback_label),
            "fallback label {fallback_label} is not in the mapping"
        );

        Self {
            pairs,
            fallback_label: fallback_label.to_string(),
        }
    }

    /// Display label for a persisted token, or the fallback label for a
    /// token the mapping no longer (or never) knew.
    pub fn to_display<'a>(&'a self, token: &str) -> &'a str {
        self.pairs
            .iter()
            .find(|(t, _)| t == token)
            .map_or(self.fallback_label.as_str(), |(_, label)| label.as_str())
    }

    /// Machine token for a display label. Unreachable through the UI since
    /// selection controls are populated from `labels()`.
    pub fn to_token<'a>(&'a self, label: &str) -> Result<&'a str> {
        self.pairs
            .iter()
            .find(|(_, l)| l == label)
            .map(|(token, _)| token.as_str())
            .ok_or_else(|| ConfigToolError::UnmappedLabel(label.to_string()))
    }

    /// All display labels in mapping order, for populating a combo box.
    pub fn labels(&self) -> Vec<String> {
        self.pairs.iter().map(|(_, label)| label.clone()).collect()
    }
}
