use derive_more::{AsRef, Deref, Display, From, Into};
use thiserror::Error;

pub const MIN_LABELS: usize = 2;
pub const DEFAULT_LABELS: [&str; 6] = ["Alice", "Bob", "Charlie", "Diana", "Eve", "Frank"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct Label(String);

crate::impl_string_newtype!(Label);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Please enter at least 2 names (found {found})")]
    TooFew { found: usize },
}

/// Ordered wheel entries. Always holds at least [`MIN_LABELS`] labels, so a
/// segment width derived from it is never degenerate. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct LabelList(Vec<Label>);

impl LabelList {
    pub fn new(labels: Vec<Label>) -> Result<Self, LabelError> {
        if labels.len() < MIN_LABELS {
            return Err(LabelError::TooFew {
                found: labels.len(),
            });
        }
        Ok(Self(labels))
    }

    /// Newline-joined form, used both for display and persistence.
    pub fn to_text(&self) -> String {
        self.0
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for LabelList {
    fn default() -> Self {
        Self(DEFAULT_LABELS.iter().map(|s| Label::new(*s)).collect())
    }
}

pub fn split_labels(text: &str) -> Vec<Label> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Label::new)
        .collect()
}

pub fn parse_labels(text: &str) -> Result<LabelList, LabelError> {
    LabelList::new(split_labels(text))
}
