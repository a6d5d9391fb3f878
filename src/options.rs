//! Options controlling a conversion run.

/// Conversion options for [`crate::Converter`] entry points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// Wildcard pattern; resources whose name matches are dropped.
    pub exclude: Option<String>,
    /// Whether to attach trailing comments to converted values.
    pub include_comments: bool,
}

impl Options {
    /// Creates default options: no exclusion, no comment capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wildcard exclusion pattern.
    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }

    /// Enables/disables trailing-comment capture.
    pub fn with_comments(mut self, include_comments: bool) -> Self {
        self.include_comments = include_comments;
        self
    }
}
