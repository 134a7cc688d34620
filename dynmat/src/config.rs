//! Text output configuration

/// Formatting options for [`TextWriter`](crate::TextWriter)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextConfig {
    /// Written between two elements of a row
    pub separator: String,
    /// Written after every sequence and every grid row
    pub row_terminator: String,
    /// Fixed number of decimal places, or the element's own formatting
    pub precision: Option<usize>,
}

impl TextConfig {
    /// Set the element separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the row terminator
    pub fn with_row_terminator(mut self, row_terminator: impl Into<String>) -> Self {
        self.row_terminator = row_terminator.into();
        self
    }

    /// Format every element with a fixed number of decimal places
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            row_terminator: "\n".to_string(),
            precision: None,
        }
    }
}
