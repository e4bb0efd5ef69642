//! Configuration for loading and querying a person directory.

/// Default field delimiter of the record source.
pub const DEFAULT_DELIMITER: char = ';';

/// Default birth date format (`31/12/1999`).
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Settings shared by the record parser, the directory and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Character separating the five record fields.
    pub delimiter: char,
    /// `chrono` format string for birth dates.
    pub date_format: String,
    /// Upper-case name prefixes before searching.
    pub fold_prefix_case: bool,
    /// Abort loading on the first malformed record instead of skipping it.
    pub strict: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            fold_prefix_case: true,
            strict: false,
        }
    }
}

impl DirectoryConfig {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn with_fold_prefix_case(mut self, fold: bool) -> Self {
        self.fold_prefix_case = fold;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
