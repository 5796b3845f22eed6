//! Error type shared by the data source, configuration parsing and the access gate.

use thiserror::Error;

/// Result alias for fallible core operations.
pub type Result<T> = std::result::Result<T, MetaboError>;

#[derive(Error, Debug)]
pub enum MetaboError {
    /// Date/time cells did not match `DD/MM/YYYY HH:MM`.
    #[error("malformed timestamp `{raw}` (expected DD/MM/YYYY HH:MM)")]
    MalformedTimestamp { raw: String },

    /// A selector value outside its enumerated set.
    #[error("unsupported {field} `{value}`")]
    UnsupportedOption { field: &'static str, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no access password configured (set METABO_APP_PASSWORD)")]
    PasswordNotConfigured,
}

impl MetaboError {
    pub(crate) fn unsupported(field: &'static str, value: &str) -> Self {
        Self::UnsupportedOption {
            field,
            value: value.to_string(),
        }
    }
}
