use std::path::PathBuf;

/// Failures that callers may want to tell apart.
///
/// Loaders return `anyhow::Error`; these sit at its root and can be recovered
/// with `downcast_ref::<DataError>()`.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("data file {} not found", .0.display())]
    MissingDataFile(PathBuf),

    #[error("could not read data file {}", path.display())]
    CorruptedData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A block is malformed. `line` is 1-based and points at the offending
    /// line, or at the first line of the block for block-level problems.
    #[error("invalid data format at line {line}: {reason}")]
    InvalidDataFormat { line: usize, reason: String },
}

impl DataError {
    pub(crate) fn invalid(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDataFormat {
            line,
            reason: reason.into(),
        }
    }
}
