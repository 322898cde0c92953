//! Error types for graph construction and queries.

/// Error type for graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A record in the text format has the wrong shape. Fatal to construction.
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number of the offending record.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// A name that is not in the graph.
    #[error("Unknown person: {0}")]
    UnknownPerson(String),
    /// A name that is already in the graph.
    #[error("Duplicate person: {0}")]
    DuplicateName(String),
    /// A name or school that cannot be stored: blank, or containing a
    /// record separator (`|`, `\n`, `\r`).
    #[error("Invalid {field}: {value:?}")]
    InvalidField {
        /// Which field was rejected (`name` or `school`).
        field: &'static str,
        /// The rejected canonical value.
        value: String,
    },
    /// Reading or writing the text format failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A value could not be serialized for hashing.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl GraphError {
    /// Create a malformed input error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Whether the caller can keep using the graph after this error.
    ///
    /// Lookups of unknown names, rejected duplicates and rejected fields leave
    /// the graph untouched; malformed input and I/O failures abort construction.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownPerson(_) | Self::DuplicateName(_) | Self::InvalidField { .. }
        )
    }
}

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GraphError::malformed(3, "expected 2 fields");
        assert_eq!(err.to_string(), "Malformed input at line 3: expected 2 fields");
        assert_eq!(GraphError::UnknownPerson("sam".into()).to_string(), "Unknown person: sam");
    }

    #[test]
    fn test_recoverable() {
        assert!(GraphError::UnknownPerson("sam".into()).is_recoverable());
        assert!(GraphError::DuplicateName("sam".into()).is_recoverable());
        assert!(GraphError::InvalidField { field: "name", value: String::new() }.is_recoverable());
        assert!(!GraphError::malformed(1, "bad count").is_recoverable());
    }
}
