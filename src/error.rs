//! Error taxonomy for course extraction and formatting.
//!
//! Nothing in the core propagates these past a public operation: extraction
//! and formatting return an [`Outcome`] that carries the partial record
//! alongside whatever went wrong, so one malformed course never aborts a batch.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Unknown subject area or common core tag
    #[error("lookup failed: {0}")]
    Lookup(String),

    /// Header, section or label text does not have the expected shape
    #[error("pattern mismatch: {0}")]
    PatternMismatch(String),

    /// Block structure is broken (e.g. continuation row with nothing to continue)
    #[error("malformed block: {0}")]
    MalformedBlock(String),

    /// Non-numeric text where an integer is required
    #[error("type conversion failed: {0}")]
    TypeConversion(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Tagged result of a never-raising operation.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Success(T),
    Failure { partial: T, errors: Vec<ExtractError> },
}

impl<T> Outcome<T> {
    /// `Success` when no error was recorded, `Failure` otherwise.
    pub fn from_parts(value: T, errors: Vec<ExtractError>) -> Self {
        if errors.is_empty() {
            Outcome::Success(value)
        } else {
            Outcome::Failure {
                partial: value,
                errors,
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure { partial, .. } => partial,
        }
    }

    pub fn errors(&self) -> &[ExtractError] {
        match self {
            Outcome::Success(_) => &[],
            Outcome::Failure { errors, .. } => errors,
        }
    }

    pub fn into_parts(self) -> (T, bool, Vec<ExtractError>) {
        match self {
            Outcome::Success(v) => (v, true, Vec::new()),
            Outcome::Failure { partial, errors } => (partial, false, errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_tags_by_errors() {
        let ok = Outcome::from_parts(1, vec![]);
        assert!(ok.is_ok());
        assert_eq!(ok.into_parts(), (1, true, vec![]));

        let failed = Outcome::from_parts(2, vec![ExtractError::Lookup("XYZ".into())]);
        assert!(!failed.is_ok());
        assert_eq!(*failed.value(), 2);
        assert_eq!(failed.errors().len(), 1);
    }

    #[test]
    fn messages_name_the_kind() {
        let e = ExtractError::TypeConversion("no number in \"TBA\"".into());
        assert_eq!(e.to_string(), "type conversion failed: no number in \"TBA\"");
    }
}
