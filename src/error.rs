//! Error taxonomy.
//!
//! Errors exist for the `try_*` internals and for reference-data loading. The
//! public scoring operations never return them: they recover locally with a
//! documented default and log the cause through `tracing`.

use thiserror::Error;

/// Everything that can go wrong inside the scoring core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// A catalog or analytics lookup missed.
    #[error("missing reference data: {what} {key}")]
    MissingReferenceData {
        /// Which table was consulted.
        what: &'static str,
        /// The key that missed.
        key: String,
    },

    /// A category id outside 1..=64.
    #[error("category id {0} is outside 1..=64")]
    InvalidCategoryId(u8),

    /// A category id supplied more than once.
    #[error("category id {0} appears more than once")]
    DuplicateCategory(u8),

    /// An analytics line position outside 1..=6.
    #[error("line position {position} of category {category_id} is outside 1..=6")]
    InvalidLinePosition {
        /// Category the line belongs to.
        category_id: u8,
        /// The offending position.
        position: u8,
    },

    /// A configuration value failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A scorer produced NaN or infinity.
    #[error("non-finite value produced in {stage}")]
    NonFinite {
        /// Name of the scoring stage.
        stage: &'static str,
    },

    /// A replacement catalog did not carry all 64 records.
    #[error("catalog is incomplete: {found} of 64 records")]
    IncompleteCatalog {
        /// Number of distinct valid records supplied.
        found: usize,
    },

    /// Reference data could not be parsed.
    #[error("failed to parse reference data: {0}")]
    Parse(String),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ScoringError {
    fn from(e: serde_json::Error) -> Self {
        ScoringError::Parse(e.to_string())
    }
}

/// Guard a computed value, mapping NaN/inf to [`ScoringError::NonFinite`].
pub(crate) fn finite(value: f64, stage: &'static str) -> Result<f64, ScoringError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::NonFinite { stage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_guard() {
        assert_eq!(finite(1.5, "x"), Ok(1.5));
        assert_eq!(
            finite(f64::NAN, "consistency"),
            Err(ScoringError::NonFinite { stage: "consistency" })
        );
    }

    #[test]
    fn test_display_messages() {
        let e = ScoringError::InvalidCategoryId(70);
        assert_eq!(e.to_string(), "category id 70 is outside 1..=64");
        let e = ScoringError::InvalidLinePosition { category_id: 3, position: 7 };
        assert_eq!(e.to_string(), "line position 7 of category 3 is outside 1..=6");
        let e = ScoringError::IncompleteCatalog { found: 12 };
        assert!(e.to_string().contains("12 of 64"));
    }
}
