//! Error types and boundary validation.
//!
//! The simulation core has exactly one failure mode: a caller hands it a
//! value that must be positive (the step interval, a forward/rewind count)
//! or finite (a real-valued parameter) and it is not. Such input is rejected
//! before any state is touched.
//!
//! Degenerate geometry and over-long rewinds are *not* errors; they produce
//! well-defined results instead.

use core::fmt;
use core::num::NonZeroUsize;
use core::str::FromStr;

use thiserror::Error;

/// Errors produced by the simulation core.
///
/// # Error Handling
///
/// | Variant | Recovery |
/// |---------|----------|
/// | [`InvalidParameter`](SimError::InvalidParameter) | Keep the previous valid value |
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A field received a value outside its valid domain.
    ///
    /// Raised for a non-positive or non-numeric step interval or step count,
    /// and for a non-finite real-valued parameter.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending field.
        name: &'static str,
        /// Human-readable description of what was wrong.
        reason: String,
    },
}

impl SimError {
    /// Creates an [`InvalidParameter`](SimError::InvalidParameter) error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SimError>;

/// A validated, strictly positive number of simulation steps.
///
/// Used for forward and rewind requests. Construct it with [`StepCount::new`]
/// or parse it from user text with [`parse_step_count`] / [`str::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepCount(NonZeroUsize);

impl StepCount {
    /// A single step.
    pub const ONE: Self = Self(NonZeroUsize::MIN);

    /// Returns `None` when `n` is zero.
    #[inline]
    pub const fn new(n: usize) -> Option<Self> {
        match NonZeroUsize::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// The count as a plain integer (always at least 1).
    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for StepCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StepCount {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        parse_step_count(s)
    }
}

impl TryFrom<i64> for StepCount {
    type Error = SimError;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| SimError::invalid("step count", format!("{value} is not positive")))
    }
}

/// Parses a user-supplied step count.
///
/// Accepts surrounding whitespace. Rejects empty input, anything that is not
/// an integer, and integers below 1.
///
/// # Errors
///
/// Returns [`SimError::InvalidParameter`] when the text is not a positive
/// integer.
///
/// # Example
///
/// ```rust
/// use lissajous::parse_step_count;
///
/// assert_eq!(parse_step_count(" 25 ").unwrap().get(), 25);
/// assert!(parse_step_count("0").is_err());
/// assert!(parse_step_count("ten").is_err());
/// ```
pub fn parse_step_count(text: &str) -> Result<StepCount> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| SimError::invalid("step count", format!("`{trimmed}` is not a number")))?;
    StepCount::try_from(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_step_count("1").unwrap(), StepCount::ONE);
        assert_eq!(parse_step_count("\t42\n").unwrap().get(), 42);
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert!(parse_step_count("0").is_err());
        assert!(parse_step_count("-3").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for text in ["", "  ", "abc", "1.5", "3 steps"] {
            let err = parse_step_count(text).unwrap_err();
            assert!(matches!(err, SimError::InvalidParameter { name: "step count", .. }));
        }
    }

    #[test]
    fn test_from_str() {
        let n: StepCount = "7".parse().unwrap();
        assert_eq!(n.get(), 7);
        assert_eq!(n.to_string(), "7");
    }

    #[test]
    fn test_error_display() {
        let err = SimError::invalid("step_interval_ms", "must be positive");
        assert_eq!(
            err.to_string(),
            "invalid parameter `step_interval_ms`: must be positive"
        );
    }
}
