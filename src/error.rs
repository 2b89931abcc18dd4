//! # Error Types
//!
//! This module defines the error type shared by every stage of the grouping
//! pipeline: roster parsing, fitness evaluation, selection, crossover and the
//! evolution loop itself.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use balanced_groups::error::{GroupingError, Result};
//!
//! fn check_size(size: usize) -> Result<()> {
//!     if size < 2 {
//!         return Err(GroupingError::GroupTooSmall { size });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_size(1).is_err());
//! assert!(check_size(5).is_ok());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use balanced_groups::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_roster(path: &str) -> Result<()> {
//!     File::open(path).context("Failed to open roster file")?;
//!     Ok(())
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use balanced_groups::error::{GroupingError, OptionExt};
//!
//! fn highest(scores: &[u32]) -> balanced_groups::error::Result<u32> {
//!     scores.iter().max().copied().ok_or_else_grouping(||
//!         GroupingError::InsufficientPopulation { groups: 0 }
//!     )
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while forming balanced groups.
#[derive(Error, Debug)]
pub enum GroupingError {
    /// A fitness evaluation was attempted on a group with no members.
    #[error("Empty group error: cannot evaluate a group with no members")]
    EmptyGroup,

    /// Sample variance needs at least two values.
    #[error("Group too small for variance: {size} member(s), at least 2 required")]
    GroupTooSmall { size: usize },

    /// Parent selection needs at least two groups to pick distinct extremes.
    #[error("Insufficient population: {groups} group(s), at least 2 required for selection")]
    InsufficientPopulation { groups: usize },

    /// The fitness slice handed to a selection does not line up with the population.
    #[error("Fitness vector length ({scores}) doesn't match population length ({groups})")]
    FitnessMismatch { groups: usize, scores: usize },

    /// Crossover parents must have the same number of members.
    #[error("Crossover error: parents have different sizes ({left} vs {right})")]
    ParentSizeMismatch { left: usize, right: usize },

    /// A gender field is neither of the two known categories.
    #[error("Unknown gender category '{0}'")]
    InvalidGender(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A roster or output row could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for grouping operations.
pub type Result<T> = std::result::Result<T, GroupingError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use balanced_groups::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> balanced_groups::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GroupingError` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GroupingError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GroupingError>` using
    /// a closure to generate the error.
    fn ok_or_else_grouping<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GroupingError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_grouping<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GroupingError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_context_wraps_message() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err = res.context("Failed to open roster").unwrap_err();
        assert_eq!(err.to_string(), "Failed to open roster: missing");
    }

    #[test]
    fn test_option_ext() {
        let none: Option<u8> = None;
        let err = none
            .ok_or_else_grouping(|| GroupingError::InsufficientPopulation { groups: 1 })
            .unwrap_err();
        assert!(matches!(
            err,
            GroupingError::InsufficientPopulation { groups: 1 }
        ));
        assert_eq!(Some(3).ok_or_else_grouping(|| GroupingError::EmptyGroup).unwrap(), 3);
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err::<(), _>(io::Error::new(io::ErrorKind::Other, "disk"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(GroupingError::Io(_))));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GroupingError::GroupTooSmall { size: 1 }.to_string(),
            "Group too small for variance: 1 member(s), at least 2 required"
        );
        assert_eq!(
            GroupingError::Parse {
                line: 4,
                message: "bad CGPA".to_string()
            }
            .to_string(),
            "Parse error on line 4: bad CGPA"
        );
    }
}
