//! Checks of the rules the platform enforces but decoding doesn't.
//!
//! Decoding accepts anything structurally sound so that payloads from newer
//! API versions keep working. The functions here check the length limits and
//! cross-field rules separately, for callers building values to send or
//! auditing values they received.

mod channel;
mod component;
mod message;

pub use self::{
    channel::validate_channel,
    component::validate_component,
    message::{validate_embed, validate_message},
};

use crate::guild::Permissions;
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// A model value breaks a rule of the platform.
#[derive(Debug)]
pub struct ValidationError {
    kind: ValidationErrorType,
}

impl ValidationError {
    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &ValidationErrorType {
        &self.kind
    }

    /// Consume the error, returning the owned error type.
    #[must_use = "consuming the error into its type has no effect if left unused"]
    pub fn into_kind(self) -> ValidationErrorType {
        self.kind
    }

    /// Path of the offending value, such as `embeds[0].fields[2].name`.
    pub fn path(&self) -> &str {
        match &self.kind {
            ValidationErrorType::OutOfRange { path, .. }
            | ValidationErrorType::FieldNotAllowed { path, .. }
            | ValidationErrorType::MinAboveMax { path, .. }
            | ValidationErrorType::OverlappingOverwrite { path, .. }
            | ValidationErrorType::SelectNotAlone { path, .. } => path,
        }
    }

    const fn new(kind: ValidationErrorType) -> Self {
        Self { kind }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            ValidationErrorType::OutOfRange {
                path,
                value,
                min,
                max,
            } => {
                f.write_str(path)?;
                f.write_str(" is ")?;
                Display::fmt(value, f)?;
                f.write_str(", but must be between ")?;
                Display::fmt(min, f)?;
                f.write_str(" and ")?;

                Display::fmt(max, f)
            }
            ValidationErrorType::FieldNotAllowed { path, reason } => {
                f.write_str(path)?;
                f.write_str(" is not allowed: ")?;

                f.write_str(reason)
            }
            ValidationErrorType::MinAboveMax { path, min, max } => {
                f.write_str(path)?;
                f.write_str(" has a minimum of ")?;
                Display::fmt(min, f)?;
                f.write_str(" above its maximum of ")?;

                Display::fmt(max, f)
            }
            ValidationErrorType::OverlappingOverwrite { path, overlap } => {
                f.write_str(path)?;
                f.write_str(" both allows and denies permissions ")?;

                Display::fmt(&overlap.bits(), f)
            }
            ValidationErrorType::SelectNotAlone { path, siblings } => {
                f.write_str(path)?;
                f.write_str(" holds a select menu and ")?;
                Display::fmt(siblings, f)?;

                f.write_str(" other components")
            }
        }
    }
}

impl Error for ValidationError {}

/// Type of [`ValidationError`] that occurred.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ValidationErrorType {
    /// A length, count or number is outside its bounds.
    OutOfRange {
        path: String,
        value: usize,
        min: usize,
        max: usize,
    },
    /// A field is set where the rest of the value forbids it.
    FieldNotAllowed { path: String, reason: &'static str },
    /// A lower bound is greater than the matching upper bound.
    MinAboveMax { path: String, min: usize, max: usize },
    /// A permission overwrite allows and denies the same bits.
    OverlappingOverwrite { path: String, overlap: Permissions },
    /// An action row holds a select menu next to other components.
    SelectNotAlone { path: String, siblings: usize },
}

/// Check that a number is within `min..=max`.
fn range(
    path: impl FnOnce() -> String,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        return Ok(());
    }

    Err(ValidationError::new(ValidationErrorType::OutOfRange {
        path: path(),
        value,
        min,
        max,
    }))
}

/// Check that a string has at most `max` characters.
fn chars(path: impl FnOnce() -> String, value: &str, max: usize) -> Result<(), ValidationError> {
    range(path, value.chars().count(), 0, max)
}

fn min_max(
    path: impl FnOnce() -> String,
    min: Option<usize>,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(ValidationError::new(
            ValidationErrorType::MinAboveMax {
                path: path(),
                min,
                max,
            },
        )),
        _ => Ok(()),
    }
}

fn not_allowed(path: impl Into<String>, reason: &'static str) -> ValidationError {
    ValidationError::new(ValidationErrorType::FieldNotAllowed {
        path: path.into(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::{chars, min_max, range, ValidationError, ValidationErrorType};
    use static_assertions::assert_impl_all;
    use std::{error::Error, fmt::Debug};

    assert_impl_all!(ValidationError: Debug, Error, Send, Sync);
    assert_impl_all!(ValidationErrorType: Clone, Debug, Eq, PartialEq, Send, Sync);

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(range(|| "a".to_owned(), 1, 1, 100).is_ok());
        assert!(range(|| "a".to_owned(), 100, 1, 100).is_ok());

        let err = range(|| "name".to_owned(), 0, 1, 100).unwrap_err();
        assert_eq!(err.path(), "name");
        assert_eq!(err.to_string(), "name is 0, but must be between 1 and 100");
    }

    #[test]
    fn chars_counts_characters_not_bytes() {
        assert!(chars(|| "title".to_owned(), &"é".repeat(256), 256).is_ok());
        assert!(chars(|| "title".to_owned(), &"é".repeat(257), 256).is_err());
    }

    #[test]
    fn min_above_max() {
        assert!(min_max(|| "v".to_owned(), Some(1), Some(1)).is_ok());
        assert!(min_max(|| "v".to_owned(), None, Some(0)).is_ok());

        let err = min_max(|| "v".to_owned(), Some(3), Some(2)).unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorType::MinAboveMax {
                path: "v".to_owned(),
                min: 3,
                max: 2,
            }
        );
    }
}
