//! Errors returned when a structured value can't be decoded into the model.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// A structured value couldn't be decoded into a model type.
///
/// Decoding failures are always returned as values, so a caller walking a
/// stream of records can skip one bad record and keep going.
#[derive(Debug)]
pub struct DecodeError {
    /// Type of error that occurred.
    kind: DecodeErrorType,
    /// Source of the error, if there is any.
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl DecodeError {
    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &DecodeErrorType {
        &self.kind
    }

    /// Consume the error, returning the source error if there is any.
    #[must_use = "consuming the error and retrieving the source has no effect if left unused"]
    pub fn into_source(self) -> Option<Box<dyn Error + Send + Sync>> {
        self.source
    }

    /// Consume the error, returning the owned error type and the source error.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(self) -> (DecodeErrorType, Option<Box<dyn Error + Send + Sync>>) {
        (self.kind, self.source)
    }

    /// Path of the value that failed to decode.
    pub fn path(&self) -> &str {
        match &self.kind {
            DecodeErrorType::UnrecognizedDiscriminant { path }
            | DecodeErrorType::MalformedField { path, .. }
            | DecodeErrorType::InvalidVariantCombination { path, .. }
            | DecodeErrorType::RecursionLimitExceeded { path, .. } => path,
        }
    }

    pub(crate) fn unrecognized_discriminant(path: impl Into<String>) -> Self {
        Self {
            kind: DecodeErrorType::UnrecognizedDiscriminant { path: path.into() },
            source: None,
        }
    }

    pub(crate) fn malformed(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            kind: DecodeErrorType::MalformedField {
                path: path.into(),
                expected: expected.into(),
                actual: actual.into(),
            },
            source: None,
        }
    }

    pub(crate) fn invalid_combination(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind: DecodeErrorType::InvalidVariantCombination {
                path: path.into(),
                reason: reason.into(),
            },
            source: None,
        }
    }

    pub(crate) fn recursion_limit(path: impl Into<String>, depth: usize) -> Self {
        Self {
            kind: DecodeErrorType::RecursionLimitExceeded {
                path: path.into(),
                depth,
            },
            source: None,
        }
    }

    pub(crate) fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));

        self
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            DecodeErrorType::UnrecognizedDiscriminant { path } => {
                f.write_str("discriminant at ")?;
                f.write_str(path)?;

                f.write_str(" is missing or not an integer")
            }
            DecodeErrorType::MalformedField {
                path,
                expected,
                actual,
            } => {
                f.write_str("malformed field at ")?;
                f.write_str(path)?;
                f.write_str(": expected ")?;
                f.write_str(expected)?;
                f.write_str(", found ")?;

                f.write_str(actual)
            }
            DecodeErrorType::InvalidVariantCombination { path, reason } => {
                f.write_str("invalid variant combination at ")?;
                f.write_str(path)?;
                f.write_str(": ")?;

                f.write_str(reason)
            }
            DecodeErrorType::RecursionLimitExceeded { path, depth } => {
                f.write_str("nesting at ")?;
                f.write_str(path)?;
                f.write_str(" exceeds the depth limit of ")?;

                Display::fmt(depth, f)
            }
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn Error + 'static))
    }
}

/// Type of [`DecodeError`] that occurred.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum DecodeErrorType {
    /// The top-level `type` field is absent or not an integer.
    ///
    /// Unknown *values* are not errors: they decode into the family's
    /// catch-all variant.
    UnrecognizedDiscriminant {
        /// Path of the discriminant field.
        path: String,
    },
    /// A known field has the wrong shape, or a required field is missing.
    MalformedField {
        /// Path of the field.
        path: String,
        /// Shape the field was expected to have.
        expected: String,
        /// Shape that was found, `missing` if the field is absent.
        actual: String,
    },
    /// The discriminants and payload of a value disagree, such as a link
    /// button that carries a `custom_id`.
    InvalidVariantCombination {
        /// Path of the offending value.
        path: String,
        /// Description of the disagreement.
        reason: String,
    },
    /// Nested values go deeper than the model allows.
    RecursionLimitExceeded {
        /// Path of the first value past the bound.
        path: String,
        /// The bound that was exceeded.
        depth: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{DecodeError, DecodeErrorType};
    use static_assertions::assert_impl_all;
    use std::{error::Error, fmt::Debug};

    assert_impl_all!(DecodeError: Debug, Error, Send, Sync);
    assert_impl_all!(DecodeErrorType: Clone, Debug, Eq, PartialEq, Send, Sync);

    #[test]
    fn malformed_display() {
        let err = DecodeError::malformed("channel.position", "i32", "string");
        assert_eq!(
            err.to_string(),
            "malformed field at channel.position: expected i32, found string"
        );
        assert_eq!(err.path(), "channel.position");
    }

    #[test]
    fn recursion_display() {
        let err = DecodeError::recursion_limit("component.components[0]", 2);
        assert_eq!(
            err.to_string(),
            "nesting at component.components[0] exceeds the depth limit of 2"
        );
    }

    #[test]
    fn source_is_kept() {
        let inner = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let err = DecodeError::malformed("a", "u8", "string").with_source(inner);
        assert!(err.source().is_some());

        let (kind, source) = err.into_parts();
        assert!(matches!(kind, DecodeErrorType::MalformedField { .. }));
        assert!(source.is_some());
    }
}
