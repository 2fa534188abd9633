//! Error types for vmath operations.
//!
//! Every fallible operation in the vmath crates reports one of the
//! variants of [`Error`]. All of them are local, deterministic faults
//! caused by the input values: there is no partial failure and nothing
//! to retry. In-place mutators validate before they mutate, so an `Err`
//! always means the receiver is untouched.
//!
//! # Usage
//!
//! ```rust
//! use vmath_core::{Error, Result};
//!
//! fn component(values: &[f64; 3], index: usize) -> Result<f64> {
//!     values
//!         .get(index)
//!         .copied()
//!         .ok_or(Error::index_out_of_range(index, 3))
//! }
//!
//! assert!(component(&[1.0, 2.0, 3.0], 1).is_ok());
//! assert!(component(&[1.0, 2.0, 3.0], 3).unwrap_err().is_index_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `vmath-linalg` - vectors, matrices, quaternions, complex numbers
//! - `vmath-color` - color parsing and indexing

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vmath value-type operations.
///
/// # Categories
///
/// - **Arithmetic errors**: [`DivisionByZero`](Error::DivisionByZero), [`NotInvertible`](Error::NotInvertible)
/// - **Access errors**: [`IndexOutOfRange`](Error::IndexOutOfRange), [`TooFewElements`](Error::TooFewElements)
/// - **Format errors**: [`Parse`](Error::Parse)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A denominator was exactly zero.
    ///
    /// Returned when normalizing a zero-length vector or quaternion,
    /// dividing a quaternion or complex number by zero, or dividing by a
    /// complex number with zero modulus.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vmath_core::Error;
    ///
    /// let err = Error::division_by_zero("normalizing a zero-length vector");
    /// assert!(err.to_string().contains("zero-length"));
    /// ```
    #[error("division by zero: {context}")]
    DivisionByZero {
        /// What was being divided
        context: &'static str,
    },

    /// A component index was outside `[0, len - 1]`.
    #[error("index {index} out of range for {len} components")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Number of addressable components
        len: usize,
    },

    /// A string did not match the expected literal format.
    #[error("failed to parse {kind} from {input:?}: {reason}")]
    Parse {
        /// Name of the type being parsed
        kind: &'static str,
        /// The rejected input
        input: String,
        /// Why the input was rejected
        reason: String,
    },

    /// The value has no inverse.
    ///
    /// Returned by quaternion inversion when the squared modulus is zero
    /// and by matrix inversion when the determinant is zero.
    #[error("{kind} {value} is not invertible")]
    NotInvertible {
        /// Name of the type
        kind: &'static str,
        /// Formatted value that failed to invert
        value: String,
    },

    /// A slice was shorter than the number of components required.
    #[error("expected at least {expected} elements, got {got}")]
    TooFewElements {
        /// Elements required
        expected: usize,
        /// Elements supplied
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::DivisionByZero`] error.
    #[inline]
    pub fn division_by_zero(context: &'static str) -> Self {
        Self::DivisionByZero { context }
    }

    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Creates an [`Error::Parse`] error.
    #[inline]
    pub fn parse(kind: &'static str, input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            kind,
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::NotInvertible`] error.
    #[inline]
    pub fn not_invertible(kind: &'static str, value: impl ToString) -> Self {
        Self::NotInvertible {
            kind,
            value: value.to_string(),
        }
    }

    /// Creates an [`Error::TooFewElements`] error.
    #[inline]
    pub fn too_few_elements(expected: usize, got: usize) -> Self {
        Self::TooFewElements { expected, got }
    }

    /// Returns `true` if this is a division-by-zero error.
    #[inline]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    /// Returns `true` if this is an index or length error.
    #[inline]
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::TooFewElements { .. })
    }

    /// Returns `true` if this is a parse error.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns `true` if this is an inversion error.
    #[inline]
    pub fn is_not_invertible(&self) -> bool {
        matches!(self, Self::NotInvertible { .. })
    }
}

/// Checks `index < len`, returning [`Error::IndexOutOfRange`] otherwise.
#[inline]
pub fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::index_out_of_range(index, len))
    }
}

/// Checks that a slice holds at least `expected` elements.
#[inline]
pub fn check_len<T>(slice: &[T], expected: usize) -> Result<()> {
    if slice.len() >= expected {
        Ok(())
    } else {
        Err(Error::too_few_elements(expected, slice.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range() {
        let err = Error::index_out_of_range(4, 3);
        let msg = err.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains('3'));
        assert!(err.is_index_error());
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_parse_error_message() {
        let err = Error::parse("Vector2", "(1; 2)", "expected 2 components, found 1");
        let msg = err.to_string();
        assert!(msg.contains("Vector2"));
        assert!(msg.contains("(1; 2)"));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_not_invertible() {
        let err = Error::not_invertible("Quaternion", "(0, 0, 0, 0)");
        assert_eq!(err.to_string(), "Quaternion (0, 0, 0, 0) is not invertible");
        assert!(err.is_not_invertible());
    }

    #[test]
    fn test_check_helpers() {
        assert!(check_index(2, 3).is_ok());
        assert_eq!(check_index(3, 3), Err(Error::index_out_of_range(3, 3)));
        assert!(check_len(&[1.0, 2.0], 2).is_ok());
        assert_eq!(check_len(&[1.0], 2), Err(Error::too_few_elements(2, 1)));
    }
}
