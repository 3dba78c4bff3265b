//! Error types for checked geometry operations.

use std::fmt;

/// A precondition violated at call time.
///
/// Only magnitude division can fail; every other operation is total over
/// its numeric type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Divided by zero.
    DivisionByZero,

    /// Integral division would truncate one of the dimensions.
    InexactDivision {
        /// The dividend height.
        height: String,
        /// The dividend width.
        width: String,
        /// The divisor that does not divide both evenly.
        divisor: String,
    },
}

impl GeometryError {
    /// Builds an [`GeometryError::InexactDivision`] from any debuggable values.
    pub fn inexact_division(
        height: impl fmt::Debug,
        width: impl fmt::Debug,
        divisor: impl fmt::Debug,
    ) -> Self {
        GeometryError::InexactDivision {
            height: format!("{:?}", height),
            width: format!("{:?}", width),
            divisor: format!("{:?}", divisor),
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::DivisionByZero => write!(f, "Division by zero"),
            GeometryError::InexactDivision {
                height,
                width,
                divisor,
            } => write!(
                f,
                "Inexact division: {}x{} is not evenly divisible by {}",
                width, height, divisor
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type for checked geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_division_by_zero() {
        assert_eq!(GeometryError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_display_inexact_division() {
        let err = GeometryError::inexact_division(5, 9, 2);
        assert_eq!(
            err.to_string(),
            "Inexact division: 9x5 is not evenly divisible by 2"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(GeometryError::DivisionByZero);
        assert!(err.source().is_none());
    }
}
