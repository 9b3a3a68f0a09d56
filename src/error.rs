//! Error type for fallible fraction construction.

use thiserror::Error;

/// A denominator evaluated to zero.
///
/// Returned by [`Fraction::new`](crate::Fraction::new) for a zero
/// denominator, and by [`Fraction::div`](crate::Fraction::div) /
/// [`Fraction::recip`](crate::Fraction::recip) when the divisor is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("division by zero")]
pub struct DivisionByZero;
