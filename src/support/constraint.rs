//! Numeric constraints checked once, at construction.
//!
//! A [`Constrained<T, C>`] value always satisfies the constraint `C`, so code
//! that receives one never has to re-check it. Laboratory inputs use this to
//! make a zero or negative divisor unrepresentable.
//!
//! The only marker currently provided is [`StrictlyPositive`].
//! Custom constraints implement [`Constraint<T>`] for a zero-sized marker.

mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;

/// A numeric invariant enforced at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a numeric constraint is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_titration::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Volume, volume::milliliter};
///
/// let v = Constrained::<_, StrictlyPositive>::new(Volume::new::<milliliter>(10.0)).unwrap();
/// assert!(v.into_inner().get::<milliliter>() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
