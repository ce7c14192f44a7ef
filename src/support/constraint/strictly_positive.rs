use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a value is greater than zero.
///
/// # Examples
///
/// ```
/// use twine_titration::support::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(0.05).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::<T, Self>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Volume, volume::milliliter};

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(0.05).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-1.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn volumes() {
        let v = StrictlyPositive::new(Volume::new::<milliliter>(5.0)).unwrap();
        assert_relative_eq!(v.as_ref().get::<milliliter>(), 5.0);

        assert!(StrictlyPositive::new(Volume::new::<milliliter>(0.0)).is_err());
        assert!(StrictlyPositive::new(Volume::new::<milliliter>(-10.0)).is_err());
    }
}
