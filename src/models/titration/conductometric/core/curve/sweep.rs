use std::cmp::Ordering;

use thiserror::Error;
use uom::si::{f64::Volume, volume::milliliter};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// Titrant volumes at which the curve is sampled.
///
/// Samples are `start + i * step` for every `i` that keeps them at or below
/// `end`, so an `end` that is a whole number of steps from `start` is included.
///
/// Bounds are held in millilitres so samples are the exact `i * step`
/// products a lab sheet would list, without a round trip through m³.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    start_ml: f64,
    end_ml: f64,
    step_ml: Constrained<f64, StrictlyPositive>,
}

/// Errors that can occur when constructing a [`Sweep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SweepError {
    #[error("invalid sweep step")]
    Step(#[source] ConstraintError),

    #[error("sweep ends before it starts")]
    Reversed,

    #[error("sweep bound is not a number")]
    NotANumber,
}

impl Default for Sweep {
    /// 0 to 8 mL in 0.2 mL steps, 41 samples.
    fn default() -> Self {
        Self::from_milliliters(0.0, 8.0, 0.2).expect("default sweep should be valid")
    }
}

impl Sweep {
    /// Slack on the sample count so rounding in `(end - start) / step`
    /// doesn't drop the final sample.
    const COUNT_SLACK: f64 = 1e-9;

    /// Creates a sweep from volume quantities.
    ///
    /// # Errors
    ///
    /// Returns a [`SweepError`] if `step` is not strictly positive, if
    /// `end < start`, or if either bound is `NaN`.
    pub fn new(start: Volume, end: Volume, step: Volume) -> Result<Self, SweepError> {
        Self::from_milliliters(
            start.get::<milliliter>(),
            end.get::<milliliter>(),
            step.get::<milliliter>(),
        )
    }

    /// Creates a sweep from bounds and step in millilitres.
    ///
    /// # Errors
    ///
    /// See [`Sweep::new`].
    pub fn from_milliliters(start: f64, end: f64, step: f64) -> Result<Self, SweepError> {
        let step_ml = StrictlyPositive::new(step).map_err(SweepError::Step)?;

        match start.partial_cmp(&end) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self {
                start_ml: start,
                end_ml: end,
                step_ml,
            }),
            Some(Ordering::Greater) => Err(SweepError::Reversed),
            None => Err(SweepError::NotANumber),
        }
    }

    #[must_use]
    pub fn start(&self) -> Volume {
        Volume::new::<milliliter>(self.start_ml)
    }

    #[must_use]
    pub fn end(&self) -> Volume {
        Volume::new::<milliliter>(self.end_ml)
    }

    #[must_use]
    pub fn step(&self) -> Volume {
        Volume::new::<milliliter>(*self.step_ml.as_ref())
    }

    /// Number of samples in the sweep.
    #[must_use]
    pub fn len(&self) -> usize {
        let step = *self.step_ml.as_ref();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let intervals = ((self.end_ml - self.start_ml) / step + Self::COUNT_SLACK).floor() as usize;

        intervals + 1
    }

    /// A sweep always contains at least its start.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Sampled volumes in millilitres, ascending.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn volumes_ml(&self) -> impl Iterator<Item = f64> {
        let (start, step) = (self.start_ml, *self.step_ml.as_ref());

        (0..self.len()).map(move |i| start + i as f64 * step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_sweep() {
        let sweep = Sweep::default();

        assert_eq!(sweep.len(), 41);
        assert_relative_eq!(sweep.step().get::<milliliter>(), 0.2);

        let volumes: Vec<f64> = sweep.volumes_ml().collect();
        for (i, v) in volumes.iter().enumerate() {
            assert_eq!(*v, i as f64 * 0.2);
        }
        assert_eq!(volumes[5], 1.0);
        assert_eq!(volumes[10], 2.0);
        assert_relative_eq!(volumes[40], 8.0, epsilon = 1e-12);
    }

    #[test]
    fn end_off_the_grid_is_excluded() {
        let sweep = Sweep::from_milliliters(0.0, 1.0, 0.3).unwrap();
        assert_eq!(sweep.len(), 4);
    }

    #[test]
    fn single_point_sweep() {
        let sweep = Sweep::from_milliliters(3.0, 3.0, 0.5).unwrap();
        let volumes: Vec<f64> = sweep.volumes_ml().collect();

        assert_eq!(volumes, vec![3.0]);
    }

    #[test]
    fn invalid_sweeps() {
        assert_eq!(
            Sweep::from_milliliters(0.0, 8.0, 0.0),
            Err(SweepError::Step(ConstraintError::Zero))
        );
        assert_eq!(
            Sweep::from_milliliters(0.0, 8.0, -0.2),
            Err(SweepError::Step(ConstraintError::Negative))
        );
        assert_eq!(
            Sweep::from_milliliters(8.0, 0.0, 0.2),
            Err(SweepError::Reversed)
        );
        assert_eq!(
            Sweep::from_milliliters(f64::NAN, 8.0, 0.2),
            Err(SweepError::NotANumber)
        );
    }
}
