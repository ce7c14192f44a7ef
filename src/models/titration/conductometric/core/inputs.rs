//! Inputs to a conductometric titration and the ranges of the controls that supply them.

use std::{fmt, ops::Deref};

use crate::support::constraint::{
    Constrained, ConstraintError, ConstraintResult, StrictlyPositive,
};
use uom::si::{
    f64::{MolarConcentration, Volume},
    molar_concentration::mole_per_liter,
    volume::milliliter,
};

use super::{ValidationError, Warning};

/// Volume of the acid sample being titrated.
///
/// The value must be strictly positive, since the composition divides by it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SampleVolume(Constrained<Volume, StrictlyPositive>);

impl SampleVolume {
    /// Create a [`SampleVolume`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::volume::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(Volume::new::<U>(value))
    }

    /// Create a [`SampleVolume`] from a volume quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Volume) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }
}

impl Deref for SampleVolume {
    type Target = Volume;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Titrant volumes at which the two neutralizations complete.
///
/// `a` is the strong acid (HCl) endpoint and `b` the combined endpoint after
/// the weak acid (CH₃COOH) is also neutralized.
/// A well-formed pair has `a < b`, but this is not enforced;
/// see [`Endpoints::is_ordered`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoints {
    pub a: Volume,
    pub b: Volume,
}

impl Endpoints {
    #[must_use]
    pub fn new(a: Volume, b: Volume) -> Self {
        Self { a, b }
    }

    /// Creates endpoints from volumes in millilitres.
    #[must_use]
    pub fn from_milliliters(a: f64, b: f64) -> Self {
        Self::new(Volume::new::<milliliter>(a), Volume::new::<milliliter>(b))
    }

    /// Returns true if the HCl endpoint precedes the combined endpoint.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.a < self.b
    }

    /// Titrant volume spent on the weak acid alone (`b - a`).
    #[must_use]
    pub fn weak_acid_volume(&self) -> Volume {
        self.b - self.a
    }
}

/// The four values a user sets before each recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitrationInputs {
    pub sample_volume: SampleVolume,

    /// NaOH normality, in equivalents per litre.
    ///
    /// Every species here is monoprotic, so equivalents and moles coincide.
    pub normality: MolarConcentration,

    pub endpoints: Endpoints,
}

impl TitrationInputs {
    /// Creates inputs from quantities.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SampleVolume`] if the sample volume is not
    /// strictly positive.
    pub fn new(
        sample_volume: Volume,
        normality: MolarConcentration,
        endpoints: Endpoints,
    ) -> Result<Self, ValidationError> {
        let sample_volume =
            SampleVolume::from_quantity(sample_volume).map_err(ValidationError::SampleVolume)?;

        Ok(Self {
            sample_volume,
            normality,
            endpoints,
        })
    }

    /// Creates inputs from the laboratory units the controls use:
    /// millilitres for volumes and N for normality.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SampleVolume`] if the sample volume is not
    /// strictly positive.
    ///
    /// # Example
    ///
    /// ```
    /// use twine_titration::models::titration::conductometric::{TitrationInputs, ValidationError};
    ///
    /// assert!(TitrationInputs::from_lab_units(10.0, 0.1, 2.0, 6.5).is_ok());
    /// assert!(matches!(
    ///     TitrationInputs::from_lab_units(0.0, 0.1, 2.0, 6.5),
    ///     Err(ValidationError::SampleVolume(_))
    /// ));
    /// ```
    pub fn from_lab_units(
        sample_volume_ml: f64,
        normality_n: f64,
        endpoint_a_ml: f64,
        endpoint_b_ml: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(
            Volume::new::<milliliter>(sample_volume_ml),
            MolarConcentration::new::<mole_per_liter>(normality_n),
            Endpoints::from_milliliters(endpoint_a_ml, endpoint_b_ml),
        )
    }

    /// Returns the non-fatal conditions these inputs raise.
    ///
    /// Computation proceeds regardless; the caller decides what to show.
    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();

        if !self.endpoints.is_ordered() {
            warnings.push(Warning::EndpointsOutOfOrder {
                a: self.endpoints.a,
                b: self.endpoints.b,
            });
        }

        let values = [
            (Control::SampleVolume, self.sample_volume.get::<milliliter>()),
            (Control::Normality, self.normality.get::<mole_per_liter>()),
            (Control::EndpointA, self.endpoints.a.get::<milliliter>()),
            (Control::EndpointB, self.endpoints.b.get::<milliliter>()),
        ];

        for (control, value) in values {
            if let Err(reason) = control.range().check(value) {
                warnings.push(Warning::OutsideInputRange {
                    control,
                    value,
                    reason,
                });
            }
        }

        warnings
    }
}

impl Default for TitrationInputs {
    /// The starting position of every control.
    fn default() -> Self {
        Self::try_from(ControlValues::default())
            .expect("default sample volume should be positive")
    }
}

/// Raw control positions in laboratory units, as a UI supplies them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlValues {
    pub sample_volume_ml: f64,
    pub normality_n: f64,
    pub endpoint_a_ml: f64,
    pub endpoint_b_ml: f64,
}

impl Default for ControlValues {
    fn default() -> Self {
        Self {
            sample_volume_ml: InputRange::SAMPLE_VOLUME_ML.default,
            normality_n: InputRange::NORMALITY_N.default,
            endpoint_a_ml: InputRange::ENDPOINT_A_ML.default,
            endpoint_b_ml: InputRange::ENDPOINT_B_ML.default,
        }
    }
}

impl TryFrom<ControlValues> for TitrationInputs {
    type Error = ValidationError;

    fn try_from(values: ControlValues) -> Result<Self, Self::Error> {
        Self::from_lab_units(
            values.sample_volume_ml,
            values.normality_n,
            values.endpoint_a_ml,
            values.endpoint_b_ml,
        )
    }
}

/// One of the four user-facing input controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    SampleVolume,
    Normality,
    EndpointA,
    EndpointB,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::SampleVolume,
        Control::Normality,
        Control::EndpointA,
        Control::EndpointB,
    ];

    /// Allowed range of this control, in its laboratory unit.
    #[must_use]
    pub fn range(self) -> InputRange {
        match self {
            Self::SampleVolume => InputRange::SAMPLE_VOLUME_ML,
            Self::Normality => InputRange::NORMALITY_N,
            Self::EndpointA => InputRange::ENDPOINT_A_ML,
            Self::EndpointB => InputRange::ENDPOINT_B_ML,
        }
    }

    /// Label shown next to the control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SampleVolume => "Volume of Acid Sample (mL)",
            Self::Normality => "NaOH Normality (N)",
            Self::EndpointA => "NaOH Volume for HCl Endpoint (mL)",
            Self::EndpointB => "NaOH Volume for CH₃COOH + HCl Endpoint (mL)",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bounds, starting value, and increment of an input control.
///
/// A `step` of `None` means the control is continuous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: Option<f64>,
}

impl InputRange {
    pub const SAMPLE_VOLUME_ML: Self = Self {
        min: 5.0,
        max: 20.0,
        default: 10.0,
        step: None,
    };

    pub const NORMALITY_N: Self = Self {
        min: 0.05,
        max: 1.0,
        default: 0.1,
        step: Some(0.05),
    };

    pub const ENDPOINT_A_ML: Self = Self {
        min: 1.0,
        max: 4.0,
        default: 2.0,
        step: None,
    };

    pub const ENDPOINT_B_ML: Self = Self {
        min: 5.0,
        max: 10.0,
        default: 6.5,
        step: None,
    };

    /// Absolute slack applied to both bounds.
    ///
    /// Values pass through unit conversion before being checked,
    /// which can move them by a few ulps.
    const TOLERANCE: f64 = 1e-9;

    /// Checks that `value` lies within `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`], [`ConstraintError::AboveMaximum`],
    /// or [`ConstraintError::NotANumber`].
    pub fn check(&self, value: f64) -> ConstraintResult<f64> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value < self.min - Self::TOLERANCE {
            Err(ConstraintError::BelowMinimum)
        } else if value > self.max + Self::TOLERANCE {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(value)
        }
    }
}
