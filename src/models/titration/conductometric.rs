//! Conductometric titration model.
//!
//! [`ConductometricTitration`] is the [`twine_core::Model`] adapter a UI calls
//! once per change of its controls. The computation itself lives in the
//! internal `core` module, whose pure functions are re-exported here for
//! callers that only need one half of the result.

mod core;

pub use self::core::{
    Acid, Composition, Control, ControlValues, CurvePoint, EndpointMarker, Endpoints, InputRange,
    PlotLabels, SampleVolume, Segment, Sweep, SweepError, TitrationInputs, ValidationError,
    Warning, compute_composition, conductance_at, generate_curve, generate_curve_over,
    titrated_masses,
};

use tracing::{debug, warn};
use twine_core::Model;
use uom::si::{molar_concentration::mole_per_liter, volume::milliliter};

/// Everything needed to render one state of the virtual lab.
#[derive(Debug, Clone, PartialEq)]
pub struct TitrationOutput {
    /// Curve samples, ascending in titrant volume.
    pub curve: Vec<CurvePoint>,

    /// Reference lines at the HCl and combined endpoints, in that order.
    pub markers: [EndpointMarker; 2],

    pub composition: Composition,

    pub labels: PlotLabels,

    /// Conditions worth surfacing that did not stop the computation.
    pub warnings: Vec<Warning>,
}

/// Simulated titration of an HCl + CH₃COOH sample with NaOH.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_titration::models::titration::conductometric::{
///     ConductometricTitration, ControlValues,
/// };
///
/// let output = ConductometricTitration::default()
///     .call(&ControlValues::default())
///     .unwrap();
///
/// assert_eq!(output.curve.len(), 41);
/// assert!(output.warnings.is_empty());
/// assert_eq!(
///     output.composition.to_string(),
///     "HCl in sample: 0.73 g\nAcetic Acid in sample: 2.70 g"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConductometricTitration {
    sweep: Sweep,
}

impl ConductometricTitration {
    /// Creates a model that samples the curve over `sweep` instead of the default range.
    #[must_use]
    pub fn with_sweep(sweep: Sweep) -> Self {
        Self { sweep }
    }

    /// Computes curve, markers, and composition for validated inputs.
    ///
    /// Warnings are returned in the output and also logged.
    #[must_use]
    pub fn evaluate(&self, inputs: &TitrationInputs) -> TitrationOutput {
        debug!(
            sample_volume_ml = inputs.sample_volume.get::<milliliter>(),
            normality_n = inputs.normality.get::<mole_per_liter>(),
            endpoint_a_ml = inputs.endpoints.a.get::<milliliter>(),
            endpoint_b_ml = inputs.endpoints.b.get::<milliliter>(),
            "evaluating conductometric titration"
        );

        let warnings = inputs.warnings();
        for warning in &warnings {
            warn!(%warning, "suspicious titration input");
        }

        TitrationOutput {
            curve: generate_curve_over(&inputs.endpoints, &self.sweep),
            markers: EndpointMarker::pair(&inputs.endpoints),
            labels: PlotLabels::CONDUCTOMETRIC,
            composition: compute_composition(
                inputs.sample_volume,
                inputs.normality,
                &inputs.endpoints,
            ),
            warnings,
        }
    }
}

impl Model for ConductometricTitration {
    type Input = ControlValues;
    type Output = TitrationOutput;
    type Error = ValidationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let inputs = TitrationInputs::try_from(*input)?;
        Ok(self.evaluate(&inputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electrical_conductance::millisiemens, mass::gram};

    use crate::support::constraint::ConstraintError;

    #[test]
    fn default_controls() {
        let output = ConductometricTitration::default()
            .call(&ControlValues::default())
            .unwrap();

        assert_eq!(output.curve.len(), 41);
        assert_relative_eq!(
            output.curve[0].conductance.get::<millisiemens>(),
            10.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(output.composition.hcl.get::<gram>(), 0.73, epsilon = 1e-12);
        assert_relative_eq!(
            output.composition.acetic_acid.get::<gram>(),
            2.70,
            epsilon = 1e-12
        );
        assert_eq!(output.markers[0].label(), "HCl Endpoint (2.0 mL)");
        assert_eq!(output.markers[1].label(), "CH₃COOH Endpoint (6.5 mL)");
        assert_eq!(output.labels.y_axis, "Conductance (mS)");
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn zero_sample_volume_is_rejected() {
        let input = ControlValues {
            sample_volume_ml: 0.0,
            ..ControlValues::default()
        };

        assert_eq!(
            ConductometricTitration::default().call(&input),
            Err(ValidationError::SampleVolume(ConstraintError::Zero))
        );
    }

    #[test]
    fn out_of_order_endpoints_are_computed_with_a_warning() {
        let input = ControlValues {
            endpoint_a_ml: 4.0,
            endpoint_b_ml: 4.0,
            ..ControlValues::default()
        };

        let output = ConductometricTitration::default().call(&input).unwrap();

        assert_eq!(output.curve.len(), 41);
        assert_eq!(output.composition.acetic_acid.get::<gram>(), 0.0);
        assert!(matches!(
            output.warnings[0],
            Warning::EndpointsOutOfOrder { .. }
        ));
    }

    #[test]
    fn custom_sweep_is_used() {
        let sweep = Sweep::from_milliliters(0.0, 10.0, 0.5).unwrap();
        let output = ConductometricTitration::with_sweep(sweep)
            .call(&ControlValues::default())
            .unwrap();

        assert_eq!(output.curve.len(), 21);
    }

    #[test]
    fn calls_are_repeatable() {
        let model = ConductometricTitration::default();
        let input = ControlValues {
            sample_volume_ml: 17.3,
            normality_n: 0.65,
            endpoint_a_ml: 3.4,
            endpoint_b_ml: 8.8,
        };

        assert_eq!(model.call(&input), model.call(&input));
    }
}
