//! Conductometric titration of an HCl + CH₃COOH mixture with NaOH.
//!
//! Two independent pure functions make up the computation:
//! [`generate_curve`] depends only on the endpoints, and
//! [`compute_composition`] on the sample volume, normality and endpoints.

mod acid;
mod composition;
mod curve;
mod error;
mod inputs;
mod markers;

pub use acid::Acid;
pub use composition::{Composition, compute_composition, titrated_masses};
pub use curve::{
    CurvePoint, Segment, Sweep, SweepError, conductance_at, generate_curve, generate_curve_over,
};
pub use error::{ValidationError, Warning};
pub use inputs::{Control, ControlValues, Endpoints, InputRange, SampleVolume, TitrationInputs};
pub use markers::{EndpointMarker, PlotLabels};
