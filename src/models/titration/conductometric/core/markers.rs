//! Annotations a plotting collaborator draws alongside the curve.

use uom::si::{f64::Volume, volume::milliliter};

use super::{Acid, Endpoints};

/// Axis and chart titles for the titration plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotLabels {
    pub title: &'static str,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
}

impl PlotLabels {
    pub const CONDUCTOMETRIC: Self = Self {
        title: "Conductometric Titration Curve",
        x_axis: "Volume of NaOH Added (mL)",
        y_axis: "Conductance (mS)",
    };
}

/// A vertical reference line at one of the endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointMarker {
    /// Acid whose neutralization completes at this volume.
    pub acid: Acid,
    pub volume: Volume,
}

impl EndpointMarker {
    /// Markers for both endpoints, HCl first.
    #[must_use]
    pub fn pair(endpoints: &Endpoints) -> [Self; 2] {
        [
            Self {
                acid: Acid::Hydrochloric,
                volume: endpoints.a,
            },
            Self {
                acid: Acid::Acetic,
                volume: endpoints.b,
            },
        ]
    }

    /// Legend entry, e.g. `HCl Endpoint (2.0 mL)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} Endpoint ({:?} mL)",
            self.acid.formula(),
            display_ml(self.volume)
        )
    }
}

/// Millilitres with unit conversion noise dropped, so 7.7 mL doesn't print
/// as 7.700000000000001.
pub(crate) fn display_ml(volume: Volume) -> f64 {
    (volume.get::<milliliter>() * 1e9).round() / 1e9
}
