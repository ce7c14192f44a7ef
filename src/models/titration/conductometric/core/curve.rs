//! Synthetic conductance curve for an HCl + CH₃COOH mixture titrated with NaOH.
//!
//! The curve has three linear segments:
//!
//! 1. Before the HCl endpoint, conductance falls as mobile H⁺ is replaced by
//!    slower Na⁺.
//! 2. Between the endpoints, it rises gently as sodium acetate accumulates.
//! 3. Past the combined endpoint, it rises sharply with free OH⁻.
//!
//! The second segment starts from a fixed 4 mS rather than from the first
//! segment's value at the HCl endpoint, so the curve is only continuous there
//! when the endpoint sits at exactly 2 mL.

mod sweep;

pub use sweep::{Sweep, SweepError};

use uom::si::{
    electrical_conductance::millisiemens, f64::ElectricalConductance, f64::Volume,
    volume::milliliter,
};

use super::Endpoints;

/// Conductance of the untitrated sample, in mS.
const INITIAL_CONDUCTANCE: f64 = 10.0;

/// Conductance at which the weak acid segment starts, in mS.
const WEAK_ACID_ANCHOR: f64 = 4.0;

/// Region of the curve a titrant volume falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Before the HCl endpoint.
    StrongAcid,
    /// Between the HCl endpoint and the combined endpoint.
    WeakAcid,
    /// At or past the combined endpoint.
    ExcessBase,
}

impl Segment {
    /// Determines which segment `volume` belongs to.
    ///
    /// Each endpoint belongs to the segment that starts there.
    #[must_use]
    pub fn classify(volume: Volume, endpoints: &Endpoints) -> Self {
        if volume < endpoints.a {
            Self::StrongAcid
        } else if volume < endpoints.b {
            Self::WeakAcid
        } else {
            Self::ExcessBase
        }
    }

    /// Conductance slope within this segment, in mS per mL of titrant.
    #[must_use]
    pub fn slope(self) -> f64 {
        match self {
            Self::StrongAcid => -3.0,
            Self::WeakAcid => 1.5,
            Self::ExcessBase => 3.0,
        }
    }
}

/// A single sample of the titration curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Volume of NaOH added.
    pub volume: Volume,
    pub conductance: ElectricalConductance,
}

/// Generates the curve over the default [`Sweep`] of 0 to 8 mL in 0.2 mL steps.
///
/// Points are ordered by ascending volume. Only the endpoints shape the
/// curve; any pair is accepted, including `a >= b`.
///
/// # Example
///
/// ```
/// use twine_titration::models::titration::conductometric::{Endpoints, generate_curve};
///
/// let curve = generate_curve(&Endpoints::from_milliliters(2.0, 6.5));
/// assert_eq!(curve.len(), 41);
/// ```
#[must_use]
pub fn generate_curve(endpoints: &Endpoints) -> Vec<CurvePoint> {
    generate_curve_over(endpoints, &Sweep::default())
}

/// Generates the curve over a custom sweep of titrant volumes.
///
/// A sample entered with the same millilitre value as an endpoint compares
/// equal to it, so it lands on the segment that starts there.
#[must_use]
pub fn generate_curve_over(endpoints: &Endpoints, sweep: &Sweep) -> Vec<CurvePoint> {
    sweep
        .volumes_ml()
        .map(|v| {
            let volume = Volume::new::<milliliter>(v);
            CurvePoint {
                volume,
                conductance: conductance_at(volume, endpoints),
            }
        })
        .collect()
}

/// Evaluates the curve at a single titrant volume.
#[must_use]
pub fn conductance_at(volume: Volume, endpoints: &Endpoints) -> ElectricalConductance {
    ElectricalConductance::new::<millisiemens>(conductance_ms(volume, endpoints))
}

/// Conductance in mS.
///
/// Offsets from the endpoints are taken between quantities before converting
/// to millilitres, so a volume equal to `a` sits exactly on the 4 mS anchor.
fn conductance_ms(volume: Volume, endpoints: &Endpoints) -> f64 {
    let ml = |v: Volume| v.get::<milliliter>();
    let Endpoints { a, b } = *endpoints;

    let segment = Segment::classify(volume, endpoints);
    match segment {
        Segment::StrongAcid => INITIAL_CONDUCTANCE + segment.slope() * ml(volume),
        Segment::WeakAcid => WEAK_ACID_ANCHOR + segment.slope() * ml(volume - a),
        Segment::ExcessBase => {
            WEAK_ACID_ANCHOR
                + Segment::WeakAcid.slope() * ml(b - a)
                + segment.slope() * ml(volume - b)
        }
    }
}
