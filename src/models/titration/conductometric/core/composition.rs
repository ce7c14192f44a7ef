//! Back-calculation of sample composition from the endpoint volumes.
//!
//! Titrant consumed up to the HCl endpoint neutralizes the HCl, and titrant
//! consumed between the two endpoints neutralizes the acetic acid.
//! Multiplying equivalents by normality and molar mass gives the amount of
//! each acid.
//!
//! # Reported masses
//!
//! [`compute_composition`] divides the equivalents by the sample volume and
//! then applies the molar mass, so what it reports as grams is numerically a
//! mass concentration in g/L. The figures shown to users have always been
//! computed this way and are kept as is. [`Composition::concentrations`]
//! gives the same numbers with their true dimension, and [`titrated_masses`]
//! gives the absolute amount of each acid.

use std::fmt;

use uom::si::{
    f64::{Mass, MassConcentration, MolarConcentration, Volume},
    mass::gram,
    mass_concentration::kilogram_per_cubic_meter,
};

use super::{Acid, Endpoints, SampleVolume};

/// Amount of each acid in the sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    pub hcl: Mass,
    pub acetic_acid: Mass,
}

impl Composition {
    /// Returns the value for a single acid.
    #[must_use]
    pub fn of(&self, acid: Acid) -> Mass {
        match acid {
            Acid::Hydrochloric => self.hcl,
            Acid::Acetic => self.acetic_acid,
        }
    }

    /// Reinterprets reported grams as g/L, returned as `[hcl, acetic_acid]`.
    ///
    /// Only meaningful for values from [`compute_composition`].
    #[must_use]
    pub fn concentrations(&self) -> [MassConcentration; 2] {
        // 1 kg/m³ is 1 g/L.
        [self.hcl, self.acetic_acid]
            .map(|m| MassConcentration::new::<kilogram_per_cubic_meter>(m.get::<gram>()))
    }

    fn from_concentrations(hcl: MassConcentration, acetic_acid: MassConcentration) -> Self {
        let as_grams =
            |c: MassConcentration| Mass::new::<gram>(c.get::<kilogram_per_cubic_meter>());
        Self {
            hcl: as_grams(hcl),
            acetic_acid: as_grams(acetic_acid),
        }
    }
}

/// Two lines, one per acid, each to two decimals in grams.
impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} in sample: {:.2} g",
            Acid::Hydrochloric.name(),
            self.hcl.get::<gram>()
        )?;
        write!(
            f,
            "{} in sample: {:.2} g",
            Acid::Acetic.name(),
            self.acetic_acid.get::<gram>()
        )
    }
}

/// Computes the reported HCl and acetic acid masses.
///
/// No checks are made on the endpoints. If `b < a` the acetic acid value is
/// negative, and if `b == a` it is exactly zero.
///
/// # Example
///
/// ```
/// use twine_titration::models::titration::conductometric::{
///     Endpoints, SampleVolume, compute_composition,
/// };
/// use uom::si::{
///     f64::MolarConcentration, mass::gram, molar_concentration::mole_per_liter,
///     volume::milliliter,
/// };
///
/// let composition = compute_composition(
///     SampleVolume::new::<milliliter>(10.0).unwrap(),
///     MolarConcentration::new::<mole_per_liter>(0.1),
///     &Endpoints::from_milliliters(2.0, 6.5),
/// );
///
/// assert!((composition.hcl.get::<gram>() - 0.73).abs() < 1e-12);
/// assert!((composition.acetic_acid.get::<gram>() - 2.70).abs() < 1e-12);
/// ```
#[must_use]
pub fn compute_composition(
    sample_volume: SampleVolume,
    normality: MolarConcentration,
    endpoints: &Endpoints,
) -> Composition {
    let per_sample =
        |titrant: Volume| -> MolarConcentration { (titrant * normality / *sample_volume).into() };

    Composition::from_concentrations(
        (per_sample(endpoints.a) * Acid::Hydrochloric.molar_mass()).into(),
        (per_sample(endpoints.weak_acid_volume()) * Acid::Acetic.molar_mass()).into(),
    )
}

/// Computes the absolute mass of each acid neutralized by the titrant.
///
/// Unlike [`compute_composition`], the result does not depend on the sample
/// volume.
#[must_use]
pub fn titrated_masses(normality: MolarConcentration, endpoints: &Endpoints) -> Composition {
    Composition {
        hcl: endpoints.a * normality * Acid::Hydrochloric.molar_mass(),
        acetic_acid: endpoints.weak_acid_volume() * normality * Acid::Acetic.molar_mass(),
    }
}
