use uom::si::{f64::MolarMass, molar_mass::gram_per_mole};

/// The two acids present in the titrated mixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Acid {
    /// HCl, titrated first.
    Hydrochloric,
    /// CH₃COOH, titrated once the HCl is consumed.
    Acetic,
}

impl Acid {
    /// Molar mass, rounded as used in the composition calculation.
    #[must_use]
    pub fn molar_mass(self) -> MolarMass {
        let grams_per_mole = match self {
            Self::Hydrochloric => 36.5,
            Self::Acetic => 60.0,
        };
        MolarMass::new::<gram_per_mole>(grams_per_mole)
    }

    #[must_use]
    pub fn formula(self) -> &'static str {
        match self {
            Self::Hydrochloric => "HCl",
            Self::Acetic => "CH₃COOH",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hydrochloric => "HCl",
            Self::Acetic => "Acetic Acid",
        }
    }
}
