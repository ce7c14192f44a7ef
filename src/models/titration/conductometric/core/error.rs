use std::fmt;

use thiserror::Error;
use uom::si::f64::Volume;

use crate::support::constraint::ConstraintError;

use super::{Control, markers::display_ml};

/// Inputs the model cannot compute with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The sample volume is zero, negative, or not a number.
    #[error("invalid sample volume")]
    SampleVolume(#[source] ConstraintError),
}

/// A suspicious input that does not stop the computation.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Warning {
    /// The HCl endpoint does not precede the combined endpoint.
    ///
    /// The curve comes out inverted or overlapping,
    /// and the acetic acid mass is zero or negative.
    EndpointsOutOfOrder { a: Volume, b: Volume },

    /// A value lies outside the range its control allows.
    OutsideInputRange {
        control: Control,
        value: f64,
        reason: ConstraintError,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndpointsOutOfOrder { a, b } => write!(
                f,
                "HCl endpoint ({:?} mL) is not before the CH₃COOH endpoint ({:?} mL)",
                display_ml(*a),
                display_ml(*b)
            ),
            Self::OutsideInputRange {
                control,
                value,
                reason,
            } => write!(f, "{control} = {value}: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::super::Endpoints;

    #[test]
    fn out_of_order_endpoints_print_as_entered() {
        let Endpoints { a, b } = Endpoints::from_milliliters(7.7, 7.7);
        let warning = Warning::EndpointsOutOfOrder { a, b };

        assert_eq!(
            warning.to_string(),
            "HCl endpoint (7.7 mL) is not before the CH₃COOH endpoint (7.7 mL)"
        );
    }

    #[test]
    fn whole_millilitres_keep_their_decimal() {
        let Endpoints { a, b } = Endpoints::from_milliliters(4.0, 3.0);
        let warning = Warning::EndpointsOutOfOrder { a, b };

        assert_eq!(
            warning.to_string(),
            "HCl endpoint (4.0 mL) is not before the CH₃COOH endpoint (3.0 mL)"
        );
    }
}
