//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! parameter validation and the fatal setup failures of a redistribution. Steady-state density
//! queries and position draws never fail.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(
        "redistribution region removes more than {:.0}% of the original mass \
         ({inside} of {samples} samples admissible, minimum fraction {min_fraction})",
        removed_percent(.min_fraction)
    )]
    MassRemoved {
        inside: usize,
        samples: usize,
        min_fraction: f64,
    },

    #[error("redistribution weight has no finite positive integral over {samples} samples")]
    DegenerateWeight { samples: usize },
}

impl Error {
    /// Returns `true` for failures raised while normalizing a redistribution.
    pub fn is_setup_failure(&self) -> bool {
        matches!(
            self,
            Error::MassRemoved { .. } | Error::DegenerateWeight { .. }
        )
    }
}

fn removed_percent(min_fraction: &f64) -> f64 {
    (1.0 - min_fraction) * 100.0
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} must be > 0, got {value}")))
    }
}

/// Checks that `value` is finite and not negative.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "{name} must be >= 0, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_removed_message_mentions_counts() {
        let err = Error::MassRemoved {
            inside: 12,
            samples: 10_000,
            min_fraction: 0.1,
        };
        let msg = err.to_string();
        assert!(msg.contains("90%"));
        assert!(msg.contains("12 of 10000"));
        assert!(err.is_setup_failure());
    }

    #[test]
    fn mass_removed_message_follows_the_configured_fraction() {
        let err = Error::MassRemoved {
            inside: 9_222,
            samples: 10_000,
            min_fraction: 0.95,
        };
        let msg = err.to_string();
        assert!(msg.contains("more than 5%"), "{msg}");
        assert!(!msg.contains("90%"), "{msg}");
        assert!(msg.contains("minimum fraction 0.95"), "{msg}");
    }

    #[test]
    fn validation_helpers_reject_nan_and_out_of_range() {
        assert!(ensure_positive("scale", 1.0).is_ok());
        assert!(ensure_positive("scale", 0.0).is_err());
        assert!(ensure_positive("scale", f64::NAN).is_err());
        assert!(ensure_non_negative("exponent", 0.0).is_ok());
        assert!(ensure_non_negative("exponent", -1e-9).is_err());
        assert!(ensure_non_negative("exponent", f64::INFINITY).is_err());

        let err = ensure_positive("radial_scale", -2.0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(ref msg) if msg.contains("radial_scale")));
        assert!(!err.is_setup_failure());
    }
}
