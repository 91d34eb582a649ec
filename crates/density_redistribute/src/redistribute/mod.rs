//! Redistribution engines: reweight a geometry, renormalize it, and sample it by rejection.
//!
//! Both engines follow the same two-phase lifecycle. A configured [`Redistribution`] (or
//! [`RadialRedistribution`]) owns a base geometry and a weight; [`Redistribution::setup`] draws
//! a fixed number of base samples once to estimate the normalization constant and consumes the
//! configuration, returning an immutable ready geometry. The ready value only reads its state,
//! so it can be shared across threads without locking.
//!
//! Setup fails when fewer than [`MIN_INSIDE_FRACTION`] of the samples fall in the admissible
//! region of the weight: the estimate would rest on too few samples to be trusted.
use rand::Rng as RngCore;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::position::rand01;

pub mod engine;
pub mod radial;

pub use engine::{RedistributedGeometry, Redistribution};
pub use radial::{RadialRedistributed, RadialRedistribution};

/// Number of base samples drawn to estimate the normalization constant.
pub const NORMALIZATION_SAMPLES: usize = 10_000;

/// Minimum fraction of normalization samples that must be admissible.
pub const MIN_INSIDE_FRACTION: f64 = 0.1;

const LOW_INSIDE_FRACTION: f64 = 0.5;

/// Options for normalizing and sampling a redistribution.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RedistributionOptions {
    /// Base samples drawn during setup.
    pub samples: usize,
    /// Setup fails below this admissible fraction.
    pub min_inside_fraction: f64,
    /// Optional bound on base draws per generated position. Exhausting it is a diagnostic for
    /// pathological configurations, not a recoverable error.
    pub max_attempts: Option<usize>,
}

impl Default for RedistributionOptions {
    fn default() -> Self {
        Self {
            samples: NORMALIZATION_SAMPLES,
            min_inside_fraction: MIN_INSIDE_FRACTION,
            max_attempts: None,
        }
    }
}

impl RedistributionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of normalization samples.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Sets the minimum admissible fraction.
    pub fn with_min_inside_fraction(mut self, fraction: f64) -> Self {
        self.min_inside_fraction = fraction;
        self
    }

    /// Caps the base draws per generated position.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Validates the options, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(Error::InvalidConfig("samples must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.min_inside_fraction) {
            return Err(Error::InvalidConfig(
                "min_inside_fraction must lie in [0, 1]".into(),
            ));
        }
        if self.max_attempts == Some(0) {
            return Err(Error::InvalidConfig("max_attempts must be > 0".into()));
        }
        Ok(())
    }
}

/// Scalars derived once during setup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Normalization {
    pub norm: f64,
    pub envelope: f64,
}

pub(crate) fn check_envelope(envelope: f64) -> Result<()> {
    if envelope.is_finite() && envelope > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "max weight must be finite and > 0, got {envelope}"
        )))
    }
}

/// Estimates `N / Σ w(xᵢ)` over the admissible samples among `N` base draws.
pub(crate) fn normalize<T: Copy>(
    options: &RedistributionOptions,
    envelope: f64,
    mut draw: impl FnMut() -> T,
    inside: impl Fn(T) -> bool,
    weight: impl Fn(T) -> f64,
) -> Result<Normalization> {
    options.validate()?;
    check_envelope(envelope)?;

    let samples = options.samples;
    let mut admitted = 0usize;
    let mut sum = 0.0;
    for _ in 0..samples {
        let x = draw();
        if inside(x) {
            admitted += 1;
            sum += weight(x);
        }
    }

    let fraction = admitted as f64 / samples as f64;
    if fraction < options.min_inside_fraction {
        return Err(Error::MassRemoved {
            inside: admitted,
            samples,
            min_fraction: options.min_inside_fraction,
        });
    }
    if !(sum.is_finite() && sum > 0.0) {
        return Err(Error::DegenerateWeight { samples });
    }
    if fraction < LOW_INSIDE_FRACTION {
        warn!(
            "Only {} of {} normalization samples are admissible; estimate is noisy.",
            admitted, samples
        );
    }

    let norm = samples as f64 / sum;
    info!(
        "Redistribution normalized: norm={:.6e}, envelope={:.6e}, admissible {}/{}.",
        norm, envelope, admitted, samples
    );
    Ok(Normalization { norm, envelope })
}

/// Rejection test for a proposal with weight `weight` under envelope `envelope`.
///
/// Equivalent to `u·envelope/weight ≤ 1`; a zero weight is always rejected.
#[inline]
pub(crate) fn accept(u: f64, envelope: f64, weight: f64) -> bool {
    weight > 0.0 && u * envelope <= weight
}

/// Draws proposals until one is admissible and passes the rejection test.
///
/// Inadmissible proposals are discarded without a uniform draw. Returns `None` only when
/// `max_attempts` proposals were drawn without acceptance.
pub(crate) fn rejection_sample<T: Copy>(
    rng: &mut dyn RngCore,
    envelope: f64,
    max_attempts: Option<usize>,
    mut propose: impl FnMut(&mut dyn RngCore) -> T,
    inside: impl Fn(T) -> bool,
    weight: impl Fn(T) -> f64,
) -> Option<T> {
    let mut attempts = 0usize;
    loop {
        if max_attempts.is_some_and(|cap| attempts >= cap) {
            return None;
        }
        attempts += 1;

        let candidate = propose(rng);
        if !inside(candidate) {
            continue;
        }
        if accept(rand01(rng), envelope, weight(candidate)) {
            return Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::position::tests::FixedRng;

    #[test]
    fn options_validation() {
        assert!(RedistributionOptions::default().validate().is_ok());
        assert!(RedistributionOptions::new().with_samples(0).validate().is_err());
        assert!(RedistributionOptions::new()
            .with_min_inside_fraction(1.5)
            .validate()
            .is_err());
        assert!(RedistributionOptions::new()
            .with_max_attempts(0)
            .validate()
            .is_err());
        let opts = RedistributionOptions::default();
        assert_eq!(opts.samples, 10_000);
        assert_eq!(opts.min_inside_fraction, 0.1);
    }

    #[test]
    fn accept_rejects_zero_weight_even_for_zero_deviate() {
        assert!(!accept(0.0, 1.0, 0.0));
        assert!(accept(0.0, 1.0, 1e-300));
        assert!(accept(0.5, 2.0, 1.0));
        assert!(!accept(0.51, 2.0, 1.0));
    }

    #[test]
    fn normalize_counts_only_admissible_samples() {
        let opts = RedistributionOptions::new().with_samples(4);
        let mut values = [1.0, 2.0, 3.0, 4.0].into_iter();
        let result = normalize(
            &opts,
            1.0,
            || values.next().unwrap_or(0.0),
            |x| x > 1.5,
            |x| x,
        )
        .expect("normalization succeeds");
        assert!((result.norm - 4.0 / 9.0).abs() < 1e-15);
        assert_eq!(result.envelope, 1.0);
    }

    #[test]
    fn normalize_fails_when_region_removes_most_mass() {
        let opts = RedistributionOptions::new().with_samples(100);
        let mut i = 0;
        let err = normalize(
            &opts,
            1.0,
            || {
                i += 1;
                i
            },
            |x| x <= 9,
            |_| 1.0,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::MassRemoved {
                inside: 9,
                samples: 100,
                ..
            }
        ));
    }

    #[test]
    fn normalize_reports_the_configured_threshold() {
        let opts = RedistributionOptions::new()
            .with_samples(100)
            .with_min_inside_fraction(0.95);
        let mut i = 0;
        let err = normalize(
            &opts,
            1.0,
            || {
                i += 1;
                i
            },
            |x| x <= 92,
            |_| 1.0,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::MassRemoved {
                inside: 92,
                samples: 100,
                min_fraction,
            } if min_fraction == 0.95
        ));
        assert!(err.to_string().contains("more than 5%"));
    }

    #[test]
    fn normalize_rejects_degenerate_weights_and_envelopes() {
        let opts = RedistributionOptions::new().with_samples(10);
        let err = normalize(&opts, 1.0, || 0.0, |_| true, |_| 0.0).unwrap_err();
        assert!(matches!(err, Error::DegenerateWeight { samples: 10 }));

        let err = normalize(&opts, f64::INFINITY, || 0.0, |_| true, |_| 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn capped_rejection_gives_up() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = rejection_sample(&mut rng, 1.0, Some(50), |_| 0.0, |_| false, |_| 1.0);
        assert!(result.is_none());

        let result = rejection_sample(&mut rng, 1.0, Some(50), |_| 2.0, |_| true, |x| x);
        assert_eq!(result, Some(2.0));
    }

    #[test]
    fn zero_deviate_skips_zero_weight_proposals() {
        let mut rng = FixedRng { value: 0 };
        let mut next = 0.0;
        let result = rejection_sample(
            &mut rng,
            1.0,
            Some(10),
            |_| {
                next += 0.5;
                next - 0.5
            },
            |_| true,
            |x| x,
        );
        assert_eq!(result, Some(0.5));
    }
}
