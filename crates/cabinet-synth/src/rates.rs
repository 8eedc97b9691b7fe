use crate::error::SynthError;
use rand::Rng;

/// Controls how per-tree Poisson rates are derived from node counts.
///
/// The uniform draw is raised to `bias_exponent` before scaling, which
/// concentrates samples near `min_rate`: most trees come out shallow and
/// wide, with the occasional deep outlier, matching how real folder
/// hierarchies skew.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBias {
    /// Lower bound for every non-empty tree's rate.
    pub min_rate: f64,
    /// Scales the upper bound with tree size: `max = min_rate + rate_factor * n`.
    pub rate_factor: f64,
    /// Exponent applied to the uniform draw; larger values skew harder
    /// toward `min_rate`. Must be positive.
    pub bias_exponent: f64,
}

impl Default for RateBias {
    fn default() -> Self {
        Self {
            min_rate: 0.1,
            rate_factor: 2.0,
            bias_exponent: 4.0,
        }
    }
}

impl RateBias {
    fn validate(&self) -> Result<(), SynthError> {
        if !(self.min_rate.is_finite() && self.min_rate >= 0.0) {
            return Err(SynthError::InvalidRateBias(
                "min_rate must be non-negative and finite",
            ));
        }
        if !(self.rate_factor.is_finite() && self.rate_factor >= 0.0) {
            return Err(SynthError::InvalidRateBias(
                "rate_factor must be non-negative and finite",
            ));
        }
        if !(self.bias_exponent.is_finite() && self.bias_exponent > 0.0) {
            return Err(SynthError::InvalidRateBias(
                "bias_exponent must be positive and finite",
            ));
        }
        Ok(())
    }
}

/// Sample one Poisson rate per tree from its target node count.
///
/// Empty trees get a rate of exactly 0.0 and consume no draw. Every other
/// entry draws a single uniform value and maps it into
/// `[min_rate, min_rate + rate_factor * n]` through the bias exponent.
/// Output length and order match the input.
pub fn sample_rates_by_node_count<R: Rng + ?Sized>(
    rng: &mut R,
    node_counts: &[u64],
    bias: &RateBias,
) -> Result<Vec<f64>, SynthError> {
    bias.validate()?;

    let mut rates = Vec::with_capacity(node_counts.len());
    for &nodes in node_counts {
        if nodes == 0 {
            rates.push(0.0);
            continue;
        }
        let max_rate = bias.min_rate + bias.rate_factor * nodes as f64;
        let u: f64 = rng.gen();
        rates.push(bias.min_rate + (max_rate - bias.min_rate) * u.powf(bias.bias_exponent));
    }
    Ok(rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_counts_get_zero_rate() {
        let mut rng = StdRng::seed_from_u64(5);
        let rates =
            sample_rates_by_node_count(&mut rng, &[0, 3, 0, 12, 0], &RateBias::default()).unwrap();
        assert_eq!(rates.len(), 5);
        assert_eq!(rates[0], 0.0);
        assert_eq!(rates[2], 0.0);
        assert_eq!(rates[4], 0.0);
    }

    #[test]
    fn rates_stay_within_bounds() {
        let bias = RateBias::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let counts: Vec<u64> = (1..50).collect();
            let rates = sample_rates_by_node_count(&mut rng, &counts, &bias).unwrap();
            for (&n, &rate) in counts.iter().zip(&rates) {
                let max = bias.min_rate + bias.rate_factor * n as f64;
                assert!(
                    rate >= bias.min_rate && rate <= max,
                    "rate {rate} for {n} nodes outside [{}, {max}]",
                    bias.min_rate
                );
            }
        }
    }

    #[test]
    fn exponent_biases_toward_min_rate() {
        // With the default exponent of 4 the median draw lands at
        // min + (max - min) * 0.5^4, i.e. in the bottom tenth of the range.
        // Across many draws, well over half must sit in the lower half.
        let mut rng = StdRng::seed_from_u64(17);
        let counts = vec![10u64; 2000];
        let bias = RateBias::default();
        let rates = sample_rates_by_node_count(&mut rng, &counts, &bias).unwrap();

        let midpoint = bias.min_rate + (bias.rate_factor * 10.0) / 2.0;
        let below = rates.iter().filter(|&&r| r < midpoint).count();
        assert!(
            below > rates.len() * 3 / 4,
            "only {below}/{} rates below midpoint",
            rates.len()
        );
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let mut rng = StdRng::seed_from_u64(5);
        let rates = sample_rates_by_node_count(&mut rng, &[], &RateBias::default()).unwrap();
        assert!(rates.is_empty());
    }

    #[test]
    fn invalid_bias_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        for bad in [
            RateBias {
                min_rate: -0.1,
                ..RateBias::default()
            },
            RateBias {
                rate_factor: f64::NAN,
                ..RateBias::default()
            },
            RateBias {
                bias_exponent: 0.0,
                ..RateBias::default()
            },
        ] {
            assert!(matches!(
                sample_rates_by_node_count(&mut rng, &[1], &bad),
                Err(SynthError::InvalidRateBias(_))
            ));
        }
    }

    #[test]
    fn deterministic_for_same_seed() {
        let counts = [4u64, 0, 9, 1];
        let mut a = StdRng::seed_from_u64(23);
        let mut b = StdRng::seed_from_u64(23);
        assert_eq!(
            sample_rates_by_node_count(&mut a, &counts, &RateBias::default()).unwrap(),
            sample_rates_by_node_count(&mut b, &counts, &RateBias::default()).unwrap()
        );
    }
}
