use crate::error::SynthError;
use rand::Rng;

/// Draw one value from a Poisson distribution with the given `rate`.
///
/// Knuth's multiplicative method: multiply uniform [0,1) draws into a
/// running product until it falls to `exp(-rate)`, counting iterations.
/// The loop body always runs at least once, so `rate == 0` consumes exactly
/// one draw and returns 0 (every uniform draw is below 1). Iteration count
/// grows linearly with the rate; once `exp(-rate)` underflows to zero
/// (rate beyond ~745) the loop exits when the product itself underflows,
/// which bounds the cost and matches IEEE-double reference behavior.
///
/// Negative, NaN, or infinite rates are rejected.
pub fn sample_poisson<R: Rng + ?Sized>(rng: &mut R, rate: f64) -> Result<u64, SynthError> {
    if !(rate.is_finite() && rate >= 0.0) {
        return Err(SynthError::InvalidRate(rate));
    }

    let threshold = (-rate).exp();
    let mut count: u64 = 0;
    let mut product = 1.0_f64;
    loop {
        count += 1;
        product *= rng.gen::<f64>();
        if product <= threshold {
            return Ok(count - 1);
        }
    }
}
