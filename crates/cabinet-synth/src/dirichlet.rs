use crate::error::SynthError;
use rand::Rng;
use rand_distr::{Distribution, Gamma};

/// Split an integer `total` across `categories` buckets with
/// Dirichlet-distributed proportions.
///
/// Draws one Gamma(`concentration`, 1) variate per bucket; normalizing the
/// variates by their sum is the standard Dirichlet construction, so low
/// concentrations pile most of the total onto a few buckets while high
/// concentrations approach an even split. The real-valued targets are
/// floored and the integer shortfall is handed out one unit at a time to
/// uniformly random buckets (a bucket may win more than once), so the
/// result always sums to `total` exactly.
///
/// `total == 0` yields all zeros. Zero categories with a positive total is
/// rejected, as is a non-positive or non-finite concentration.
pub fn allocate_by_dirichlet<R: Rng + ?Sized>(
    rng: &mut R,
    categories: usize,
    total: u64,
    concentration: f64,
) -> Result<Vec<u64>, SynthError> {
    if !(concentration.is_finite() && concentration > 0.0) {
        return Err(SynthError::InvalidConcentration(concentration));
    }
    if categories == 0 {
        if total > 0 {
            return Err(SynthError::ZeroCategories { total });
        }
        return Ok(Vec::new());
    }

    let gamma = Gamma::new(concentration, 1.0)
        .map_err(|_| SynthError::InvalidConcentration(concentration))?;
    let mut samples = Vec::with_capacity(categories);
    for _ in 0..categories {
        samples.push(gamma.sample(rng));
    }
    let sample_sum: f64 = samples.iter().sum();

    // Floor the real-valued targets. A degenerate sample sum (underflow at
    // tiny concentrations) turns the targets into NaN, which floors to 0;
    // the remainder pass below still restores the exact sum.
    let mut allocations: Vec<u64> = samples
        .iter()
        .map(|g| (total as f64 * g / sample_sum).floor() as u64)
        .collect();

    let allocated: u64 = allocations.iter().sum();
    for _ in allocated..total {
        let idx = rng.gen_range(0..categories);
        allocations[idx] += 1;
    }

    Ok(allocations)
}
