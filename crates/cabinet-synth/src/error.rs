use thiserror::Error;

/// Errors returned when a sampler is handed arguments it cannot honor.
///
/// Every check fires before the first random draw, so a failed call never
/// advances the caller's generator state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    /// A positive total cannot be split across zero categories.
    #[error("cannot allocate {total} units across zero categories")]
    ZeroCategories { total: u64 },

    /// Dirichlet concentration must be positive and finite.
    #[error("concentration must be positive and finite, got {0}")]
    InvalidConcentration(f64),

    /// Poisson rate must be non-negative and finite.
    #[error("rate must be non-negative and finite, got {0}")]
    InvalidRate(f64),

    /// A rate bias parameter is out of range.
    #[error("invalid rate bias: {0}")]
    InvalidRateBias(&'static str),
}
