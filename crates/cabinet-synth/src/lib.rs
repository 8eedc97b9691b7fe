//! Statistical samplers for seeding hierarchical storage datasets.
//!
//! Four composable samplers, all pure functions over a caller-supplied
//! [`rand::Rng`]:
//!
//! - [`allocate_by_dirichlet`] — split an integer total across categories
//!   with controllable skew while preserving the exact sum
//! - [`sample_poisson`] — discrete Poisson draws via Knuth's method
//! - [`sample_rates_by_node_count`] — one Poisson rate per tree, biased
//!   toward shallow trees
//! - [`build_poisson_tree`] — level-by-level random tree growth
//!
//! There is no ambient randomness anywhere: seed a generator
//! (`StdRng::seed_from_u64`) and replay the same call sequence to reproduce
//! a dataset bit for bit.

pub mod dirichlet;
pub mod error;
pub mod poisson;
pub mod rates;
pub mod tree;

pub use dirichlet::allocate_by_dirichlet;
pub use error::SynthError;
pub use poisson::sample_poisson;
pub use rates::{sample_rates_by_node_count, RateBias};
pub use tree::{build_poisson_tree, Tree, ROOT};
