//! Stochastic path generation
//!
//! Produces finite trajectories that approximate a Wiener process under a
//! fixed step budget:
//!
//! - **random walk**: cumulative sum of `±1 / sqrt(n)` increments
//! - **Gaussian walk**: cumulative sum of `N(0, 1) / sqrt(n)` increments
//! - **economic growth**: `S(t) = s0 * exp((mu - sigma²/2) t + sigma W(t))`
//!
//! All generators take the random source explicitly so that a seeded
//! generator reproduces the same path.

mod brownian;
mod growth;
mod path;

pub use brownian::BrownianMotion;
pub use growth::{GrowthParams, MAX_STEPS};
pub use path::{SMALL_SAMPLE_THRESHOLD, SMALL_SAMPLE_WARNING, SimulatedPath};
