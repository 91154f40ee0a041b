//! Wealth Core Domain
//!
//! Shared kernel for the wealth cluster simulation.
//! This crate contains no I/O and is 100% unit testable.
//!
//! - **error**: the error taxonomy shared by every component
//! - **values**: identifier value objects (`AgentId`, `GroupId`)
//! - **rng**: seedable random source helpers for reproducible runs

pub mod error;
pub mod rng;
pub mod values;

// Re-export commonly used types at crate root
pub use error::{Result, WealthError};
pub use rng::{SimRng, derive_seed, seeded_or_entropy};
pub use values::{AgentId, GroupId};
