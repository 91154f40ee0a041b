//! Wealth Runner - Multi-Cluster Simulation
//!
//! Orchestrates a population of clusters:
//!
//! - **Config**: JSON configuration with an embedded default
//! - **Bootstrap**: cluster creation, seeding and population
//! - **Simulation**: stepping, periodic reallocation and defection polling
//!
//! ## Architecture
//!
//! ```text
//!   SimulationConfig ──▶ bootstrap ──▶ Cluster × N (own seed each)
//!                                         │
//!                        step_all() ◀─────┘
//!                           │  step() → recalculate_value()? → defections()
//!                           ▼
//!                    StepReport × N ──▶ SimulationResults
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod simulation;

// Re-export main types
pub use bootstrap::bootstrap_clusters;
pub use config::{SimulationConfig, load_config, load_config_from_str, load_default_config};
pub use error::{Result, RunnerError};
pub use simulation::{ClusterSimulation, ClusterSummary, SimulationResults, StepReport};
