//! Wealth clusters
//!
//! A [`Cluster`] owns a group of [`Agent`]s and a privately generated growth
//! trajectory. Each `step()` moves the cluster's aggregate value one point
//! along the trajectory; `recalculate_value()` splits the current value across
//! the members with a uniform Dirichlet draw.
//!
//! ## Lifecycle
//!
//! ```text
//! Empty ──create_cluster──▶ Populated ──step()*──▶ Exhausted
//!                              │  ▲
//!                              └──┘ recalculate_value()
//! ```
//!
//! Population and stepping are independent: a cluster may step with no
//! agents at all.

mod agent;
mod cluster;
mod config;

pub use agent::{Agent, DefectionParams};
pub use cluster::Cluster;
pub use config::ClusterConfig;
