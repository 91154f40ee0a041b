use serde::{Deserialize, Serialize};
use wealth_core::GroupId;
use wealth_stochastic::GrowthParams;

use crate::DefectionParams;

/// Configuration for a single cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Aggregate value before the first step; split evenly on population
    pub initial_value: f64,
    /// Cluster label; its first character prefixes agent ids
    pub group_id: GroupId,
    /// Growth model for the private trajectory (`s0` is the brownian seed value)
    #[serde(default = "default_growth")]
    pub growth: GrowthParams,
    /// Decision parameters handed to every member
    #[serde(default)]
    pub defection: DefectionParams,
    /// Random seed (for reproducibility)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_growth() -> GrowthParams {
    GrowthParams::cluster_default(GrowthParams::default().s0)
}

impl ClusterConfig {
    /// Cluster drift/volatility defaults with the given trajectory start
    pub fn new(initial_value: f64, group_id: impl Into<GroupId>, brownian_s0: f64) -> Self {
        Self {
            initial_value,
            group_id: group_id.into(),
            growth: GrowthParams::cluster_default(brownian_s0),
            defection: DefectionParams::default(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_defection(mut self, defection: DefectionParams) -> Self {
        self.defection = defection;
        self
    }

    pub fn with_growth(mut self, growth: GrowthParams) -> Self {
        self.growth = growth;
        self
    }
}
