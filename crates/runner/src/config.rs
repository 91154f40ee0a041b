//! Simulation configuration
//!
//! Loaded from JSON; every field falls back to the default run
//! (seven clusters of five agents, 100 steps).

use crate::error::{Result, RunnerError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use wealth_cluster::{ClusterConfig, DefectionParams};
use wealth_core::{GroupId, derive_seed};
use wealth_stochastic::GrowthParams;

/// Multi-cluster simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// One cluster per label
    pub group_ids: Vec<GroupId>,
    /// Initial aggregate value of every cluster
    pub initial_value: f64,
    /// Agents per cluster
    pub cluster_size: usize,
    /// Number of steps to run
    pub steps: usize,
    /// Reallocate cluster value every N steps (0 disables)
    pub reallocation_interval: usize,
    /// Growth model of each cluster's trajectory (`s0` is the brownian seed value)
    pub growth: GrowthParams,
    /// Decision parameters handed to every agent
    pub defection: DefectionParams,
    /// Master seed; each cluster gets an independent stream derived from it
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            group_ids: ["YELLOW", "RED", "BLUE", "GREEN", "ORANGE", "PINK", "PURPLE"]
                .into_iter()
                .map(GroupId::from)
                .collect(),
            initial_value: 10.0,
            cluster_size: 5,
            steps: 100,
            reallocation_interval: 10,
            growth: GrowthParams::cluster_default(10.0),
            defection: DefectionParams::default(),
            seed: Some(42),
        }
    }
}

impl SimulationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.group_ids.is_empty() {
            return Err(RunnerError::InvalidConfig("no clusters configured".into()));
        }
        let mut seen = HashSet::new();
        for group in &self.group_ids {
            if group.is_empty() {
                return Err(RunnerError::InvalidConfig("empty group id".into()));
            }
            if !seen.insert(group) {
                return Err(RunnerError::InvalidConfig(format!(
                    "duplicate group id: {group}"
                )));
            }
        }
        if self.cluster_size == 0 {
            return Err(RunnerError::InvalidConfig(
                "cluster_size must be positive".into(),
            ));
        }
        if self.steps == 0 {
            return Err(RunnerError::InvalidConfig("steps must be positive".into()));
        }
        if !self.initial_value.is_finite() {
            return Err(RunnerError::InvalidConfig(format!(
                "initial_value must be finite, got {}",
                self.initial_value
            )));
        }

        self.growth.validate()?;
        self.defection.validate()?;
        Ok(())
    }

    /// Configuration of the `index`-th cluster
    pub fn cluster_config(&self, index: usize) -> Option<ClusterConfig> {
        let group_id = self.group_ids.get(index)?.clone();
        Some(ClusterConfig {
            initial_value: self.initial_value,
            group_id,
            growth: self.growth.clone(),
            defection: self.defection,
            seed: self.seed.map(|master| derive_seed(master, index as u64)),
        })
    }
}

/// Load simulation configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<SimulationConfig> {
    let config: SimulationConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<SimulationConfig> {
    let default_config = include_str!("default_config.json");
    load_config_from_str(default_config)
}
