//! Cluster
//!
//! Owns a group of agents and walks a privately generated growth trajectory.
//! The trajectory is generated once at construction and never mutated; a
//! cursor marks how much of it has been consumed.

use crate::{Agent, ClusterConfig, DefectionParams};
use rand_distr::{Dirichlet, Distribution};
use std::fmt;
use wealth_core::{AgentId, GroupId, Result, SimRng, WealthError, seeded_or_entropy};
use wealth_stochastic::BrownianMotion;

/// A cluster of agents sharing one aggregate value
pub struct Cluster {
    group_id: GroupId,
    initial_value: f64,
    cluster_value: f64,
    agents: Vec<Agent>,
    /// Full generated trajectory, never rewound
    path: Vec<f64>,
    /// Number of steps taken; `path[..cursor]` is the historical record
    cursor: usize,
    /// Next ordinal for agent ids, so ids stay unique after removals
    next_ordinal: usize,
    defection: DefectionParams,
    rng: SimRng,
}

impl Cluster {
    /// Create a cluster with the default drift (0.2) and volatility (0.6)
    pub fn new(
        initial_value: f64,
        group_id: impl Into<GroupId>,
        brownian_s0: f64,
        seed: u64,
    ) -> Result<Self> {
        Self::with_config(ClusterConfig::new(initial_value, group_id, brownian_s0).with_seed(seed))
    }

    /// Create a cluster from a full configuration
    pub fn with_config(config: ClusterConfig) -> Result<Self> {
        if !config.initial_value.is_finite() {
            return Err(WealthError::invalid(format!(
                "initial value must be finite, got {}",
                config.initial_value
            )));
        }
        if config.group_id.is_empty() {
            return Err(WealthError::invalid("group id must not be empty"));
        }
        config.defection.validate()?;

        let mut rng = seeded_or_entropy(config.seed);
        let path = BrownianMotion::default()
            .economic_growth(&mut rng, &config.growth)?
            .into_values();

        log::debug!(
            "Cluster {} generated a {}-step trajectory (s0={}, mu={}, sigma={})",
            config.group_id,
            path.len(),
            config.growth.s0,
            config.growth.mu,
            config.growth.sigma
        );

        Ok(Self {
            group_id: config.group_id,
            initial_value: config.initial_value,
            cluster_value: config.initial_value,
            agents: Vec::new(),
            path,
            cursor: 0,
            next_ordinal: 0,
            defection: config.defection,
            rng,
        })
    }

    /// Populate the cluster with `size` agents, each holding an even split
    /// of the initial value.
    ///
    /// No-op when the cluster already has agents.
    pub fn create_cluster(&mut self, size: usize) -> Result<()> {
        if !self.agents.is_empty() {
            log::debug!(
                "Cluster {} already populated with {} agents, skipping",
                self.group_id,
                self.agents.len()
            );
            return Ok(());
        }
        if size == 0 {
            return Err(WealthError::invalid("cluster size must be positive"));
        }

        let share = self.initial_value / size as f64;
        self.agents = (0..size)
            .map(|ordinal| {
                Agent::new(
                    self.group_id.clone(),
                    AgentId::member_of(&self.group_id, ordinal),
                    Some(share),
                    self.defection,
                )
            })
            .collect();
        self.next_ordinal = size;

        log::debug!(
            "Cluster {} populated with {} agents of {} each",
            self.group_id,
            size,
            share
        );
        Ok(())
    }

    /// Append one agent with an unset value. Existing values are not rebalanced.
    pub fn add_agent(&mut self) -> AgentId {
        let ordinal = self.next_ordinal.max(self.agents.len());
        let id = AgentId::member_of(&self.group_id, ordinal);
        self.next_ordinal = ordinal + 1;

        self.agents.push(Agent::new(
            self.group_id.clone(),
            id.clone(),
            None,
            self.defection,
        ));
        id
    }

    /// Remove the first agent with the given id, returning it.
    ///
    /// Returns `None` (and logs) when no agent matches.
    pub fn remove_agent(&mut self, id: &str) -> Option<Agent> {
        match self.agents.iter().position(|agent| agent.id() == id) {
            Some(index) => Some(self.agents.remove(index)),
            None => {
                log::warn!("Cluster {}: no agent with id {id} to remove", self.group_id);
                None
            }
        }
    }

    /// Move one point along the trajectory and return the new cluster value
    pub fn step(&mut self) -> Result<f64> {
        let value = *self
            .path
            .get(self.cursor)
            .ok_or(WealthError::SequenceExhausted {
                consumed: self.cursor,
            })?;

        self.cursor += 1;
        self.cluster_value = value;
        log::trace!(
            "Cluster {} step {}: value={}",
            self.group_id,
            self.cursor,
            value
        );
        Ok(value)
    }

    /// Split the current cluster value across the agents with a symmetric
    /// Dirichlet(1, ..., 1) draw. Share `i` goes to agent `i`.
    pub fn recalculate_value(&mut self) -> Result<()> {
        let k = self.agents.len();
        let shares: Vec<f64> = match k {
            0 => {
                return Err(WealthError::invalid(format!(
                    "cluster {} has no agents to reallocate to",
                    self.group_id
                )));
            }
            1 => vec![1.0],
            _ => Dirichlet::new_with_size(1.0_f64, k)
                .map_err(|e| WealthError::invalid(e.to_string()))?
                .sample(&mut self.rng),
        };

        let total = self.cluster_value;
        for (agent, share) in self.agents.iter_mut().zip(shares) {
            agent.set_value(share * total);
        }
        Ok(())
    }

    /// Draw one defect decision per agent, in agent order
    pub fn defections(&mut self) -> Vec<(AgentId, bool)> {
        self.agents
            .iter()
            .map(|agent| (agent.id().clone(), agent.does_defect(&mut self.rng)))
            .collect()
    }

    /// Values already stepped through, oldest first
    pub fn historical_record(&self) -> Result<&[f64]> {
        if self.cursor == 0 {
            return Err(WealthError::invalid(format!(
                "cluster {} has not stepped yet",
                self.group_id
            )));
        }
        Ok(&self.path[..self.cursor])
    }

    /// Midpoint of the historical range: `(min + max) / 2`
    pub fn historical_average(&self) -> Result<f64> {
        let record = self.historical_record()?;
        let (min, max) = record
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Ok((min + max) / 2.0)
    }

    pub fn cluster_size(&self) -> usize {
        self.agents.len()
    }

    pub fn cluster_value(&self) -> f64 {
        self.cluster_value
    }

    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id() == id)
    }

    /// Value of the agent with the given id
    pub fn agent_value(&self, id: &str) -> Result<f64> {
        self.agent(id)
            .ok_or_else(|| {
                WealthError::NotFound(format!("agent {id} in cluster {}", self.group_id))
            })?
            .value()
    }

    /// Sum of the values of agents whose value is set
    pub fn total_agent_value(&self) -> f64 {
        self.agents.iter().filter_map(|a| a.value().ok()).sum()
    }

    /// The full trajectory, including points not yet reached
    pub fn path(&self) -> &[f64] {
        &self.path
    }

    pub fn steps_taken(&self) -> usize {
        self.cursor
    }

    pub fn remaining_steps(&self) -> usize {
        self.path.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.path.len()
    }
}

impl fmt::Debug for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cluster")
            .field("group_id", &self.group_id)
            .field("cluster_value", &self.cluster_value)
            .field("agents", &self.agents.len())
            .field("steps_taken", &self.cursor)
            .field("path_len", &self.path.len())
            .finish()
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cluster {} (size={}) has a value of {}",
            self.group_id,
            self.cluster_size(),
            self.cluster_value
        )
    }
}
