//! Simulation - multi-cluster orchestration
//!
//! Each step advances every cluster along its trajectory, reallocates the
//! cluster value on the configured interval and polls every agent's
//! defect decision.

use crate::bootstrap::bootstrap_clusters;
use crate::config::SimulationConfig;
use crate::error::Result;
use wealth_cluster::Cluster;
use wealth_core::{GroupId, WealthError};

/// Outcome of one step for one cluster
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub group_id: GroupId,
    /// Step number (1-based)
    pub step: usize,
    /// Cluster value after the step
    pub cluster_value: f64,
    /// Whether the value was reallocated across agents this step
    pub reallocated: bool,
    /// Agents that defected this step
    pub defections: usize,
}

/// Final state of one cluster
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSummary {
    pub group_id: GroupId,
    pub cluster_size: usize,
    pub final_value: f64,
    /// Midpoint of the visited range; `None` if the cluster never stepped
    pub historical_average: Option<f64>,
    pub steps_taken: usize,
    pub total_defections: usize,
}

/// Simulation results
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationResults {
    /// Steps completed by every cluster
    pub steps_completed: usize,
    /// Whether the run stopped early because a trajectory ran out
    pub exhausted: bool,
    pub clusters: Vec<ClusterSummary>,
}

/// Multi-cluster wealth simulation
pub struct ClusterSimulation {
    config: SimulationConfig,
    clusters: Vec<Cluster>,
    defection_counts: Vec<usize>,
    step: usize,
}

impl ClusterSimulation {
    /// Create a simulation with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(SimulationConfig::default())
    }

    /// Create a simulation with custom configuration
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        let clusters = bootstrap_clusters(&config)?;
        let defection_counts = vec![0; clusters.len()];

        Ok(Self {
            config,
            clusters,
            defection_counts,
            step: 0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Steps completed so far
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// True when any cluster has consumed its whole trajectory
    pub fn is_exhausted(&self) -> bool {
        self.clusters.iter().any(Cluster::is_exhausted)
    }

    /// Advance every cluster by one step
    ///
    /// Fails without touching any cluster once a trajectory is used up.
    pub fn step_all(&mut self) -> Result<Vec<StepReport>> {
        if self.is_exhausted() {
            return Err(WealthError::SequenceExhausted {
                consumed: self.step,
            }
            .into());
        }

        let step = self.step + 1;
        let interval = self.config.reallocation_interval;
        let reallocate = interval > 0 && step % interval == 0;

        let mut reports = Vec::with_capacity(self.clusters.len());
        for (cluster, total) in self.clusters.iter_mut().zip(&mut self.defection_counts) {
            let cluster_value = cluster.step()?;
            if reallocate {
                cluster.recalculate_value()?;
            }

            let defections = cluster
                .defections()
                .into_iter()
                .filter(|(_, defects)| *defects)
                .count();
            *total += defections;

            reports.push(StepReport {
                group_id: cluster.group_id().clone(),
                step,
                cluster_value,
                reallocated: reallocate,
                defections,
            });
        }

        self.step = step;
        if step % 100 == 0 {
            log::debug!("Step {step}: {} clusters advanced", reports.len());
        }
        Ok(reports)
    }

    /// Run the configured number of steps
    ///
    /// Stops early when a trajectory runs out.
    pub fn run(&mut self) -> Result<SimulationResults> {
        log::info!(
            "Starting simulation: {} clusters, {} steps",
            self.clusters.len(),
            self.config.steps
        );

        let mut exhausted = false;
        while self.step < self.config.steps {
            if self.is_exhausted() {
                log::warn!(
                    "Trajectory exhausted after {} steps, stopping early",
                    self.step
                );
                exhausted = true;
                break;
            }
            self.step_all()?;
        }

        let results = self.results(exhausted);
        log::info!(
            "Simulation finished: {} steps across {} clusters",
            results.steps_completed,
            results.clusters.len()
        );
        Ok(results)
    }

    fn results(&self, exhausted: bool) -> SimulationResults {
        let clusters = self
            .clusters
            .iter()
            .zip(&self.defection_counts)
            .map(|(cluster, &total_defections)| ClusterSummary {
                group_id: cluster.group_id().clone(),
                cluster_size: cluster.cluster_size(),
                final_value: cluster.cluster_value(),
                historical_average: cluster.historical_average().ok(),
                steps_taken: cluster.steps_taken(),
                total_defections,
            })
            .collect();

        SimulationResults {
            steps_completed: self.step,
            exhausted,
            clusters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunnerError;
    use wealth_stochastic::GrowthParams;

    #[test]
    fn test_simulation_creation() {
        let sim = ClusterSimulation::new().unwrap();

        assert_eq!(sim.clusters().len(), 7);
        assert_eq!(sim.current_step(), 0);
        assert!(sim.clusters().iter().any(|c| c.group_id().as_str() == "RED"));
    }

    #[test]
    fn test_step_all_reports_each_cluster() {
        let mut sim = ClusterSimulation::new().unwrap();
        let reports = sim.step_all().unwrap();

        assert_eq!(reports.len(), 7);
        for (report, cluster) in reports.iter().zip(sim.clusters()) {
            assert_eq!(report.step, 1);
            assert_eq!(report.cluster_value, cluster.path()[0]);
            assert!(!report.reallocated);
            assert!(report.defections <= 5);
        }
    }

    #[test]
    fn test_reallocation_interval() {
        let config = SimulationConfig {
            reallocation_interval: 3,
            ..Default::default()
        };
        let mut sim = ClusterSimulation::with_config(config).unwrap();

        let flags: Vec<bool> = (0..6)
            .map(|_| sim.step_all().unwrap()[0].reallocated)
            .collect();
        assert_eq!(flags, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_step_all_after_exhaustion_leaves_clusters_in_step() {
        let config = SimulationConfig {
            growth: GrowthParams {
                delta_t: 3.0,
                dt: 1.0,
                ..GrowthParams::cluster_default(10.0)
            },
            ..Default::default()
        };
        let mut sim = ClusterSimulation::with_config(config).unwrap();
        for _ in 0..3 {
            sim.step_all().unwrap();
        }

        assert!(matches!(
            sim.step_all(),
            Err(RunnerError::Simulation(WealthError::SequenceExhausted {
                consumed: 3
            }))
        ));
        assert_eq!(sim.current_step(), 3);
        assert!(sim.clusters().iter().all(|c| c.steps_taken() == 3));
    }
}
