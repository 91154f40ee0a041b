//! Bootstrap - cluster creation and population
//!
//! Builds one cluster per configured group, each with its own random
//! stream, and populates it with an even split of the initial value.

use crate::config::SimulationConfig;
use crate::error::Result;
use wealth_cluster::Cluster;

/// Create and populate every cluster in `config`, in configuration order
pub fn bootstrap_clusters(config: &SimulationConfig) -> Result<Vec<Cluster>> {
    config.validate()?;

    let mut clusters = Vec::with_capacity(config.group_ids.len());
    for index in 0..config.group_ids.len() {
        let Some(cluster_config) = config.cluster_config(index) else {
            continue;
        };
        let mut cluster = Cluster::with_config(cluster_config)?;
        cluster.create_cluster(config.cluster_size)?;

        log::info!(
            "Registered cluster {} (#{}) with {} agents, value {} and a {}-step trajectory",
            cluster.group_id(),
            index,
            cluster.cluster_size(),
            cluster.cluster_value(),
            cluster.path().len()
        );
        clusters.push(cluster);
    }

    Ok(clusters)
}
