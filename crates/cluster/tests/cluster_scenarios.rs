//! Cluster scenario tests
//!
//! End-to-end behaviour of clusters and agents under fixed seeds:
//! population, stepping to exhaustion, reallocation and defection rates.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wealth_cluster::{Agent, Cluster, ClusterConfig, DefectionParams};
use wealth_core::WealthError;
use wealth_stochastic::{BrownianMotion, GrowthParams};

const SEED: u64 = 42;

#[test]
fn test_red_cluster_scenario() {
    let mut cluster = Cluster::new(10.0, "RED", 10.0, SEED).unwrap();
    cluster.create_cluster(5).unwrap();

    assert_eq!(cluster.cluster_size(), 5);
    for agent in cluster.agents() {
        assert_eq!(agent.value(), Ok(2.0));
    }

    let first = cluster.path()[0];
    assert_eq!(cluster.step().unwrap(), first);
    assert_eq!(cluster.cluster_value(), first);
    assert_eq!(cluster.cluster_size(), 5);

    cluster.recalculate_value().unwrap();
    assert_eq!(cluster.cluster_size(), 5);
}

#[test]
fn test_trajectory_matches_generator_under_same_seed() {
    let cluster = Cluster::new(10.0, "RED", 10.0, SEED).unwrap();

    let mut rng = StdRng::seed_from_u64(SEED);
    let expected = BrownianMotion::default()
        .economic_growth(&mut rng, &GrowthParams::cluster_default(10.0))
        .unwrap();

    assert_eq!(cluster.path(), expected.values());
}

#[test]
fn test_step_bounded_by_path_length() {
    let mut cluster = Cluster::new(10.0, "GREEN", 10.0, SEED).unwrap();
    let n = cluster.path().len();

    for _ in 0..n {
        cluster.step().unwrap();
    }
    assert_eq!(
        cluster.step(),
        Err(WealthError::SequenceExhausted { consumed: n })
    );
    assert_eq!(cluster.historical_record().unwrap().len(), n);
}

#[test]
fn test_historical_average_tracks_steps() {
    let mut cluster = Cluster::new(10.0, "BLUE", 10.0, SEED).unwrap();
    let path = cluster.path().to_vec();

    for k in 1..=100 {
        cluster.step().unwrap();

        let record = &path[..k];
        let min = record.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = record.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(cluster.historical_average().unwrap(), (min + max) / 2.0);
    }
}

#[test]
fn test_reallocation_sums_to_cluster_value() {
    let mut cluster = Cluster::new(10.0, "ORANGE", 10.0, SEED).unwrap();
    cluster.create_cluster(7).unwrap();

    for _ in 0..200 {
        cluster.step().unwrap();
        cluster.recalculate_value().unwrap();
        assert_relative_eq!(
            cluster.total_agent_value(),
            cluster.cluster_value(),
            max_relative = 1e-9
        );
    }
}

#[test]
fn test_reallocation_shares_are_uniform_on_average() {
    let mut cluster = Cluster::new(10.0, "PINK", 10.0, SEED).unwrap();
    cluster.create_cluster(4).unwrap();

    // Without stepping the cluster value stays at 10: each share ~ 10 * Beta(1, 3)
    let rounds = 4000;
    let mut sums = vec![0.0; 4];
    for _ in 0..rounds {
        cluster.recalculate_value().unwrap();
        for (sum, agent) in sums.iter_mut().zip(cluster.agents()) {
            *sum += agent.value().unwrap();
        }
    }

    for sum in sums {
        assert_abs_diff_eq!(sum / rounds as f64, 2.5, epsilon = 0.15);
    }
}

#[test]
fn test_remove_unknown_agent_keeps_size() {
    let mut cluster = Cluster::new(10.0, "RED", 10.0, SEED).unwrap();
    cluster.create_cluster(5).unwrap();

    assert!(cluster.remove_agent("does-not-exist").is_none());
    assert_eq!(cluster.cluster_size(), 5);
}

#[test]
fn test_stepping_without_agents() {
    let mut cluster = Cluster::new(10.0, "YELLOW", 10.0, SEED).unwrap();

    cluster.step().unwrap();
    cluster.step().unwrap();
    assert_eq!(cluster.cluster_size(), 0);
    assert!(cluster.recalculate_value().is_err());
}

#[test]
fn test_defection_rate_half() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let agent = Agent::new("RED", "R0", Some(1.0), DefectionParams::new(0.0, 0.5).unwrap());

    let trials = 10_000;
    let defections = (0..trials).filter(|_| agent.does_defect(&mut rng)).count();
    let rate = defections as f64 / trials as f64;

    println!("Defection rate: {rate:.4}");
    assert_abs_diff_eq!(rate, 0.5, epsilon = 0.03);
}

#[test]
fn test_cluster_defections_follow_params() {
    let params = DefectionParams::new(0.1, 0.4).unwrap();
    let config = ClusterConfig::new(10.0, "PURPLE", 10.0)
        .with_seed(SEED)
        .with_defection(params);
    let mut cluster = Cluster::with_config(config).unwrap();
    cluster.create_cluster(10).unwrap();

    let rounds = 1000;
    let mut count = 0;
    for _ in 0..rounds {
        let decisions = cluster.defections();
        assert_eq!(decisions.len(), 10);
        count += decisions.iter().filter(|(_, defects)| *defects).count();
    }

    let rate = count as f64 / (rounds * 10) as f64;
    assert_abs_diff_eq!(rate, params.probability(), epsilon = 0.03);
}
