//! Parameters of the geometric growth model

use serde::{Deserialize, Serialize};
use wealth_core::{Result, WealthError};

/// Upper bound on `floor(delta_t / dt)`
pub const MAX_STEPS: usize = 10_000_000;

/// Parameters for `S(t) = s0 * exp((mu - sigma²/2) t + sigma W(t))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthParams {
    /// Initial economy size
    pub s0: f64,
    /// Drift (upwards or downwards)
    pub mu: f64,
    /// Volatility
    pub sigma: f64,
    /// Horizon over which the path is computed (e.g. 52 weeks)
    pub delta_t: f64,
    /// Granularity of the horizon
    pub dt: f64,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            s0: 100.0,
            mu: 0.2,
            sigma: 0.68,
            delta_t: 52.0,
            dt: 0.1,
        }
    }
}

impl GrowthParams {
    /// Drift and volatility used by clusters
    pub fn cluster_default(s0: f64) -> Self {
        Self {
            s0,
            sigma: 0.6,
            ..Default::default()
        }
    }

    /// Number of time points: `floor(delta_t / dt)`
    pub fn num_steps(&self) -> usize {
        let n = (self.delta_t / self.dt).floor();
        if n.is_finite() && n > 0.0 { n as usize } else { 0 }
    }

    /// Evenly spaced time points over `[0, delta_t]`
    pub fn time_grid(&self) -> Vec<f64> {
        let n = self.num_steps();
        match n {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                let spacing = self.delta_t / (n - 1) as f64;
                (0..n).map(|i| i as f64 * spacing).collect()
            }
        }
    }

    /// Deterministic drift term `(mu - sigma²/2) t`
    pub fn drift_at(&self, t: f64) -> f64 {
        (self.mu - self.sigma.powi(2) / 2.0) * t
    }

    /// Check the parameters, returning the number of steps they produce
    pub fn validate(&self) -> Result<usize> {
        let fields = [
            ("s0", self.s0),
            ("mu", self.mu),
            ("sigma", self.sigma),
            ("delta_t", self.delta_t),
            ("dt", self.dt),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(WealthError::invalid(format!("{name} must be finite")));
        }
        if self.s0 <= 0.0 {
            return Err(WealthError::invalid(format!(
                "s0 must be positive, got {}",
                self.s0
            )));
        }
        if self.sigma < 0.0 {
            return Err(WealthError::invalid(format!(
                "sigma must be non-negative, got {}",
                self.sigma
            )));
        }
        if self.dt <= 0.0 || self.delta_t <= 0.0 {
            return Err(WealthError::invalid(format!(
                "delta_t and dt must be positive, got delta_t={} dt={}",
                self.delta_t, self.dt
            )));
        }

        let n = (self.delta_t / self.dt).floor();
        if n > MAX_STEPS as f64 {
            return Err(WealthError::invalid(format!(
                "delta_t / dt yields {n} steps, more than {MAX_STEPS} (delta_t={}, dt={})",
                self.delta_t, self.dt
            )));
        }

        match self.num_steps() {
            0 => Err(WealthError::invalid(format!(
                "delta_t / dt yields no steps (delta_t={}, dt={})",
                self.delta_t, self.dt
            ))),
            n => Ok(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_step_count() {
        assert_eq!(GrowthParams::default().num_steps(), 520);
        assert_eq!(GrowthParams::default().validate(), Ok(520));
    }

    #[test]
    fn test_cluster_default() {
        let params = GrowthParams::cluster_default(10.0);
        assert_eq!(params.s0, 10.0);
        assert_eq!(params.mu, 0.2);
        assert_eq!(params.sigma, 0.6);
    }

    #[test]
    fn test_time_grid_endpoints() {
        let params = GrowthParams {
            delta_t: 10.0,
            dt: 1.0,
            ..Default::default()
        };
        let grid = params.time_grid();

        assert_eq!(grid.len(), 10);
        assert_eq!(grid[0], 0.0);
        assert_relative_eq!(grid[9], 10.0);
    }

    #[test]
    fn test_single_point_grid() {
        let params = GrowthParams {
            delta_t: 1.5,
            dt: 1.0,
            ..Default::default()
        };
        assert_eq!(params.time_grid(), vec![0.0]);
    }

    #[test]
    fn test_validate_rejects_bad_params() {
        let cases = [
            GrowthParams {
                dt: 0.0,
                ..Default::default()
            },
            GrowthParams {
                delta_t: -1.0,
                ..Default::default()
            },
            GrowthParams {
                dt: 2.0,
                delta_t: 1.0,
                ..Default::default()
            },
            GrowthParams {
                s0: 0.0,
                ..Default::default()
            },
            GrowthParams {
                sigma: -0.1,
                ..Default::default()
            },
            GrowthParams {
                mu: f64::NAN,
                ..Default::default()
            },
        ];

        for params in cases {
            assert!(
                matches!(params.validate(), Err(WealthError::InvalidArgument(_))),
                "{params:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_oversized_horizon() {
        let params = GrowthParams {
            delta_t: 1e30,
            dt: 1e-10,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(WealthError::InvalidArgument(_))
        ));

        let at_limit = GrowthParams {
            delta_t: MAX_STEPS as f64,
            dt: 1.0,
            ..Default::default()
        };
        assert_eq!(at_limit.validate(), Ok(MAX_STEPS));
    }

    #[test]
    fn test_deserialize_partial() {
        let params: GrowthParams = serde_json::from_str(r#"{"s0": 10.0, "sigma": 0.6}"#).unwrap();
        assert_eq!(params.s0, 10.0);
        assert_eq!(params.sigma, 0.6);
        assert_eq!(params.dt, 0.1);
    }
}
