//! Brownian Motion Generator
//!
//! Discrete approximations of a Wiener process and the geometric growth
//! model built on top of it.

use crate::growth::GrowthParams;
use crate::path::{SMALL_SAMPLE_THRESHOLD, SMALL_SAMPLE_WARNING, SimulatedPath};
use rand::Rng;
use rand_distr::StandardNormal;
use wealth_core::{Result, WealthError};

/// Brownian motion generator
///
/// Holds the initial value used by the precomputed walks and the running
/// state of the incremental walk. Randomness is always supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct BrownianMotion {
    /// Initial value of `random_walk` / `gaussian_walk`
    x0: f64,
    /// Step budget used to scale increments of `next_gaussian_step`
    n_steps: usize,
    /// Running value of the incremental walk
    last: f64,
}

impl Default for BrownianMotion {
    fn default() -> Self {
        Self {
            x0: 0.0,
            n_steps: 100,
            last: 0.0,
        }
    }
}

impl BrownianMotion {
    /// Create a generator starting at `x0` with a step budget of `steps`
    pub fn new(x0: f64, steps: usize) -> Result<Self> {
        if !x0.is_finite() {
            return Err(WealthError::invalid(format!(
                "initial value must be finite, got {x0}"
            )));
        }
        check_steps(steps)?;

        Ok(Self {
            x0,
            n_steps: steps,
            last: 0.0,
        })
    }

    pub fn x0(&self) -> f64 {
        self.x0
    }

    pub fn steps(&self) -> usize {
        self.n_steps
    }

    /// Current value of the incremental walk
    pub fn last(&self) -> f64 {
        self.last
    }

    /// Generate a path by symmetric ±1 steps
    ///
    /// Consumes `n_step - 1` Bernoulli draws.
    pub fn random_walk<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n_step: usize,
    ) -> Result<SimulatedPath> {
        walk(self.x0, n_step, |scale| {
            let yi = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            yi * scale
        })
    }

    /// Generate a path with standard normal increments
    ///
    /// Consumes `n_step - 1` standard normal draws.
    pub fn gaussian_walk<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n_step: usize,
    ) -> Result<SimulatedPath> {
        gaussian_walk_from(self.x0, rng, n_step)
    }

    /// Advance the incremental walk by one normal step and return the new value
    pub fn next_gaussian_step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let yi: f64 = rng.sample(StandardNormal);
        self.last += yi / (self.n_steps as f64).sqrt();
        self.last
    }

    /// Restart the incremental walk at zero
    pub fn reset_step(&mut self) {
        self.last = 0.0;
    }

    /// Model an economy `S(t)` driven by the Wiener process `W(t)`:
    ///
    /// ```text
    /// S(t) = s0 * exp((mu - sigma²/2) t + sigma W(t))
    /// ```
    ///
    /// The underlying walk always starts at zero; `s0` carries the scale.
    /// Consumes `floor(delta_t / dt) - 1` standard normal draws.
    pub fn economic_growth<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        params: &GrowthParams,
    ) -> Result<SimulatedPath> {
        let n_step = params.validate()?;
        let time = params.time_grid();
        let wiener = gaussian_walk_from(0.0, rng, n_step)?;

        Ok(wiener.map(|i, w| {
            let drift = params.drift_at(time[i]);
            params.s0 * (drift + params.sigma * w).exp()
        }))
    }
}

fn check_steps(n_step: usize) -> Result<()> {
    if n_step == 0 {
        return Err(WealthError::invalid("number of steps must be positive"));
    }
    Ok(())
}

fn gaussian_walk_from<R: Rng + ?Sized>(
    x0: f64,
    rng: &mut R,
    n_step: usize,
) -> Result<SimulatedPath> {
    walk(x0, n_step, |scale| {
        let yi: f64 = rng.sample(StandardNormal);
        yi * scale
    })
}

/// Cumulative sum of `n_step - 1` increments starting at `x0`.
/// `increment` receives the `1 / sqrt(n_step)` scale.
fn walk(x0: f64, n_step: usize, mut increment: impl FnMut(f64) -> f64) -> Result<SimulatedPath> {
    check_steps(n_step)?;
    if n_step < SMALL_SAMPLE_THRESHOLD {
        log::warn!("{SMALL_SAMPLE_WARNING} (steps={n_step})");
    }

    let scale = 1.0 / (n_step as f64).sqrt();
    let mut w = Vec::with_capacity(n_step);
    w.push(x0);
    for i in 1..n_step {
        w.push(w[i - 1] + increment(scale));
    }

    Ok(SimulatedPath::new(w))
}
