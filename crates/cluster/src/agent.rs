//! Agent
//!
//! One economic actor: a share of its cluster's wealth and a randomized
//! defect/no-defect decision.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use wealth_core::{AgentId, GroupId, Result, WealthError};

/// Parameters of the defect decision
///
/// An agent defects when `U + defection_score < lower_bound` for a fresh
/// uniform draw `U` in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefectionParams {
    /// Shift added to the uniform draw
    pub defection_score: f64,
    /// Threshold the shifted draw must fall below
    pub lower_bound: f64,
}

impl Default for DefectionParams {
    /// A fair coin: defects half the time
    fn default() -> Self {
        Self {
            defection_score: 0.0,
            lower_bound: 0.5,
        }
    }
}

impl DefectionParams {
    pub fn new(defection_score: f64, lower_bound: f64) -> Result<Self> {
        let params = Self {
            defection_score,
            lower_bound,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.defection_score.is_finite() || !self.lower_bound.is_finite() {
            return Err(WealthError::invalid(format!(
                "defection parameters must be finite, got score={} lower_bound={}",
                self.defection_score, self.lower_bound
            )));
        }
        Ok(())
    }

    /// Probability that a single decision comes out as "defect"
    pub fn probability(&self) -> f64 {
        (self.lower_bound - self.defection_score).clamp(0.0, 1.0)
    }
}

/// Economic agent owned by a cluster
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    id: AgentId,
    group: GroupId,
    value: Option<f64>,
    defection: DefectionParams,
}

impl Agent {
    /// Create an agent. A `None` value stays unset until [`Agent::set_value`].
    pub fn new(
        group: impl Into<GroupId>,
        id: impl Into<AgentId>,
        value: Option<f64>,
        defection: DefectionParams,
    ) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            value,
            defection,
        }
    }

    pub fn id(&self) -> &AgentId {
        &self.id
    }

    pub fn group(&self) -> &GroupId {
        &self.group
    }

    /// Current wealth share
    pub fn value(&self) -> Result<f64> {
        self.value
            .ok_or_else(|| WealthError::UninitializedValue(self.id.to_string()))
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Overwrite the value. Negative and zero values are accepted.
    pub fn set_value(&mut self, value: f64) {
        self.value = Some(value);
    }

    pub fn defection(&self) -> &DefectionParams {
        &self.defection
    }

    pub fn set_defection(&mut self, defection: DefectionParams) {
        self.defection = defection;
    }

    /// Draw one uniform number and decide whether the agent defects.
    ///
    /// Consumes exactly one `f64` draw from `rng`; keeps no state.
    pub fn does_defect<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        let prob = rng.r#gen::<f64>() + self.defection.defection_score;
        prob < self.defection.lower_bound
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(
                f,
                "Agent {} from group {} has a value of {}.",
                self.id, self.group, value
            ),
            None => write!(
                f,
                "Agent {} from group {} has no value yet.",
                self.id, self.group
            ),
        }
    }
}
