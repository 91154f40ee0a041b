/// Below this many steps a generated path is flagged as statistically unreliable
pub const SMALL_SAMPLE_THRESHOLD: usize = 30;

/// Advisory emitted when a path is generated with too few steps
pub const SMALL_SAMPLE_WARNING: &str =
    "WARNING! The number of steps is small. It may not generate a good stochastic process sequence!";

/// A generated trajectory
///
/// The small-sample advisory travels with the values so callers can see it
/// without a logger attached.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPath {
    values: Vec<f64>,
    small_sample: bool,
}

impl SimulatedPath {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        let small_sample = values.len() < SMALL_SAMPLE_THRESHOLD;
        Self {
            values,
            small_sample,
        }
    }

    /// Apply `f` to every point, keeping the advisory
    pub(crate) fn map(self, mut f: impl FnMut(usize, f64) -> f64) -> Self {
        let values = self
            .values
            .into_iter()
            .enumerate()
            .map(|(i, v)| f(i, v))
            .collect();
        Self {
            values,
            small_sample: self.small_sample,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// True when fewer than [`SMALL_SAMPLE_THRESHOLD`] steps were generated
    pub fn is_small_sample(&self) -> bool {
        self.small_sample
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for SimulatedPath {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
