//! Episode records and tabular diagnostics.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One recorded episode.
///
/// `observations[0]` is the observation returned by reset and
/// `observations[t + 1]` the one returned after `actions[t]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub observations: Vec<Vec<f32>>,
    pub actions: Vec<Vec<f32>>,
    pub rewards: Vec<f32>,
}

impl Path {
    #[must_use]
    pub fn new(initial_observation: Vec<f32>) -> Self {
        Self {
            observations: vec![initial_observation],
            actions: Vec::new(),
            rewards: Vec::new(),
        }
    }

    pub fn push(&mut self, action: Vec<f32>, observation: Vec<f32>, reward: f32) {
        self.actions.push(action);
        self.observations.push(observation);
        self.rewards.push(reward);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn total_reward(&self) -> f32 {
        self.rewards.iter().sum()
    }
}

/// Ordered key/value record, one row of a diagnostics table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<(String, f64)>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, keeping the position of an existing key.
    pub fn record(&mut self, key: impl Into<String>, value: f64) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Emit every entry through `tracing`.
    pub fn log(&self) {
        for (key, value) in self.iter() {
            tracing::info!(target: "diagnostics", "{key}: {value}");
        }
    }
}

impl Serialize for Diagnostics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Mean, max, min and population standard deviation.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn summary(values: &[f64]) -> Option<(f64, f64, f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some((mean, max, min, var.sqrt()))
}
