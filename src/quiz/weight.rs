use anyhow::{anyhow, Result};
use itertools::{Itertools, MinMaxResult};
use std::cmp::Ordering;

#[cfg(test)]
mod tests;

pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Parameters of the clamped additive weight update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjustment {
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl Adjustment {
    pub fn new(step: f64, min: f64, max: f64) -> Self {
        Adjustment { step, min, max }
    }

    /// Small steps, weights capped at 2.
    pub fn gentle() -> Self {
        Adjustment::new(0.1, 0.1, 2.0)
    }

    /// Large steps, weights capped at 3.
    pub fn steep() -> Self {
        Adjustment::new(0.4, 0.1, 3.0)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.min.is_finite() && self.max.is_finite()) {
            return Err(anyhow!("Weight parameters must be finite numbers"));
        }
        if self.step <= 0.0 {
            return Err(anyhow!("Weight step must be positive, got {}", self.step));
        }
        if self.min <= 0.0 {
            return Err(anyhow!("Minimum weight must be positive, got {}", self.min));
        }
        if self.min > self.max {
            return Err(anyhow!(
                "Minimum weight {} is above maximum weight {}",
                self.min,
                self.max
            ));
        }
        Ok(())
    }

    pub fn apply(&self, current_weight: f64, verdict: bool) -> f64 {
        adjust(current_weight, verdict, self.step, self.min, self.max)
    }

    pub fn clamp(&self, weight: f64) -> f64 {
        weight.max(self.min).min(self.max)
    }

    pub fn contains(&self, weight: f64) -> bool {
        weight >= self.min && weight <= self.max
    }
}

impl Default for Adjustment {
    fn default() -> Self {
        Adjustment::gentle()
    }
}

/// Moves a weight down by `step` after a correct answer and up by `step` after
/// an incorrect one. The result never leaves `[min, max]`.
pub fn adjust(current_weight: f64, verdict: bool, step: f64, min: f64, max: f64) -> f64 {
    let new_weight = if verdict {
        (current_weight - step).max(min)
    } else {
        (current_weight + step).min(max)
    };
    new_weight.max(min).min(max)
}

/// Display values shown next to a question.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightStats {
    pub current: f64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
}

impl WeightStats {
    pub fn compute(current: f64, weights: &[f64]) -> Option<WeightStats> {
        let (min, max) = match weights
            .iter()
            .copied()
            .minmax_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(weight) => (weight, weight),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        Some(WeightStats {
            current,
            min,
            max,
            sum: weights.iter().sum(),
        })
    }
}
