use psicotest_core::models::interpretation::ScaleKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Defines the valid range for a response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub const fn likert(max: f64) -> Self {
        Self {
            min: 0.0,
            max,
            step: Some(1.0),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// A scored aggregate of an instrument (domain, facet or factor) as exposed
/// to callers browsing the instrument structure.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scale {
    pub id: String,
    pub name: String,
    pub kind: ScaleKind,
    /// Item ids for facets and factors, facet ids for domains.
    pub members: Vec<String>,
    pub description: Option<String>,
}

/// A single response as submitted, used for validation only.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseEntry {
    pub item_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub message: String,
}

/// Arithmetic mean, or 0 for an empty set.
pub fn mean_or_zero(sum: f64, count: u32) -> f64 {
    if count == 0 { 0.0 } else { sum / f64::from(count) }
}

/// Plain mean of already-averaged values, not re-weighted by how many
/// items stand behind each of them.
pub fn mean_of_means(means: &[f64]) -> f64 {
    if means.is_empty() {
        return 0.0;
    }
    means.iter().sum::<f64>() / means.len() as f64
}

/// Round to the nearest integer, halves going up (2.5 -> 3, -2.5 -> -2).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}
