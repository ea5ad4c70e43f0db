use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::answers::{InstrumentKind, TestAnswers};
use super::interpretation::Interpretation;
use super::orientation::OrientationSummary;
use super::result::ScoringResult;

/// The record persisted for a completed test: raw answers alongside the
/// computed scores and their interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestReport {
    pub id: Uuid,
    pub instrument: InstrumentKind,
    pub subject: Option<String>,
    pub answers: TestAnswers,
    pub result: ScoringResult,
    pub interpretation: Interpretation,
    /// S-AS only.
    pub orientation: Option<OrientationSummary>,
    pub completed_at: jiff::Timestamp,
}

impl TestReport {
    pub fn new(
        subject: Option<String>,
        answers: TestAnswers,
        result: ScoringResult,
        interpretation: Interpretation,
        orientation: Option<OrientationSummary>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            instrument: answers.instrument(),
            subject,
            answers,
            result,
            interpretation,
            orientation,
            completed_at: jiff::Timestamp::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
