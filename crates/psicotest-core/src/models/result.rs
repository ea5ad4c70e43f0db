use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answers::InstrumentKind;

/// Aggregate of one PID-5 facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FacetScore {
    pub id: String,
    pub name: String,
    /// Sum of the reverse-corrected responses actually supplied.
    pub sum: f64,
    /// `sum / answered`, or 0 when nothing was answered.
    pub mean: f64,
    pub answered: u32,
}

/// Aggregate of one PID-5 domain: the plain mean of its facets' means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScore {
    pub id: String,
    pub name: String,
    pub mean: f64,
    pub facets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pid5Result {
    pub facets: Vec<FacetScore>,
    pub domains: Vec<DomainScore>,
    pub answered_items: u32,
    pub total_items: u32,
}

impl Pid5Result {
    pub fn facet(&self, id: &str) -> Option<&FacetScore> {
        self.facets.iter().find(|f| f.id == id)
    }

    pub fn domain(&self, id: &str) -> Option<&DomainScore> {
        self.domains.iter().find(|d| d.id == id)
    }
}

/// Aggregate of one S-AS factor (Part I only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorScore {
    pub id: String,
    pub name: String,
    pub sum: f64,
    /// Rounded to one decimal place.
    pub mean: f64,
    pub answered: u32,
}

/// Running total for one side of the S-AS questionnaire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoleScore {
    pub total: f64,
    pub count: u32,
    /// `total / count` rounded half-up to an integer; 0 when `count` is 0.
    pub mean: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SasResult {
    pub factors: Vec<FactorScore>,
    pub scopo: RoleScore,
    pub antiscopo: RoleScore,
    /// `scopo.mean - antiscopo.mean`.
    pub balance: i32,
}

impl SasResult {
    pub fn factor(&self, id: &str) -> Option<&FactorScore> {
        self.factors.iter().find(|f| f.id == id)
    }
}

/// Numeric output of a scoring run. Produced once per completed test and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringResult {
    Pid5(Pid5Result),
    Sas(SasResult),
}

impl ScoringResult {
    pub fn instrument(&self) -> InstrumentKind {
        match self {
            ScoringResult::Pid5(_) => InstrumentKind::Pid5,
            ScoringResult::Sas(_) => InstrumentKind::Sas,
        }
    }
}
