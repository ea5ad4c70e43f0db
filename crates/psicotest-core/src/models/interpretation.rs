use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answers::InstrumentKind;

/// Five ordered severity bands. Ordering follows severity, so
/// `SeverityTier::Elevato > SeverityTier::Medio`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityTier {
    MoltoBasso,
    Basso,
    Medio,
    Elevato,
    MoltoElevato,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 5] = [
        SeverityTier::MoltoBasso,
        SeverityTier::Basso,
        SeverityTier::Medio,
        SeverityTier::Elevato,
        SeverityTier::MoltoElevato,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::MoltoBasso => "Molto Basso",
            SeverityTier::Basso => "Basso",
            SeverityTier::Medio => "Medio",
            SeverityTier::Elevato => "Elevato",
            SeverityTier::MoltoElevato => "Molto Elevato",
        }
    }

    /// Hex color used by report renderers.
    pub fn color(&self) -> &'static str {
        match self {
            SeverityTier::MoltoBasso => "#2e7d32",
            SeverityTier::Basso => "#66bb6a",
            SeverityTier::Medio => "#fbc02d",
            SeverityTier::Elevato => "#f57c00",
            SeverityTier::MoltoElevato => "#c62828",
        }
    }

    /// Qualitative level used to key narrative paragraphs.
    pub fn level(&self) -> QualitativeLevel {
        match self {
            SeverityTier::MoltoBasso | SeverityTier::Basso => QualitativeLevel::Basso,
            SeverityTier::Medio => QualitativeLevel::Moderato,
            SeverityTier::Elevato => QualitativeLevel::Elevato,
            SeverityTier::MoltoElevato => QualitativeLevel::MoltoElevato,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QualitativeLevel {
    Basso,
    Moderato,
    Elevato,
    MoltoElevato,
}

impl QualitativeLevel {
    pub fn label(&self) -> &'static str {
        match self {
            QualitativeLevel::Basso => "basso",
            QualitativeLevel::Moderato => "moderato",
            QualitativeLevel::Elevato => "elevato",
            QualitativeLevel::MoltoElevato => "molto elevato",
        }
    }
}

impl fmt::Display for QualitativeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a single mean score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreInterpretation {
    pub tier: SeverityTier,
    pub label: String,
    pub color: String,
}

impl From<SeverityTier> for ScoreInterpretation {
    fn from(tier: SeverityTier) -> Self {
        Self {
            tier,
            label: tier.label().to_string(),
            color: tier.color().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleKind {
    Domain,
    Facet,
    Factor,
}

/// A scored scale together with its tier, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleInterpretation {
    pub identifier: String,
    pub name: String,
    pub kind: ScaleKind,
    pub mean: f64,
    pub tier: SeverityTier,
    pub label: String,
    pub color: String,
}

/// A narrative paragraph selected for one domain or factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Narrative {
    pub identifier: String,
    pub name: String,
    pub level: QualitativeLevel,
    pub tier: SeverityTier,
    pub mean: f64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationKind {
    /// Tied to one domain or factor.
    Targeted,
    /// Emitted when no domain or factor qualifies.
    NormalRange,
    /// Always the last entry.
    FollowUp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub identifier: Option<String>,
    pub kind: RecommendationKind,
    pub title: String,
    pub body: String,
}

/// Qualitative reading of a scoring result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub instrument: InstrumentKind,
    pub scales: Vec<ScaleInterpretation>,
    pub narratives: Vec<Narrative>,
    pub recommendations: Vec<Recommendation>,
    pub summary: String,
    /// S-AS only.
    pub balance_narrative: Option<String>,
}
