//! psicotest-instruments
//!
//! Scoring and interpretation engine for the supported psychometric
//! instruments. Pure and synchronous: item catalogs are static data, and
//! every operation maps caller-supplied answers to fresh result values.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod tiers;

use psicotest_core::models::answers::{InstrumentKind, TestAnswers};
use psicotest_core::models::interpretation::{Interpretation, ScoreInterpretation};
use psicotest_core::models::report::TestReport;
use psicotest_core::models::result::ScoringResult;
use serde::Serialize;

use error::InstrumentError;
use instruments::{pid5, sas};
use scoring::{ResponseEntry, Scale, ScoreRange, ValidationError};
use tiers::TierBands;

/// Trait implemented by each psychometric instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "pid5", "sas").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PID-5", "S-AS").
    fn name(&self) -> &str;

    fn kind(&self) -> InstrumentKind;

    /// Valid range of a single item response.
    fn response_range(&self) -> ScoreRange;

    /// The domains, facets or factors this instrument scores.
    fn scales(&self) -> &[Scale];

    fn tier_bands(&self) -> &TierBands;

    /// Whether `item_id` names an item of this instrument.
    fn knows_item(&self, item_id: &str) -> bool;

    /// Narrative paragraph for a scale at the given mean. Unknown scale ids
    /// get a generic sentence.
    fn narrative_for(&self, scale_id: &str, mean: f64) -> String;

    fn interpret_score(&self, mean: f64) -> ScoreInterpretation {
        self.tier_bands().interpret(mean)
    }

    fn scale(&self, scale_id: &str) -> Option<&Scale> {
        self.scales().iter().find(|s| s.id == scale_id)
    }

    /// Validate submitted responses against this instrument's items and
    /// response range.
    fn validate_responses(&self, entries: &[ResponseEntry]) -> Vec<ValidationError> {
        let range = self.response_range();

        let mut errors = Vec::new();
        for entry in entries {
            if !self.knows_item(&entry.item_id) {
                errors.push(ValidationError {
                    item_id: entry.item_id.clone(),
                    value: entry.value,
                    expected_range: range,
                    message: format!("{}: unknown item '{}'", self.name(), entry.item_id),
                });
            } else if !range.contains(entry.value) {
                errors.push(ValidationError {
                    item_id: entry.item_id.clone(),
                    value: entry.value,
                    expected_range: range,
                    message: format!(
                        "{}: item {} response {} is outside range [{}, {}]",
                        self.name(),
                        entry.item_id,
                        entry.value,
                        range.min,
                        range.max,
                    ),
                });
            }
        }
        errors
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(pid5::Pid5), Box::new(sas::Sas)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// A single scale read at a given mean.
#[derive(Debug, Clone, Serialize)]
pub struct ScaleReading {
    pub scale: Scale,
    pub mean: f64,
    pub interpretation: ScoreInterpretation,
    pub narrative: String,
}

pub fn describe_scale(
    instrument_id: &str,
    scale_id: &str,
    mean: f64,
) -> Result<ScaleReading, InstrumentError> {
    let instrument = get_instrument(instrument_id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(instrument_id.to_string()))?;
    let scale = instrument
        .scale(scale_id)
        .ok_or_else(|| InstrumentError::UnknownScale {
            instrument_id: instrument_id.to_string(),
            scale_id: scale_id.to_string(),
        })?;

    Ok(ScaleReading {
        scale: scale.clone(),
        mean,
        interpretation: instrument.interpret_score(mean),
        narrative: instrument.narrative_for(scale_id, mean),
    })
}

/// All range and membership problems in a submitted answer set.
pub fn validate_answers(answers: &TestAnswers) -> Vec<ValidationError> {
    match answers {
        TestAnswers::Pid5(a) => pid5::validate(a),
        TestAnswers::Sas(a) => sas::validate(a),
    }
}

/// Like [`validate_answers`], failing on the first problem.
pub fn ensure_valid(answers: &TestAnswers) -> Result<(), InstrumentError> {
    match validate_answers(answers).into_iter().next() {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

pub fn score(answers: &TestAnswers) -> ScoringResult {
    match answers {
        TestAnswers::Pid5(a) => ScoringResult::Pid5(pid5::score(a)),
        TestAnswers::Sas(a) => ScoringResult::Sas(sas::score(a)),
    }
}

pub fn interpret(result: &ScoringResult) -> Interpretation {
    match result {
        ScoringResult::Pid5(r) => pid5::interpret(r),
        ScoringResult::Sas(r) => sas::interpret(r),
    }
}

/// Score, interpret and (for S-AS) analyze orientation, producing the
/// record handed to storage and renderers.
pub fn evaluate(answers: TestAnswers, subject: Option<String>) -> TestReport {
    let (result, interpretation, orientation) = match &answers {
        TestAnswers::Pid5(a) => {
            let result = pid5::score(a);
            let interpretation = pid5::interpret(&result);
            (ScoringResult::Pid5(result), interpretation, None)
        }
        TestAnswers::Sas(a) => {
            let result = sas::score(a);
            let interpretation = sas::interpret(&result);
            let orientation = sas::summarize_orientation(&a.part2);
            (ScoringResult::Sas(result), interpretation, Some(orientation))
        }
    };

    tracing::debug!(
        instrument = answers.instrument().id(),
        narratives = interpretation.narratives.len(),
        recommendations = interpretation.recommendations.len(),
        "test evaluated"
    );

    TestReport::new(subject, answers, result, interpretation, orientation)
}
