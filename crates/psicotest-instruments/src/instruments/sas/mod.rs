pub mod catalog;
pub mod narrative;
pub mod orientation;

use psicotest_core::models::answers::{InstrumentKind, ItemKey, Role, SasAnswers};
use psicotest_core::models::interpretation::{
    Interpretation, Narrative, Recommendation, ScaleInterpretation, ScaleKind,
    ScoreInterpretation,
};
use psicotest_core::models::result::{FactorScore, RoleScore, SasResult};

use crate::scoring::{
    mean_or_zero, round_half_up, round_to_tenth, ResponseEntry, Scale, ScoreRange,
    ValidationError,
};
use crate::tiers::{TierBands, SAS_BANDS};
use crate::Instrument;

use catalog::{FactorDef, CHOICE_SCORE_MAX, FACTORS, RATING_MAX};
pub use narrative::narrative_for;
pub use orientation::{analyze_orientation, narrate_orientation, summarize_orientation};

/// How many of the highest-scoring factors are described.
pub const TOP_FACTORS: usize = 3;

/// A top factor gets a targeted recommendation when `mean / RATING_MAX`
/// reaches this value.
pub const RECOMMENDATION_THRESHOLD: f64 = 0.6;

/// S-AS: Scopo-Antiscopo questionnaire. Part I rates both statements of 20
/// pairs on a 0–4 scale; Part II forces a choice within each pair.
pub struct Sas;

impl Instrument for Sas {
    fn id(&self) -> &str {
        "sas"
    }

    fn name(&self) -> &str {
        "S-AS"
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Sas
    }

    fn response_range(&self) -> ScoreRange {
        ScoreRange::likert(RATING_MAX)
    }

    fn scales(&self) -> &[Scale] {
        static SCALES: std::sync::LazyLock<Vec<Scale>> = std::sync::LazyLock::new(|| {
            FACTORS
                .iter()
                .map(|f| Scale {
                    id: f.id.to_string(),
                    name: f.name.to_string(),
                    kind: ScaleKind::Factor,
                    members: f
                        .items
                        .iter()
                        .filter(|key| !catalog::is_excluded(key))
                        .map(|key| key.to_string())
                        .collect(),
                    description: Some(f.description.to_string()),
                })
                .collect()
        });
        &SCALES
    }

    fn tier_bands(&self) -> &TierBands {
        &SAS_BANDS
    }

    fn knows_item(&self, item_id: &str) -> bool {
        item_id
            .parse::<ItemKey>()
            .is_ok_and(|key| catalog::is_known_key(&key))
    }

    fn narrative_for(&self, scale_id: &str, mean: f64) -> String {
        narrative_for(scale_id, mean)
    }
}

#[derive(Debug, Default)]
struct RoleTally {
    total: f64,
    count: u32,
}

impl RoleTally {
    fn add(&mut self, value: f64) {
        self.total += value;
        self.count += 1;
    }

    fn finish(self) -> RoleScore {
        let mean = if self.count == 0 {
            0
        } else {
            round_half_up(self.total / f64::from(self.count)) as i32
        };
        RoleScore {
            total: self.total,
            count: self.count,
            mean,
        }
    }
}

/// Score a (possibly partial) S-AS answer set.
pub fn score(answers: &SasAnswers) -> SasResult {
    let mut scopo = RoleTally::default();
    let mut antiscopo = RoleTally::default();

    for (raw_key, value) in &answers.part1 {
        match raw_key.parse::<ItemKey>() {
            Ok(key) => match key.role {
                Role::Scopo => scopo.add(*value),
                Role::Antiscopo => antiscopo.add(*value),
            },
            Err(_) => tracing::debug!(key = %raw_key, "ignoring malformed S-AS Part I key"),
        }
    }

    // Forced choices feed the same running totals before rounding.
    for choice in answers.part2.values() {
        match choice.role {
            Role::Scopo => scopo.add(choice.score),
            Role::Antiscopo => antiscopo.add(choice.score),
        }
    }

    let scopo = scopo.finish();
    let antiscopo = antiscopo.finish();

    SasResult {
        factors: FACTORS.iter().map(|def| score_factor(def, answers)).collect(),
        balance: scopo.mean - antiscopo.mean,
        scopo,
        antiscopo,
    }
}

fn score_factor(def: &FactorDef, answers: &SasAnswers) -> FactorScore {
    let (sum, answered) = def
        .items
        .iter()
        .filter(|key| !catalog::is_excluded(key))
        .filter_map(|key| answers.rating(key))
        .fold((0.0, 0u32), |(sum, n), v| (sum + v, n + 1));

    FactorScore {
        id: def.id.to_string(),
        name: def.name.to_string(),
        sum,
        mean: round_to_tenth(mean_or_zero(sum, answered)),
        answered,
    }
}

pub fn interpret_score(mean: f64) -> ScoreInterpretation {
    SAS_BANDS.interpret(mean)
}

/// Factors in descending mean order; ties keep catalog order.
pub fn ranked_factors(result: &SasResult) -> Vec<&FactorScore> {
    let mut ranked: Vec<&FactorScore> = result.factors.iter().collect();
    ranked.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    ranked
}

fn top_factors(result: &SasResult) -> impl Iterator<Item = &FactorScore> {
    ranked_factors(result)
        .into_iter()
        .take(TOP_FACTORS)
        .filter(|f| f.mean > 0.0)
}

pub fn recommendations_for(result: &SasResult) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = top_factors(result)
        .filter(|f| f.mean / RATING_MAX >= RECOMMENDATION_THRESHOLD)
        .map(|f| narrative::factor_recommendation(&f.id, &f.name))
        .collect();

    if recommendations.is_empty() {
        recommendations.push(narrative::normal_range_recommendation());
    }
    recommendations.push(narrative::follow_up_recommendation());
    recommendations
}

pub fn interpret(result: &SasResult) -> Interpretation {
    let scales = result
        .factors
        .iter()
        .map(|f| {
            let tier = SAS_BANDS.classify(f.mean);
            ScaleInterpretation {
                identifier: f.id.clone(),
                name: f.name.clone(),
                kind: ScaleKind::Factor,
                mean: f.mean,
                tier,
                label: tier.label().to_string(),
                color: tier.color().to_string(),
            }
        })
        .collect();

    let narratives = top_factors(result)
        .map(|f| {
            let tier = SAS_BANDS.classify(f.mean);
            Narrative {
                identifier: f.id.clone(),
                name: f.name.clone(),
                level: tier.level(),
                tier,
                mean: f.mean,
                text: narrative_for(&f.id, f.mean),
            }
        })
        .collect();

    Interpretation {
        instrument: InstrumentKind::Sas,
        scales,
        narratives,
        recommendations: recommendations_for(result),
        summary: summarize(result),
        balance_narrative: Some(narrative::balance_narrative(result.balance)),
    }
}

fn summarize(result: &SasResult) -> String {
    let top: Vec<String> = top_factors(result)
        .map(|f| format!("{} ({:.1}, {})", f.name, f.mean, SAS_BANDS.classify(f.mean)))
        .collect();

    let factors = if top.is_empty() {
        "Nessun fattore presenta punteggi rilevanti.".to_string()
    } else {
        format!("Fattori predominanti: {}.", top.join(", "))
    };

    format!(
        "{factors} Media Scopi: {}; media Antiscopi: {}; bilancio: {:+}.",
        result.scopo.mean, result.antiscopo.mean, result.balance
    )
}

/// Range and membership checks for a full S-AS answer set. Part-II pairs
/// must exist and carry a score within `0..=CHOICE_SCORE_MAX`.
pub fn validate(answers: &SasAnswers) -> Vec<ValidationError> {
    let entries: Vec<ResponseEntry> = answers
        .part1
        .iter()
        .map(|(key, value)| ResponseEntry {
            item_id: key.clone(),
            value: *value,
        })
        .collect();
    let mut errors = Sas.validate_responses(&entries);

    let choice_range = ScoreRange {
        min: 0.0,
        max: CHOICE_SCORE_MAX,
        step: None,
    };
    for (pair, choice) in &answers.part2 {
        let item_id = format!("part2:{pair}");
        if !catalog::is_known_pair(*pair) {
            errors.push(ValidationError {
                item_id,
                value: choice.score,
                expected_range: choice_range,
                message: format!("S-AS: unknown statement pair {pair} in Part II"),
            });
        } else if !choice_range.contains(choice.score) {
            errors.push(ValidationError {
                item_id,
                value: choice.score,
                expected_range: choice_range,
                message: format!(
                    "S-AS: Part II choice for pair {pair} has score {} outside range [{}, {}]",
                    choice.score, choice_range.min, choice_range.max
                ),
            });
        }
    }
    errors
}
