pub mod catalog;
pub mod narrative;

use std::collections::BTreeMap;

use psicotest_core::models::answers::{InstrumentKind, Pid5Answers};
use psicotest_core::models::interpretation::{
    Interpretation, Narrative, Recommendation, ScaleInterpretation, ScaleKind,
    ScoreInterpretation, SeverityTier,
};
use psicotest_core::models::result::{DomainScore, FacetScore, Pid5Result};

use crate::scoring::{
    mean_of_means, mean_or_zero, ResponseEntry, Scale, ScoreRange, ValidationError,
};
use crate::tiers::{TierBands, PID5_BANDS};
use crate::Instrument;

use catalog::{FacetDef, DOMAINS, FACETS, ITEM_COUNT, RESPONSE_MAX};
pub use narrative::narrative_for;

/// Domains at or above this mean get a narrative paragraph.
pub const NARRATIVE_THRESHOLD: f64 = 1.0;

/// Domains at or above this mean get a targeted recommendation.
pub const RECOMMENDATION_THRESHOLD: f64 = 1.5;

/// PID-5: Personality Inventory for DSM-5, full adult self-report form.
/// 220 items rated 0–3, 25 facets, 5 trait domains.
pub struct Pid5;

impl Instrument for Pid5 {
    fn id(&self) -> &str {
        "pid5"
    }

    fn name(&self) -> &str {
        "PID-5"
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Pid5
    }

    fn response_range(&self) -> ScoreRange {
        ScoreRange::likert(RESPONSE_MAX)
    }

    fn scales(&self) -> &[Scale] {
        static SCALES: std::sync::LazyLock<Vec<Scale>> = std::sync::LazyLock::new(|| {
            let domains = DOMAINS.iter().map(|d| Scale {
                id: d.id.to_string(),
                name: d.name.to_string(),
                kind: ScaleKind::Domain,
                members: d.facets.iter().map(|f| f.to_string()).collect(),
                description: Some(d.description.to_string()),
            });
            let facets = FACETS.iter().map(|f| Scale {
                id: f.id.to_string(),
                name: f.name.to_string(),
                kind: ScaleKind::Facet,
                members: f.items.iter().map(|i| i.to_string()).collect(),
                description: Some(f.description.to_string()),
            });
            domains.chain(facets).collect()
        });
        &SCALES
    }

    fn tier_bands(&self) -> &TierBands {
        &PID5_BANDS
    }

    fn knows_item(&self, item_id: &str) -> bool {
        item_id
            .parse::<u16>()
            .is_ok_and(|id| catalog::item(id).is_some())
    }

    fn narrative_for(&self, scale_id: &str, mean: f64) -> String {
        narrative_for(scale_id, mean)
    }
}

/// Responses after item reversal. Only [`corrected_responses`] builds one,
/// so reversal cannot be applied twice.
#[derive(Debug, Clone, Default)]
pub struct CorrectedResponses(BTreeMap<u16, f64>);

impl CorrectedResponses {
    pub fn get(&self, item: u16) -> Option<f64> {
        self.0.get(&item).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reverse-score flagged items (`RESPONSE_MAX - v`) into a fresh map.
/// Items outside the catalog are dropped.
pub fn corrected_responses(answers: &Pid5Answers) -> CorrectedResponses {
    let corrected = answers
        .iter()
        .filter_map(|(item, value)| match catalog::is_reversed(item) {
            Some(true) => Some((item, RESPONSE_MAX - value)),
            Some(false) => Some((item, value)),
            None => {
                tracing::debug!(item, "ignoring response to unknown PID-5 item");
                None
            }
        })
        .collect();
    CorrectedResponses(corrected)
}

/// Score a (possibly partial) PID-5 answer map.
pub fn score(answers: &Pid5Answers) -> Pid5Result {
    let corrected = corrected_responses(answers);

    let facets: Vec<FacetScore> = FACETS
        .iter()
        .map(|def| score_facet(def, &corrected))
        .collect();

    let domains = DOMAINS
        .iter()
        .map(|def| {
            let means: Vec<f64> = def
                .facets
                .iter()
                .filter_map(|id| facets.iter().find(|f| f.id == *id))
                .map(|f| f.mean)
                .collect();
            DomainScore {
                id: def.id.to_string(),
                name: def.name.to_string(),
                mean: mean_of_means(&means),
                facets: def.facets.iter().map(|f| f.to_string()).collect(),
            }
        })
        .collect();

    Pid5Result {
        facets,
        domains,
        answered_items: corrected.len() as u32,
        total_items: u32::from(ITEM_COUNT),
    }
}

fn score_facet(def: &FacetDef, corrected: &CorrectedResponses) -> FacetScore {
    let (sum, answered) = def
        .items
        .iter()
        .filter_map(|item| corrected.get(*item))
        .fold((0.0, 0u32), |(sum, n), v| (sum + v, n + 1));

    FacetScore {
        id: def.id.to_string(),
        name: def.name.to_string(),
        sum,
        mean: mean_or_zero(sum, answered),
        answered,
    }
}

pub fn interpret_score(mean: f64) -> ScoreInterpretation {
    PID5_BANDS.interpret(mean)
}

/// Domains in descending mean order; ties keep catalog order.
pub fn ranked_domains(result: &Pid5Result) -> Vec<&DomainScore> {
    let mut ranked: Vec<&DomainScore> = result.domains.iter().collect();
    ranked.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    ranked
}

/// One targeted recommendation per domain at or above
/// [`RECOMMENDATION_THRESHOLD`], or a single normal-range entry, always
/// followed by the follow-up entry.
pub fn recommendations_for(result: &Pid5Result) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = ranked_domains(result)
        .into_iter()
        .filter(|d| d.mean >= RECOMMENDATION_THRESHOLD)
        .map(|d| narrative::domain_recommendation(&d.id, &d.name))
        .collect();

    if recommendations.is_empty() {
        recommendations.push(narrative::normal_range_recommendation());
    }
    recommendations.push(narrative::follow_up_recommendation());
    recommendations
}

pub fn interpret(result: &Pid5Result) -> Interpretation {
    let scales = result
        .domains
        .iter()
        .map(|d| scale_interpretation(&d.id, &d.name, ScaleKind::Domain, d.mean))
        .chain(
            result
                .facets
                .iter()
                .map(|f| scale_interpretation(&f.id, &f.name, ScaleKind::Facet, f.mean)),
        )
        .collect();

    let narratives = ranked_domains(result)
        .into_iter()
        .filter(|d| d.mean >= NARRATIVE_THRESHOLD)
        .map(|d| {
            let tier = PID5_BANDS.classify(d.mean);
            Narrative {
                identifier: d.id.clone(),
                name: d.name.clone(),
                level: tier.level(),
                tier,
                mean: d.mean,
                text: narrative_for(&d.id, d.mean),
            }
        })
        .collect();

    Interpretation {
        instrument: InstrumentKind::Pid5,
        scales,
        narratives,
        recommendations: recommendations_for(result),
        summary: summarize(result),
        balance_narrative: None,
    }
}

fn scale_interpretation(id: &str, name: &str, kind: ScaleKind, mean: f64) -> ScaleInterpretation {
    let tier = PID5_BANDS.classify(mean);
    ScaleInterpretation {
        identifier: id.to_string(),
        name: name.to_string(),
        kind,
        mean,
        tier,
        label: tier.label().to_string(),
        color: tier.color().to_string(),
    }
}

fn summarize(result: &Pid5Result) -> String {
    let notable: Vec<String> = ranked_domains(result)
        .into_iter()
        .filter(|d| d.mean >= NARRATIVE_THRESHOLD)
        .map(|d| format!("{} ({:.2}, {})", d.name, d.mean, PID5_BANDS.classify(d.mean)))
        .collect();

    let mut summary = if notable.is_empty() {
        "Il profilo PID-5 si colloca complessivamente entro i limiti della norma: nessun \
         dominio raggiunge la soglia di rilevanza clinica."
            .to_string()
    } else {
        format!("Domini di rilievo clinico: {}.", notable.join(", "))
    };

    let mut peaks: Vec<&FacetScore> = result
        .facets
        .iter()
        .filter(|f| PID5_BANDS.classify(f.mean) == SeverityTier::MoltoElevato)
        .collect();
    peaks.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    if !peaks.is_empty() {
        let names: Vec<&str> = peaks.iter().map(|f| f.name.as_str()).collect();
        summary.push_str(&format!(
            " Faccette con punteggio molto elevato: {}.",
            names.join(", ")
        ));
    }

    if result.answered_items < result.total_items {
        summary.push_str(&format!(
            " Risposte fornite: {} su {}.",
            result.answered_items, result.total_items
        ));
    }

    summary
}

/// Range and membership checks for a PID-5 answer map.
pub fn validate(answers: &Pid5Answers) -> Vec<ValidationError> {
    let entries: Vec<ResponseEntry> = answers
        .iter()
        .map(|(item, value)| ResponseEntry {
            item_id: item.to_string(),
            value,
        })
        .collect();
    Pid5.validate_responses(&entries)
}
