mod common;

use psicotest_core::models::answers::SasAnswers;
use psicotest_core::models::interpretation::{QualitativeLevel, RecommendationKind};
use psicotest_instruments::instruments::sas;

use common::{fill_factor, uniform_part1};

#[test]
fn empty_result_degrades_to_generic_output() {
    let interpretation = sas::interpret(&sas::score(&SasAnswers::default()));
    assert!(interpretation.narratives.is_empty());
    let kinds: Vec<_> = interpretation
        .recommendations
        .iter()
        .map(|r| r.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![RecommendationKind::NormalRange, RecommendationKind::FollowUp]
    );
    assert!(interpretation
        .balance_narrative
        .as_deref()
        .is_some_and(|text| text.contains("nullo")));
    assert!(interpretation.summary.contains("Nessun fattore"));
}

#[test]
fn top_three_factors_drive_narratives_and_recommendations() {
    let mut answers = SasAnswers::default();
    fill_factor(&mut answers, "realizzazione", 4.0);
    fill_factor(&mut answers, "evitamento_fallimento", 3.0);
    fill_factor(&mut answers, "appartenenza", 2.0);
    fill_factor(&mut answers, "autonomia", 1.0);

    let interpretation = sas::interpret(&sas::score(&answers));

    let narrated: Vec<(&str, QualitativeLevel)> = interpretation
        .narratives
        .iter()
        .map(|n| (n.identifier.as_str(), n.level))
        .collect();
    assert_eq!(
        narrated,
        vec![
            ("realizzazione", QualitativeLevel::MoltoElevato),
            ("evitamento_fallimento", QualitativeLevel::Elevato),
            ("appartenenza", QualitativeLevel::Moderato),
        ]
    );

    let recommended: Vec<Option<&str>> = interpretation
        .recommendations
        .iter()
        .map(|r| r.identifier.as_deref())
        .collect();
    assert_eq!(
        recommended,
        vec![Some("realizzazione"), Some("evitamento_fallimento"), None]
    );
    assert_eq!(
        interpretation.recommendations.last().map(|r| r.kind),
        Some(RecommendationKind::FollowUp)
    );
    assert!(interpretation.summary.contains("Fattori predominanti"));
}

#[test]
fn ties_keep_catalog_order() {
    let mut answers = SasAnswers::default();
    fill_factor(&mut answers, "sicurezza", 2.0);
    fill_factor(&mut answers, "realizzazione", 2.0);
    fill_factor(&mut answers, "autonomia", 3.0);

    let result = sas::score(&answers);
    let scored: Vec<&str> = result
        .factors
        .iter()
        .filter(|f| f.mean > 0.0)
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(scored, vec!["realizzazione", "autonomia", "sicurezza"]);

    let top: Vec<&str> = sas::ranked_factors(&result)
        .into_iter()
        .take(3)
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(top, vec!["autonomia", "realizzazione", "sicurezza"]);
}

#[test]
fn factors_below_threshold_get_generic_recommendation() {
    let interpretation = sas::interpret(&sas::score(&uniform_part1(2.0, 2.0)));
    assert_eq!(interpretation.narratives.len(), 3);
    assert_eq!(interpretation.recommendations.len(), 2);
    assert_eq!(
        interpretation.recommendations[0].kind,
        RecommendationKind::NormalRange
    );
}

#[test]
fn balance_narrative_reflects_sign() {
    let positive = sas::interpret(&sas::score(&uniform_part1(4.0, 0.0)));
    assert!(positive
        .balance_narrative
        .as_deref()
        .is_some_and(|t| t.contains("positivo (+4)")));

    let negative = sas::interpret(&sas::score(&uniform_part1(0.0, 4.0)));
    assert!(negative
        .balance_narrative
        .as_deref()
        .is_some_and(|t| t.contains("negativo (-4)")));
}

#[test]
fn unknown_factor_falls_back_to_generic_text() {
    assert_eq!(
        sas::narrative_for("mystery", 3.5),
        "Il punteggio in mystery si colloca su un livello molto elevato."
    );
    let low = sas::narrative_for("autonomia", 0.4);
    assert!(low.starts_with("La ricerca di autonomia è poco accentuata"));
}

#[test]
fn low_top_factors_get_authored_text() {
    let mut answers = SasAnswers::default();
    fill_factor(&mut answers, "realizzazione", 1.0);

    let interpretation = sas::interpret(&sas::score(&answers));
    assert_eq!(interpretation.narratives.len(), 1);

    let narrative = &interpretation.narratives[0];
    assert_eq!(narrative.identifier, "realizzazione");
    assert_eq!(narrative.level, QualitativeLevel::Basso);
    assert!(narrative.text.starts_with("Il desiderio di realizzarsi occupa un posto marginale"));
    assert!(!narrative.text.contains("si colloca su un livello"));
}
