mod common;

use psicotest_core::models::answers::Pid5Answers;
use psicotest_instruments::instruments::pid5::{self, corrected_responses};
use psicotest_instruments::scoring::mean_of_means;

use common::fill_facet;

#[test]
fn reversed_item_is_scored_as_max_minus_value() {
    let answers: Pid5Answers = [(7, 0.0)].into_iter().collect();
    let result = pid5::score(&answers);
    let risk = result.facet("risk_taking").unwrap();
    assert_eq!(risk.sum, 3.0);
    assert_eq!(risk.mean, 3.0);
    assert_eq!(risk.answered, 1);

    let answers: Pid5Answers = [(7, 3.0)].into_iter().collect();
    assert_eq!(pid5::score(&answers).facet("risk_taking").unwrap().mean, 0.0);
}

#[test]
fn reversal_is_applied_once() {
    let answers: Pid5Answers = [(7, 1.0), (3, 1.0)].into_iter().collect();
    let corrected = corrected_responses(&answers);
    assert_eq!(corrected.get(7), Some(2.0));
    assert_eq!(corrected.get(3), Some(1.0));

    // Scoring never touches the caller's map.
    let first = pid5::score(&answers);
    let second = pid5::score(&answers);
    assert_eq!(first, second);
    assert_eq!(answers.get(7), Some(1.0));
    assert_eq!(first.facet("risk_taking").unwrap().sum, 3.0);
}

#[test]
fn missing_items_shrink_the_denominator() {
    let answers: Pid5Answers = [(1, 3.0), (23, 1.0)].into_iter().collect();
    let anhedonia = pid5::score(&answers).facet("anhedonia").cloned().unwrap();
    assert_eq!(anhedonia.answered, 2);
    assert_eq!(anhedonia.sum, 4.0);
    assert_eq!(anhedonia.mean, 2.0);
}

#[test]
fn empty_answers_score_zero_everywhere() {
    let result = pid5::score(&Pid5Answers::new());
    assert_eq!(result.facets.len(), 25);
    assert_eq!(result.domains.len(), 5);
    assert!(result.facets.iter().all(|f| f.mean == 0.0 && f.answered == 0));
    assert!(result.domains.iter().all(|d| d.mean == 0.0));
    assert_eq!(result.answered_items, 0);
    assert_eq!(result.total_items, 220);
}

#[test]
fn unknown_items_are_ignored() {
    let answers: Pid5Answers = [(0, 3.0), (500, 2.0)].into_iter().collect();
    let result = pid5::score(&answers);
    assert_eq!(result.answered_items, 0);
    assert!(result.facets.iter().all(|f| f.answered == 0));
}

#[test]
fn domain_is_mean_of_facet_means() {
    let mut answers = Pid5Answers::new();
    fill_facet(&mut answers, "emotional_lability", 1.0); // 7 items
    answers.insert(79, 2.0); // a single anxiousness item
    fill_facet(&mut answers, "separation_insecurity", 3.0); // 7 items

    let result = pid5::score(&answers);
    assert_eq!(result.facet("emotional_lability").unwrap().mean, 1.0);
    assert_eq!(result.facet("anxiousness").unwrap().mean, 2.0);
    assert_eq!(result.facet("separation_insecurity").unwrap().mean, 3.0);
    assert_eq!(result.domain("negative_affect").unwrap().mean, 2.0);

    assert_eq!(mean_of_means(&[1.0, 2.0, 3.0]), 2.0);
    assert_eq!(mean_of_means(&[]), 0.0);
}

#[test]
fn unanswered_facets_pull_the_domain_towards_zero() {
    let mut answers = Pid5Answers::new();
    fill_facet(&mut answers, "emotional_lability", 3.0);
    let result = pid5::score(&answers);
    assert_eq!(result.domain("negative_affect").unwrap().mean, 1.0);
}

#[test]
fn domains_list_their_facets_in_catalog_order() {
    let result = pid5::score(&Pid5Answers::new());
    let detachment = result.domain("detachment").unwrap();
    assert_eq!(detachment.name, "Distacco");
    assert_eq!(
        detachment.facets,
        vec!["withdrawal", "anhedonia", "intimacy_avoidance"]
    );
}

#[test]
fn full_answer_sheet_counts_every_item() {
    let answers: Pid5Answers = (1..=220).map(|item| (item, 2.0)).collect();
    let result = pid5::score(&answers);
    assert_eq!(result.answered_items, 220);
    let answered: u32 = result.facets.iter().map(|f| f.answered).sum();
    assert_eq!(answered, 220);
}
