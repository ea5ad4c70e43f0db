mod common;

use psicotest_core::models::answers::{ForcedChoice, Role, SasAnswers};
use psicotest_core::models::orientation::OrientationIntensity;
use psicotest_instruments::instruments::sas::orientation::{
    analyze_orientation, intensity, narrate_orientation, summarize_orientation,
    INSUFFICIENT_DATA,
};

use common::choices;

const CLOSING_MARKER: &str = "migliore regolazione emotiva";

#[test]
fn all_goal_choices_read_as_strong_goal_orientation() {
    let answers = choices(20, 0);
    let tally = analyze_orientation(&answers.part2);
    assert_eq!(tally.goal_count, 20);
    assert_eq!(tally.anti_goal_count, 0);
    assert_eq!(tally.goal_total, 20.0);

    let narrative = narrate_orientation(&tally);
    assert!(narrative.contains("marcatamente prevalente verso gli Scopi"));
    assert!(narrative.contains("(100% delle scelte)"));
    assert!(narrative.contains(CLOSING_MARKER));
    assert_eq!(intensity(&tally), OrientationIntensity::Strong);
}

#[test]
fn seventy_percent_is_still_mild() {
    let tally = analyze_orientation(&choices(14, 6).part2);
    let narrative = narrate_orientation(&tally);
    assert!(narrative.contains("moderatamente prevalente verso gli Scopi"));
    assert!(narrative.contains("(70% delle scelte)"));
    assert_eq!(intensity(&tally), OrientationIntensity::Mild);
}

#[test]
fn anti_goal_dominance_is_reported() {
    let tally = analyze_orientation(&choices(5, 15).part2);
    let narrative = narrate_orientation(&tally);
    assert!(narrative.contains("marcatamente prevalente verso gli Antiscopi"));
    assert!(narrative.contains("(75% delle scelte)"));
}

#[test]
fn equal_counts_read_as_balanced() {
    let summary = summarize_orientation(&choices(10, 10).part2);
    assert_eq!(summary.intensity, OrientationIntensity::Balanced);
    assert_eq!(summary.dominant, None);
    assert_eq!(summary.goal_percentage, 50);
    assert!(summary.narrative.contains("equamente distribuite"));
    assert!(summary.narrative.contains(CLOSING_MARKER));
}

#[test]
fn no_choices_give_the_insufficient_data_sentence_only() {
    let summary = summarize_orientation(&SasAnswers::default().part2);
    assert_eq!(summary.narrative, INSUFFICIENT_DATA);
    assert_eq!(summary.intensity, OrientationIntensity::Insufficient);
    assert!(!summary.narrative.contains(CLOSING_MARKER));
}

#[test]
fn totals_use_the_recorded_choice_score() {
    let mut answers = SasAnswers::default();
    answers.part2.insert(
        1,
        ForcedChoice {
            role: Role::Antiscopo,
            score: 2.0,
        },
    );
    answers.choose(2, Role::Antiscopo);
    let tally = analyze_orientation(&answers.part2);
    assert_eq!(tally.anti_goal_count, 2);
    assert_eq!(tally.anti_goal_total, 3.0);
}
