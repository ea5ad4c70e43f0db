use psicotest_core::models::answers::{
    ForcedChoice, InstrumentKind, ItemKey, Pid5Answers, Role, SasAnswers, TestAnswers,
};

#[test]
fn item_key_parses_goal_and_anti_goal_suffixes() {
    let goal: ItemKey = "5S".parse().unwrap();
    assert_eq!(goal, ItemKey::new(5, Role::Scopo));

    let anti: ItemKey = "12AS".parse().unwrap();
    assert_eq!(anti, ItemKey::new(12, Role::Antiscopo));
}

#[test]
fn item_key_display_is_canonical() {
    assert_eq!(ItemKey::new(4, Role::Antiscopo).to_string(), "4AS");
    assert_eq!(ItemKey::new(20, Role::Scopo).to_string(), "20S");
}

#[test]
fn item_key_rejects_malformed_text() {
    for bad in ["", "S", "AS", "5", "5X", "x5S", "5 S", "-1S", "300S", "05S", "007AS"] {
        assert!(bad.parse::<ItemKey>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn forced_choice_reads_type_field_and_defaults_score() {
    let choice: ForcedChoice = serde_json::from_str(r#"{"type":"AS"}"#).unwrap();
    assert_eq!(choice.role, Role::Antiscopo);
    assert_eq!(choice.score, 1.0);

    let weighted: ForcedChoice = serde_json::from_str(r#"{"type":"S","score":2}"#).unwrap();
    assert_eq!(weighted.role, Role::Scopo);
    assert_eq!(weighted.score, 2.0);
}

#[test]
fn sas_answers_accept_missing_parts() {
    let answers: SasAnswers = serde_json::from_str("{}").unwrap();
    assert!(answers.is_empty());

    let answers: SasAnswers =
        serde_json::from_str(r#"{"part1":{"1S":3,"1AS":1},"part2":{"1":{"type":"S","score":1}}}"#)
            .unwrap();
    assert_eq!(answers.rating(&ItemKey::new(1, Role::Scopo)), Some(3.0));
    assert_eq!(answers.rating(&ItemKey::new(1, Role::Antiscopo)), Some(1.0));
    assert_eq!(answers.part2.get(&1).map(|c| c.role), Some(Role::Scopo));
}

#[test]
fn pid5_answers_use_numeric_keys() {
    let answers: Pid5Answers = serde_json::from_str(r#"{"1":2,"220":0}"#).unwrap();
    assert_eq!(answers.get(1), Some(2.0));
    assert_eq!(answers.get(220), Some(0.0));
    assert_eq!(answers.get(2), None);

    let json = serde_json::to_string(&answers).unwrap();
    assert_eq!(json, r#"{"1":2.0,"220":0.0}"#);
}

#[test]
fn test_answers_know_their_instrument() {
    let pid5 = TestAnswers::Pid5(Pid5Answers::new());
    let sas = TestAnswers::Sas(SasAnswers::default());
    assert_eq!(pid5.instrument(), InstrumentKind::Pid5);
    assert_eq!(sas.instrument(), InstrumentKind::Sas);

    assert_eq!("pid5".parse::<InstrumentKind>().unwrap(), InstrumentKind::Pid5);
    assert!("mmpi".parse::<InstrumentKind>().is_err());
}
