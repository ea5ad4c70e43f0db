use psicotest_core::models::answers::Role;
use psicotest_core::models::orientation::OrientationTally;

#[test]
fn empty_tally_has_no_dominant_side() {
    let tally = OrientationTally::default();
    assert_eq!(tally.total_selections(), 0);
    assert_eq!(tally.percentage(Role::Scopo), 0);
    assert_eq!(tally.dominant(), None);
}

#[test]
fn percentages_round_half_up() {
    let mut tally = OrientationTally::default();
    for _ in 0..13 {
        tally.record(Role::Scopo, 1.0);
    }
    for _ in 0..7 {
        tally.record(Role::Antiscopo, 1.0);
    }
    assert_eq!(tally.percentage(Role::Scopo), 65);
    assert_eq!(tally.percentage(Role::Antiscopo), 35);
    assert_eq!(tally.dominant(), Some(Role::Scopo));
    assert_eq!(tally.goal_total, 13.0);

    let mut thirds = OrientationTally::default();
    thirds.record(Role::Scopo, 1.0);
    thirds.record(Role::Antiscopo, 1.0);
    thirds.record(Role::Antiscopo, 1.0);
    assert_eq!(thirds.percentage(Role::Antiscopo), 67);
    assert_eq!(thirds.percentage(Role::Scopo), 33);
}
