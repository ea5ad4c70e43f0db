//! Goal vs. avoidance orientation from the Part-II forced choices,
//! independent of the weighted Part-I scores.

use std::collections::BTreeMap;

use psicotest_core::models::answers::{ForcedChoice, Role};
use psicotest_core::models::orientation::{
    OrientationIntensity, OrientationSummary, OrientationTally,
};

/// Share of selections above which the prevailing orientation is strong.
pub const STRONG_ORIENTATION_PERCENT: u32 = 70;

pub const INSUFFICIENT_DATA: &str = "Non sono disponibili risposte sufficienti nella seconda \
    parte del questionario per valutare l'orientamento prevalente.";

const CLOSING: &str = "In generale, un orientamento prevalente verso gli scopi si associa a \
    una migliore regolazione emotiva, mentre la prevalenza degli antiscopi tende ad \
    accompagnarsi a una maggiore vulnerabilità all'ansia e allo stress.";

pub fn analyze_orientation(part2: &BTreeMap<u8, ForcedChoice>) -> OrientationTally {
    let mut tally = OrientationTally::default();
    for choice in part2.values() {
        tally.record(choice.role, choice.score);
    }
    tally
}

pub fn intensity(tally: &OrientationTally) -> OrientationIntensity {
    if tally.total_selections() == 0 {
        return OrientationIntensity::Insufficient;
    }
    match tally.dominant() {
        Some(role) if tally.percentage(role) > STRONG_ORIENTATION_PERCENT => {
            OrientationIntensity::Strong
        }
        Some(_) => OrientationIntensity::Mild,
        None => OrientationIntensity::Balanced,
    }
}

pub fn narrate_orientation(tally: &OrientationTally) -> String {
    if tally.total_selections() == 0 {
        return INSUFFICIENT_DATA.to_string();
    }

    let opening = match tally.dominant() {
        Some(role) => {
            let percentage = tally.percentage(role);
            let qualifier = if percentage > STRONG_ORIENTATION_PERCENT {
                "marcatamente"
            } else {
                "moderatamente"
            };
            format!(
                "Dalle scelte effettuate emerge un orientamento {qualifier} prevalente verso \
                 gli {} ({percentage}% delle scelte). {}",
                role.display_name(),
                role_tendency(role)
            )
        }
        None => "Le scelte risultano equamente distribuite tra Scopi e Antiscopi (50% \
                 ciascuno), indicando un orientamento bilanciato tra ricerca di obiettivi ed \
                 evitamento di esiti temuti."
            .to_string(),
    };

    format!("{opening} {CLOSING}")
}

fn role_tendency(role: Role) -> &'static str {
    match role {
        Role::Scopo => {
            "La persona tende a organizzare il proprio comportamento attorno al \
             raggiungimento di obiettivi desiderati."
        }
        Role::Antiscopo => {
            "La persona tende a organizzare il proprio comportamento attorno all'evitamento \
             di esiti temuti."
        }
    }
}

pub fn summarize_orientation(part2: &BTreeMap<u8, ForcedChoice>) -> OrientationSummary {
    let tally = analyze_orientation(part2);
    OrientationSummary {
        goal_percentage: tally.percentage(Role::Scopo),
        anti_goal_percentage: tally.percentage(Role::Antiscopo),
        dominant: tally.dominant(),
        intensity: intensity(&tally),
        narrative: narrate_orientation(&tally),
        tally,
    }
}
