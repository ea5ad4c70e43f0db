#![allow(dead_code)]

use psicotest_core::models::answers::{ItemKey, Pid5Answers, Role, SasAnswers};
use psicotest_instruments::instruments::pid5::catalog::{self as pid5_catalog, RESPONSE_MAX};
use psicotest_instruments::instruments::sas::catalog as sas_catalog;

/// Answer every item of a PID-5 facet so that its reverse-corrected value
/// equals `target`.
pub fn fill_facet(answers: &mut Pid5Answers, facet_id: &str, target: f64) {
    let facet = pid5_catalog::facet(facet_id).expect("facet exists");
    for item in facet.items {
        let raw = if pid5_catalog::is_reversed(*item) == Some(true) {
            RESPONSE_MAX - target
        } else {
            target
        };
        answers.insert(*item, raw);
    }
}

pub fn fill_domain(answers: &mut Pid5Answers, domain_id: &str, target: f64) {
    let domain = pid5_catalog::domain(domain_id).expect("domain exists");
    for facet in domain.facets {
        fill_facet(answers, facet, target);
    }
}

/// Rate every scored key of an S-AS factor with `value`.
pub fn fill_factor(answers: &mut SasAnswers, factor_id: &str, value: f64) {
    let factor = sas_catalog::factor(factor_id).expect("factor exists");
    for key in factor.items {
        if !sas_catalog::is_excluded(key) {
            answers.set_rating(*key, value);
        }
    }
}

/// Part I with every goal statement at `goal` and every anti-goal at `anti`.
pub fn uniform_part1(goal: f64, anti: f64) -> SasAnswers {
    let mut answers = SasAnswers::default();
    for pair in 1..=sas_catalog::PAIR_COUNT {
        answers.set_rating(ItemKey::new(pair, Role::Scopo), goal);
        answers.set_rating(ItemKey::new(pair, Role::Antiscopo), anti);
    }
    answers
}

pub fn choices(goal: u8, anti: u8) -> SasAnswers {
    let mut answers = SasAnswers::default();
    for pair in 1..=goal {
        answers.choose(pair, Role::Scopo);
    }
    for pair in goal + 1..=goal + anti {
        answers.choose(pair, Role::Antiscopo);
    }
    answers
}
