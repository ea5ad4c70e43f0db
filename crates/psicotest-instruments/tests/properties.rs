use proptest::prelude::*;

use psicotest_core::models::answers::{Pid5Answers, SasAnswers};
use psicotest_instruments::instruments::pid5::{self, catalog as pid5_catalog};
use psicotest_instruments::instruments::sas::{self, catalog as sas_catalog};

fn pid5_answers() -> impl Strategy<Value = Pid5Answers> {
    proptest::collection::btree_map(1u16..=pid5_catalog::ITEM_COUNT, 0u8..=3, 0..=220)
        .prop_map(|map| map.into_iter().map(|(k, v)| (k, f64::from(v))).collect())
}

fn sas_part1() -> impl Strategy<Value = SasAnswers> {
    proptest::collection::vec(0u8..=4, 40).prop_map(|ratings| {
        let mut answers = SasAnswers::default();
        for (key, rating) in sas_catalog::all_keys().zip(ratings) {
            answers.set_rating(key, f64::from(rating));
        }
        answers
    })
}

proptest! {
    #[test]
    fn pid5_means_stay_on_the_response_scale(answers in pid5_answers()) {
        let result = pid5::score(&answers);
        for facet in &result.facets {
            prop_assert!((0.0..=3.0).contains(&facet.mean), "{} = {}", facet.id, facet.mean);
        }
        for domain in &result.domains {
            prop_assert!((0.0..=3.0).contains(&domain.mean), "{} = {}", domain.id, domain.mean);
        }
        prop_assert_eq!(result.answered_items as usize, answers.len());
    }

    #[test]
    fn reversed_items_are_corrected_exactly_once(item in 1u16..=220, value in 0u8..=3) {
        let raw = f64::from(value);
        let answers: Pid5Answers = [(item, raw)].into_iter().collect();
        let corrected = pid5::corrected_responses(&answers);
        let expected = if pid5_catalog::is_reversed(item) == Some(true) { 3.0 - raw } else { raw };
        prop_assert_eq!(corrected.get(item), Some(expected));
    }

    #[test]
    fn excluded_keys_never_move_factor_means(
        answers in sas_part1(),
        replacement in proptest::collection::vec(0u8..=4, 6),
    ) {
        let baseline = sas::score(&answers);

        let mut perturbed = answers.clone();
        for (key, value) in sas_catalog::EXCLUDED_KEYS.iter().zip(replacement) {
            perturbed.set_rating(*key, f64::from(value));
        }
        let rescored = sas::score(&perturbed);

        prop_assert_eq!(baseline.factors, rescored.factors);
    }

    #[test]
    fn sas_factor_means_stay_on_the_rating_scale(answers in sas_part1()) {
        let result = sas::score(&answers);
        for factor in &result.factors {
            prop_assert!((0.0..=4.0).contains(&factor.mean), "{} = {}", factor.id, factor.mean);
        }
        prop_assert_eq!(result.balance, result.scopo.mean - result.antiscopo.mean);
    }
}
