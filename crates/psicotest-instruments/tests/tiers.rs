use psicotest_core::models::interpretation::{QualitativeLevel, SeverityTier};
use psicotest_instruments::instruments::{pid5, sas};
use psicotest_instruments::tiers::{PID5_BANDS, SAS_BANDS};

#[test]
fn pid5_boundaries_are_inclusive_on_the_lower_bound() {
    let cases = [
        (0.0, SeverityTier::MoltoBasso),
        (0.49, SeverityTier::MoltoBasso),
        (0.5, SeverityTier::Basso),
        (0.99, SeverityTier::Basso),
        (1.0, SeverityTier::Medio),
        (1.4999, SeverityTier::Medio),
        (1.5, SeverityTier::Elevato),
        (1.9999, SeverityTier::Elevato),
        (2.0, SeverityTier::MoltoElevato),
        (3.0, SeverityTier::MoltoElevato),
    ];
    for (mean, expected) in cases {
        assert_eq!(PID5_BANDS.classify(mean), expected, "mean {mean}");
    }
}

#[test]
fn interpret_score_reports_label_and_color() {
    let top = pid5::interpret_score(2.0);
    assert_eq!(top.tier, SeverityTier::MoltoElevato);
    assert_eq!(top.label, "Molto Elevato");
    assert_eq!(top.color, SeverityTier::MoltoElevato.color());

    assert_eq!(pid5::interpret_score(0.5).label, "Basso");
    assert_eq!(pid5::interpret_score(1.9999).label, "Elevato");
}

#[test]
fn sas_bands_split_the_scale_in_fifths() {
    assert_eq!(SAS_BANDS.classify(0.79), SeverityTier::MoltoBasso);
    assert_eq!(SAS_BANDS.classify(0.8), SeverityTier::Basso);
    assert_eq!(SAS_BANDS.classify(2.4), SeverityTier::Elevato);
    assert_eq!(SAS_BANDS.classify(3.2), SeverityTier::MoltoElevato);
    assert_eq!(sas::interpret_score(4.0).label, "Molto Elevato");
}

#[test]
fn nan_never_reaches_a_high_tier() {
    assert_eq!(PID5_BANDS.classify(f64::NAN), SeverityTier::MoltoBasso);
}

#[test]
fn tiers_map_to_narrative_levels() {
    assert_eq!(SeverityTier::MoltoBasso.level(), QualitativeLevel::Basso);
    assert_eq!(SeverityTier::Basso.level(), QualitativeLevel::Basso);
    assert_eq!(SeverityTier::Medio.level(), QualitativeLevel::Moderato);
    assert_eq!(SeverityTier::Elevato.level(), QualitativeLevel::Elevato);
    assert_eq!(SeverityTier::MoltoElevato.level(), QualitativeLevel::MoltoElevato);
    assert_eq!(QualitativeLevel::MoltoElevato.label(), "molto elevato");
    assert!(SeverityTier::Elevato > SeverityTier::Medio);
}
