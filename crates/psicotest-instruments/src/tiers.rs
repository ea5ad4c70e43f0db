use psicotest_core::models::interpretation::{ScoreInterpretation, SeverityTier};
use serde::Serialize;

/// Lower bounds of the four upper tiers. Each band is the half-open interval
/// `[breakpoints[i - 1], breakpoints[i])`; the top band is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierBands {
    pub breakpoints: [f64; 4],
}

/// PID-5 bands on the 0–3 response scale.
pub const PID5_BANDS: TierBands = TierBands {
    breakpoints: [0.5, 1.0, 1.5, 2.0],
};

/// S-AS bands: fifths of the 0–4 rating scale.
pub const SAS_BANDS: TierBands = TierBands {
    breakpoints: [0.8, 1.6, 2.4, 3.2],
};

impl TierBands {
    pub fn classify(&self, mean: f64) -> SeverityTier {
        if mean.is_nan() {
            return SeverityTier::MoltoBasso;
        }
        let index = self
            .breakpoints
            .iter()
            .position(|bound| mean < *bound)
            .unwrap_or(self.breakpoints.len());
        SeverityTier::from_index(index)
    }

    pub fn interpret(&self, mean: f64) -> ScoreInterpretation {
        self.classify(mean).into()
    }
}
