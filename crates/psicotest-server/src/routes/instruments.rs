use axum::extract::{Path, Query};
use axum::Json;
use serde::{Deserialize, Serialize};

use psicotest_core::models::interpretation::ScoreInterpretation;
use psicotest_instruments::scoring::{Scale, ScoreRange};
use psicotest_instruments::tiers::TierBands;
use psicotest_instruments::{
    all_instruments, describe_scale, get_instrument, Instrument, ScaleReading,
};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    response_range: ScoreRange,
    tier_bands: TierBands,
    scales: Vec<Scale>,
}

#[derive(Deserialize)]
pub struct MeanQuery {
    pub mean: f64,
}

impl MeanQuery {
    fn finite(&self) -> Result<f64, ApiError> {
        if self.mean.is_finite() {
            Ok(self.mean)
        } else {
            Err(ApiError::BadRequest(format!(
                "mean must be a finite number, got {}",
                self.mean
            )))
        }
    }
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

fn find_instrument(id: &str) -> Result<Box<dyn Instrument>, ApiError> {
    get_instrument(id).ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = find_instrument(&id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        response_range: instrument.response_range(),
        tier_bands: *instrument.tier_bands(),
        scales: instrument.scales().to_vec(),
    }))
}

/// Severity tier of a bare mean on the instrument's scale.
pub async fn interpret_tier(
    Path(id): Path<String>,
    Query(query): Query<MeanQuery>,
) -> Result<Json<ScoreInterpretation>, ApiError> {
    let mean = query.finite()?;
    let instrument = find_instrument(&id)?;
    Ok(Json(instrument.interpret_score(mean)))
}

pub async fn read_scale(
    Path((id, scale_id)): Path<(String, String)>,
    Query(query): Query<MeanQuery>,
) -> Result<Json<ScaleReading>, ApiError> {
    let mean = query.finite()?;
    Ok(Json(describe_scale(&id, &scale_id, mean)?))
}
