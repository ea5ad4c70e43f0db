use axum::Json;
use serde::Deserialize;

use psicotest_core::models::answers::{Pid5Answers, SasAnswers, TestAnswers};
use psicotest_core::models::report::TestReport;
use psicotest_instruments::{evaluate, validate_answers};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct EvaluateRequest<A> {
    #[serde(default)]
    pub subject: Option<String>,
    pub answers: A,
}

fn evaluate_checked(
    answers: TestAnswers,
    subject: Option<String>,
) -> Result<Json<TestReport>, ApiError> {
    let errors = validate_answers(&answers);
    if !errors.is_empty() {
        tracing::info!(
            instrument = answers.instrument().id(),
            invalid = errors.len(),
            "rejected answer set"
        );
        return Err(ApiError::Validation(errors));
    }
    Ok(Json(evaluate(answers, subject)))
}

pub async fn evaluate_pid5(
    Json(req): Json<EvaluateRequest<Pid5Answers>>,
) -> Result<Json<TestReport>, ApiError> {
    evaluate_checked(TestAnswers::Pid5(req.answers), req.subject)
}

pub async fn evaluate_sas(
    Json(req): Json<EvaluateRequest<SasAnswers>>,
) -> Result<Json<TestReport>, ApiError> {
    evaluate_checked(TestAnswers::Sas(req.answers), req.subject)
}
