use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use psicotest_core::models::report::TestReport;
use psicotest_export::render::{render_html, render_markdown};

use crate::error::ApiError;
use crate::state::AppState;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Html,
    Docx,
}

#[derive(Deserialize)]
pub struct RenderQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

/// Render an evaluated report to Markdown, HTML or DOCX.
pub async fn render_report(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
    Json(report): Json<TestReport>,
) -> Result<Response, ApiError> {
    let response = match query.format {
        ExportFormat::Markdown => (
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            render_markdown(&report)?,
        )
            .into_response(),
        ExportFormat::Html => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            render_html(&report)?,
        )
            .into_response(),
        ExportFormat::Docx => {
            let bytes = psicotest_export::export_docx(&report, &state.styles)?;
            (
                [
                    (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"report-{}.docx\"", report.id),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
    };

    tracing::info!(report_id = %report.id, format = ?query.format, "report exported");
    Ok(response)
}
