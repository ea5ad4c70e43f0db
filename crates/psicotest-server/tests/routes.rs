use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use psicotest_core::models::report::TestReport;
use psicotest_server::app;
use psicotest_server::state::AppState;

fn router() -> Router {
    app(AppState::default())
}

async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router().oneshot(request).await.expect("infallible");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, body.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let (status, body) = send(request).await;
    (status, serde_json::from_slice(&body).expect("json body"))
}

async fn post_json(uri: &str, payload: &Value) -> (StatusCode, Vec<u8>) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request");
    send(request).await
}

fn full_sas_payload() -> Value {
    let mut part1 = serde_json::Map::new();
    let mut part2 = serde_json::Map::new();
    for pair in 1..=20 {
        part1.insert(format!("{pair}S"), json!(4));
        part1.insert(format!("{pair}AS"), json!(0));
        part2.insert(pair.to_string(), json!({ "type": "S" }));
    }
    json!({ "subject": "Paziente C", "answers": { "part1": part1, "part2": part2 } })
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn instruments_are_listed_with_their_scales() {
    let (status, body) = get_json("/instruments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "pid5");
    assert_eq!(body[1]["id"], "sas");

    let (status, body) = get_json("/instruments/sas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scales"].as_array().map(Vec::len), Some(8));
    assert_eq!(body["response_range"]["max"], 4.0);

    let (status, body) = get_json("/instruments/mmpi").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().is_some_and(|e| e.contains("mmpi")));
}

#[tokio::test]
async fn tier_lookup_uses_instrument_bands() {
    let (status, body) = get_json("/instruments/pid5/tiers?mean=1.5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tier"], "elevato");
    assert_eq!(body["label"], "Elevato");

    let (status, _) = get_json("/instruments/pid5/tiers?mean=NaN").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn scale_reading_includes_narrative() {
    let (status, body) = get_json("/instruments/pid5/scales/psychoticism?mean=2.4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["interpretation"]["tier"], "molto_elevato");
    assert!(body["narrative"].as_str().is_some_and(|n| !n.is_empty()));

    let (status, _) = get_json("/instruments/pid5/scales/nope?mean=1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_pid5_answers_evaluate_to_baseline_report() {
    let (status, body) = post_json("/pid5/evaluate", &json!({ "answers": {} })).await;
    assert_eq!(status, StatusCode::OK);

    let report: TestReport = serde_json::from_slice(&body).expect("report");
    assert!(report.subject.is_none());
    assert!(report.orientation.is_none());
    assert_eq!(report.interpretation.recommendations.len(), 2);
}

#[tokio::test]
async fn out_of_range_answers_are_rejected_with_details() {
    let payload = json!({ "answers": { "1": 7, "2": 1, "300": 0 } });
    let (status, body) = post_json("/pid5/evaluate", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_slice(&body).expect("json");
    let ids: Vec<&str> = body["details"]
        .as_array()
        .expect("details")
        .iter()
        .filter_map(|d| d["item_id"].as_str())
        .collect();
    assert_eq!(ids, ["1", "300"]);
}

#[tokio::test]
async fn sas_evaluation_includes_orientation() {
    let (status, body) = post_json("/sas/evaluate", &full_sas_payload()).await;
    assert_eq!(status, StatusCode::OK);

    let report: TestReport = serde_json::from_slice(&body).expect("report");
    assert_eq!(report.subject.as_deref(), Some("Paziente C"));
    let orientation = report.orientation.expect("orientation");
    assert_eq!(orientation.goal_percentage, 100);
    assert!(orientation.narrative.contains("marcatamente prevalente verso gli Scopi"));
}

#[tokio::test]
async fn evaluated_reports_render_in_every_format() {
    let (_, body) = post_json("/sas/evaluate", &full_sas_payload()).await;
    let report: Value = serde_json::from_slice(&body).expect("report");

    let (status, markdown) = post_json("/reports/render", &report).await;
    assert_eq!(status, StatusCode::OK);
    let markdown = String::from_utf8(markdown).expect("utf8");
    assert!(markdown.starts_with("# Report S-AS"));

    let (status, html) = post_json("/reports/render?format=html", &report).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(html).expect("utf8").contains("<h1>Report S-AS</h1>"));

    let (status, docx) = post_json("/reports/render?format=docx", &report).await;
    assert_eq!(status, StatusCode::OK);
    assert!(docx.starts_with(b"PK"));
}
