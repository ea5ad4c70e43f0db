//! psicotest-server
//!
//! Stateless HTTP surface over the scoring engine and the report exporters.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instrument structure (public catalog data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{id}/tiers",
            get(routes::instruments::interpret_tier),
        )
        .route(
            "/instruments/{id}/scales/{scale_id}",
            get(routes::instruments::read_scale),
        )
        // Scoring
        .route("/pid5/evaluate", post(routes::evaluate::evaluate_pid5))
        .route("/sas/evaluate", post(routes::evaluate::evaluate_sas))
        .route("/reports/render", post(routes::reports::render_report))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::audit::audit_log)),
        )
        .with_state(state)
}
