use std::sync::Arc;

use psicotest_export::styles::DocumentStyles;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone, Default)]
pub struct AppState {
    pub styles: Arc<DocumentStyles>,
}
