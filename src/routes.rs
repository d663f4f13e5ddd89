//! HTTP surface — the `/clean-email` endpoint.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::error::{Error, Result};
use crate::extract::extract_email_body;
use crate::sanitizer::Sanitizer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub sanitizer: Arc<Sanitizer>,
}

/// Build the Axum router for the service.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/clean-email", post(clean_email))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: "mail-scrub",
    })
}

// ── Clean email ─────────────────────────────────────────────────────────

/// POST /clean-email
///
/// Accepts either a JSON payload with an `emailBody`/`email_body`/`body`
/// field or a raw text body, and returns the sanitized text as
/// `text/plain`. Extraction failures come back as 400; a panic inside the
/// sanitizer is caught and reported as 500 with the failure detail.
async fn clean_email(State(state): State<AppState>, body: Bytes) -> Result<String> {
    let email_body = extract_email_body(&body).inspect_err(|e| {
        info!(error = %e, "Rejecting request");
    })?;

    catch_unwind(AssertUnwindSafe(|| state.sanitizer.clean(&email_body))).map_err(|panic| {
        let detail = panic_detail(panic.as_ref());
        error!(error = %detail, "Sanitizer failed");
        Error::Processing(detail)
    })
}

/// Best-effort extraction of a panic payload's message.
fn panic_detail(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_detail_reads_str_payloads() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_detail(payload.as_ref()), "boom");
    }

    #[test]
    fn panic_detail_reads_string_payloads() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom".to_string());
        assert_eq!(panic_detail(payload.as_ref()), "boom");
    }

    #[test]
    fn panic_detail_tolerates_other_payloads() {
        let payload: Box<dyn std::any::Any + Send> = Box::new(42u32);
        assert_eq!(panic_detail(payload.as_ref()), "unknown panic");
    }
}
