use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::{ErrorBody, RollDiceRequest, VerifyRollRequest};
use crate::error::RollError;
use crate::seed::SeedSource;

const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Shared handler state. Holds no per-roll data.
#[derive(Clone)]
pub struct AppState {
    seeds: Arc<dyn SeedSource>,
}

impl AppState {
    pub fn new(seeds: Arc<dyn SeedSource>) -> Self {
        Self { seeds }
    }
}

pub(crate) async fn roll_dice(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RollDiceRequest::from_body(content_type(&headers), &body);
    match request.execute(state.seeds.as_ref()) {
        Ok(roll) => (StatusCode::OK, Json(roll)).into_response(),
        Err(err) => reject("/roll-dice", err),
    }
}

pub(crate) async fn verify_roll(headers: HeaderMap, body: Bytes) -> Response {
    let request = VerifyRollRequest::from_body(content_type(&headers), &body);
    match request.execute() {
        Ok(verification) => (StatusCode::OK, Json(verification)).into_response(),
        Err(err) => reject("/verify-roll", err),
    }
}

fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
}

fn reject(route: &'static str, err: RollError) -> Response {
    tracing::debug!(route, error = %err, "rejected request");
    (StatusCode::BAD_REQUEST, Json(ErrorBody::from(err))).into_response()
}

/// Answer a CORS preflight, echoing the requested headers.
pub(crate) async fn preflight(headers: HeaderMap) -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    let out = response.headers_mut();
    out.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    if let Some(requested) = headers.get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
        out.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
        out.append(
            header::VARY,
            HeaderValue::from_static("Access-Control-Request-Headers"),
        );
    }
    out.insert(header::CONTENT_LENGTH, HeaderValue::from_static("0"));
    response
}

pub(crate) async fn allow_any_origin(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}
