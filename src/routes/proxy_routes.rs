//! Proxy del mismo origen hacia el servicio backend
//!
//! Reenvía lecturas (GET, query string) y escrituras (POST, cuerpo JSON)
//! añadiendo la clave secreta del servidor. La respuesta del backend se
//! devuelve tal cual, con su status. Sin reintentos.

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::client::{ACTION_PARAM, API_KEY_PARAM};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError, AppResult};

pub fn create_proxy_router() -> Router<AppState> {
    Router::new().route("/", get(proxy_get).post(proxy_post))
}

/// GET /api/proxy?action=...&... - lectura
async fn proxy_get(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    let action = params
        .iter()
        .find(|(key, _)| key == ACTION_PARAM)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
        .ok_or(AppError::MissingAction)?;

    let url = build_get_url(state.backend_url(), state.backend_api_key(), action, &params)?;

    tracing::info!("🔀 Proxy GET action={}", action);
    let response = state.http_client.get(url).send().await?;
    relay(response).await
}

/// POST /api/proxy - escritura. El cuerpo se lee como JSON sea cual sea
/// el `Content-Type`.
async fn proxy_post(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    let body: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("⚠️ Invalid proxy body: {}", e);
        bad_request_error("Request body must be a JSON object")
    })?;

    let body = build_post_body(body, state.backend_api_key())?;
    let action = body
        .get(ACTION_PARAM)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    tracing::info!("🔀 Proxy POST action={}", action);
    let response = state
        .http_client
        .post(state.backend_url())
        .json(&body)
        .send()
        .await?;
    relay(response).await
}

/// URL de lectura: `apiKey`, `action` y el resto de parámetros del llamante.
/// Un `apiKey` enviado por el llamante se descarta.
pub fn build_get_url(
    backend_url: &str,
    api_key: &str,
    action: &str,
    params: &[(String, String)],
) -> AppResult<reqwest::Url> {
    let mut url = reqwest::Url::parse(backend_url)
        .map_err(|e| AppError::InvalidBackendUrl(e.to_string()))?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair(API_KEY_PARAM, api_key);
        query.append_pair(ACTION_PARAM, action);
        for (key, value) in params {
            if key != ACTION_PARAM && key != API_KEY_PARAM {
                query.append_pair(key, value);
            }
        }
    }

    Ok(url)
}

/// Cuerpo de escritura con la clave del servidor
pub fn build_post_body(body: Value, api_key: &str) -> AppResult<serde_json::Map<String, Value>> {
    let Value::Object(mut body) = body else {
        return Err(bad_request_error("Request body must be a JSON object"));
    };

    match body.get(ACTION_PARAM) {
        Some(Value::String(action)) if !action.is_empty() => {}
        _ => return Err(AppError::MissingAction),
    }

    body.insert(API_KEY_PARAM.to_string(), Value::String(api_key.to_string()));
    Ok(body)
}

/// Devolver la respuesta del backend sin tocarla
async fn relay(response: reqwest::Response) -> AppResult<Response> {
    let status = response.status();
    let bytes = response.bytes().await?;
    let body: Value = serde_json::from_slice(&bytes)?;

    if !status.is_success() {
        tracing::warn!("⚠️ Backend respondió HTTP {}", status);
    }

    Ok((status, Json(body)).into_response())
}
