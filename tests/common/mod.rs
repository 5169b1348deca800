//! Backend falso para los tests de integración
//!
//! Levanta un servidor axum en 127.0.0.1:0 que imita el contrato de
//! acciones del servicio backend y registra cada petición recibida.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};

use car_booking::{create_app, AppState, EnvironmentConfig};

pub const BACKEND_SECRET: &str = "server-secret";
pub const PUBLIC_KEY: &str = "public-key";
pub const SAMPLE_PDF: &[u8] = b"%PDF-1.4\n% booking confirmation\n%%EOF\n";

#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Get(Vec<(String, String)>),
    Post(Value),
}

#[derive(Clone)]
pub struct FakeBackend {
    pub url: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBackend {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Acciones recibidas, en orden
    pub fn actions(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| match r {
                Recorded::Get(query) => query
                    .iter()
                    .find(|(k, _)| k == "action")
                    .map(|(_, v)| v.clone())
                    .unwrap_or_default(),
                Recorded::Post(body) => body["action"].as_str().unwrap_or_default().to_string(),
            })
            .collect()
    }
}

#[derive(Clone)]
struct BackendState {
    accepted_keys: Vec<String>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub fn sample_initial_data() -> Value {
    json!({
        "config": {
            "SYSTEM_NAME": "Fleet Desk",
            "THEME_COLORS": { "primary": "#0F766E", "secondary": "#22C55E" },
            "API_KEY": "ignored-by-client"
        },
        "cars": [
            { "id": "CAR001", "plate": "กข 1234", "model": "Toyota Camry", "seats": 5, "imageUrl": "", "status": "Available" },
            { "id": "CAR002", "plate": "คง 5678", "model": "Toyota Commuter", "seats": "12", "imageUrl": "", "status": "In Use" }
        ],
        "bookings": [
            {
                "id": "BK-001", "carId": "CAR002", "requester": "Somchai", "department": "IT",
                "destination": "Chiang Mai", "startDate": "2025-01-05", "endDate": "2025-01-06",
                "passengers": 3, "status": "Approved", "createdAt": "2025-01-01T09:00:00.000Z"
            },
            {
                "id": "BK-002", "carId": "CAR999", "requester": "Mali", "department": "HR",
                "destination": "Pattaya", "startDate": "2025-01-08", "endDate": "2025-01-08",
                "passengers": 1, "status": "Pending", "createdAt": "2025-01-03T09:00:00.000Z"
            }
        ]
    })
}

fn respond(action: &str, params: &Value) -> Response {
    match action {
        "getInitialData" => Json(json!({ "success": true, "data": sample_initial_data() })).into_response(),
        "getConfig" => Json(json!({ "success": true, "data": sample_initial_data()["config"] })).into_response(),
        "getCars" => Json(json!({ "success": true, "data": sample_initial_data()["cars"] })).into_response(),
        "getBookings" => Json(json!({ "success": true, "data": sample_initial_data()["bookings"] })).into_response(),
        "saveBooking" => Json(json!({
            "success": true,
            "data": { "id": "BK-100", "status": "Pending" }
        }))
        .into_response(),
        "addCar" => Json(json!({
            "success": true,
            "data": {
                "id": "CAR003", "plate": params["plate"], "model": params["model"],
                "seats": params["seats"], "imageUrl": "", "status": "Available"
            }
        }))
        .into_response(),
        "updateCarStatus" | "updateBookingStatus" => Json(json!({ "success": true })).into_response(),
        "generatePDF" => Json(json!({
            "success": true,
            "data": {
                "base64": STANDARD.encode(SAMPLE_PDF),
                "filename": format!("booking-{}.pdf", params["bookingId"].as_str().unwrap_or_default()),
                "pdfUrl": "https://drive.example.com/file/1"
            }
        }))
        .into_response(),
        "teapot" => (
            StatusCode::IM_A_TEAPOT,
            Json(json!({ "success": false, "error": "short and stout" })),
        )
            .into_response(),
        "html" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        _ => Json(json!({ "success": false, "error": "Invalid action" })).into_response(),
    }
}

fn check_key(state: &BackendState, key: Option<&str>) -> Option<Response> {
    match key {
        Some(key) if state.accepted_keys.iter().any(|k| k == key) => None,
        _ => Some(Json(json!({ "success": false, "error": "Invalid API key" })).into_response()),
    }
}

async fn backend_get(
    State(state): State<BackendState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    state.requests.lock().unwrap().push(Recorded::Get(query.clone()));

    let params: serde_json::Map<String, Value> = query
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    let params = Value::Object(params);

    if let Some(rejection) = check_key(&state, params["apiKey"].as_str()) {
        return rejection;
    }
    respond(params["action"].as_str().unwrap_or_default(), &params)
}

async fn backend_post(State(state): State<BackendState>, Json(body): Json<Value>) -> Response {
    state.requests.lock().unwrap().push(Recorded::Post(body.clone()));

    if let Some(rejection) = check_key(&state, body["apiKey"].as_str()) {
        return rejection;
    }
    respond(body["action"].as_str().unwrap_or_default(), &body)
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Backend falso que acepta la clave secreta y la pública
pub async fn spawn_backend() -> FakeBackend {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = BackendState {
        accepted_keys: vec![BACKEND_SECRET.to_string(), PUBLIC_KEY.to_string()],
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/exec", get(backend_get).post(backend_post))
        .with_state(state);

    let base = serve(app).await;
    FakeBackend {
        url: format!("{}/exec", base),
        requests,
    }
}

pub fn proxy_config(backend_url: &str) -> EnvironmentConfig {
    let backend_url = backend_url.to_string();
    EnvironmentConfig::from_lookup(move |name| match name {
        "BACKEND_API_URL" => Some(backend_url.clone()),
        "BACKEND_API_KEY" => Some(BACKEND_SECRET.to_string()),
        _ => None,
    })
    .unwrap()
}

/// Router del proxy apuntando al backend falso
pub fn proxy_app(backend: &FakeBackend) -> Router {
    create_app(AppState::new(proxy_config(&backend.url)))
}

/// Proxy real escuchando en un puerto local; devuelve la URL del endpoint
pub async fn spawn_proxy(backend: &FakeBackend) -> String {
    let base = serve(proxy_app(backend)).await;
    format!("{}/api/proxy", base)
}
