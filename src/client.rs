//! Cliente HTTP para el servicio backend de reservas
//!
//! Todas las acciones van al mismo endpoint, seleccionadas por el campo
//! `action`. Lecturas por GET con query string, escrituras por POST con cuerpo
//! JSON. Un único intercambio petición/respuesta por llamada: sin reintentos,
//! sin timeouts y sin caché.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::clients::BookingApi;
use crate::config::environment::{ApiMode, EnvironmentConfig};
use crate::dto::{BookingFormData, BookingStatusUpdate, CarStatusUpdate};
use crate::models::{
    ApiEnvelope, Booking, BookingStatus, Car, CarStatus, InitialData, NewCar, PdfData,
    SavedBooking, SystemConfig,
};

/// Nombre del parámetro que transporta la clave
pub const API_KEY_PARAM: &str = "apiKey";
/// Nombre del parámetro que selecciona la acción
pub const ACTION_PARAM: &str = "action";

/// Acciones del backend
pub mod actions {
    pub const GET_INITIAL_DATA: &str = "getInitialData";
    pub const GET_CONFIG: &str = "getConfig";
    pub const GET_CARS: &str = "getCars";
    pub const GET_BOOKINGS: &str = "getBookings";
    pub const SAVE_BOOKING: &str = "saveBooking";
    pub const ADD_CAR: &str = "addCar";
    pub const UPDATE_CAR_STATUS: &str = "updateCarStatus";
    pub const UPDATE_BOOKING_STATUS: &str = "updateBookingStatus";
    pub const GENERATE_PDF: &str = "generatePDF";
}

/// Errores del cliente
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP transport error: {0}")]
    Transport(reqwest::Error),

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// Texto de error devuelto por el backend, sin modificar
    #[error("{0}")]
    Api(String),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response to {0} carried no data")]
    MissingData(&'static str),
}

impl ClientError {
    fn transport(e: reqwest::Error) -> Self {
        // La URL puede llevar la clave en la query
        ClientError::Transport(e.without_url())
    }
}

/// Mensaje cuando el backend responde `success:false` sin texto de error
pub const GENERIC_API_FAILURE: &str = "API request failed";

/// Cliente del backend (directo o a través del proxy)
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl BackendClient {
    /// Crear cliente con URL base y clave opcional
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Cliente que habla con el proxy del mismo origen; la clave la pone el proxy
    pub fn proxied(proxy_url: impl Into<String>) -> Self {
        Self::new(proxy_url, None)
    }

    /// Cliente que habla directamente con el backend usando la clave pública
    pub fn direct(public_api_url: impl Into<String>, public_api_key: impl Into<String>) -> Self {
        Self::new(public_api_url, Some(public_api_key.into()))
    }

    /// Elegir el modo según la configuración del entorno
    pub fn from_config(config: &EnvironmentConfig, proxy_url: &str) -> Self {
        match (config.api_mode, &config.public_api_url) {
            (ApiMode::Direct, Some(url)) => {
                Self::new(url.clone(), config.public_api_key.clone())
            }
            _ => Self::proxied(proxy_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Acción de lectura: GET con `apiKey`, `action` y parámetros en la query
    async fn get_action(&self, action: &'static str, params: &[(&str, &str)]) -> Result<Option<Value>, ClientError> {
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 2);
        if let Some(key) = &self.api_key {
            query.push((API_KEY_PARAM, key.as_str()));
        }
        query.push((ACTION_PARAM, action));
        query.extend_from_slice(params);

        log::debug!("➡️ GET {} (action={})", self.base_url, action);

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(ClientError::transport)?;

        self.read_envelope(action, response).await
    }

    /// Acción de escritura: POST con `{action, ...payload, apiKey}`
    async fn post_action<P: Serialize + ?Sized>(
        &self,
        action: &'static str,
        payload: &P,
    ) -> Result<Option<Value>, ClientError> {
        let body = build_post_body(action, payload, self.api_key.as_deref())?;

        log::debug!("➡️ POST {} (action={})", self.base_url, action);

        let response = self
            .client
            .post(&self.base_url)
            .json(&body)
            .send()
            .await
            .map_err(ClientError::transport)?;

        self.read_envelope(action, response).await
    }

    async fn read_envelope(
        &self,
        action: &'static str,
        response: reqwest::Response,
    ) -> Result<Option<Value>, ClientError> {
        let status = response.status();
        if !status.is_success() {
            log::error!("❌ API Error: {} responded HTTP {}", action, status);
            return Err(ClientError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(ClientError::transport)?;
        let envelope: ApiEnvelope<Value> = serde_json::from_slice(&bytes)?;

        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| GENERIC_API_FAILURE.to_string());
            log::error!("❌ API Error: {} failed: {}", action, message);
            return Err(ClientError::Api(message));
        }

        Ok(envelope.data)
    }
}

/// Cuerpo de una acción POST. El payload debe serializar como objeto JSON.
pub fn build_post_body<P: Serialize + ?Sized>(
    action: &str,
    payload: &P,
    api_key: Option<&str>,
) -> Result<Map<String, Value>, ClientError> {
    let mut body = Map::new();
    body.insert(ACTION_PARAM.to_string(), Value::String(action.to_string()));

    match serde_json::to_value(payload)? {
        Value::Object(fields) => {
            for (k, v) in fields {
                if k != ACTION_PARAM {
                    body.insert(k, v);
                }
            }
        }
        Value::Null => {}
        other => {
            return Err(ClientError::Decode(serde::de::Error::custom(format!(
                "payload for {} must be a JSON object, got {}",
                action, other
            ))))
        }
    }

    if let Some(key) = api_key {
        body.insert(API_KEY_PARAM.to_string(), Value::String(key.to_string()));
    }
    Ok(body)
}

fn require_data<T: DeserializeOwned>(action: &'static str, data: Option<Value>) -> Result<T, ClientError> {
    let data = data.ok_or(ClientError::MissingData(action))?;
    Ok(serde_json::from_value(data)?)
}

#[async_trait]
impl BookingApi for BackendClient {
    async fn get_initial_data(&self) -> Result<InitialData, ClientError> {
        let data = self.get_action(actions::GET_INITIAL_DATA, &[]).await?;
        require_data(actions::GET_INITIAL_DATA, data)
    }

    async fn get_config(&self) -> Result<SystemConfig, ClientError> {
        let data = self.get_action(actions::GET_CONFIG, &[]).await?;
        require_data(actions::GET_CONFIG, data)
    }

    async fn get_cars(&self) -> Result<Vec<Car>, ClientError> {
        let data = self.get_action(actions::GET_CARS, &[]).await?;
        Ok(data.map(serde_json::from_value::<Vec<Car>>).transpose()?.unwrap_or_default())
    }

    async fn get_bookings(&self) -> Result<Vec<Booking>, ClientError> {
        let data = self.get_action(actions::GET_BOOKINGS, &[]).await?;
        Ok(data.map(serde_json::from_value::<Vec<Booking>>).transpose()?.unwrap_or_default())
    }

    async fn save_booking(&self, form: &BookingFormData) -> Result<SavedBooking, ClientError> {
        let data = self.post_action(actions::SAVE_BOOKING, form).await?;
        require_data(actions::SAVE_BOOKING, data)
    }

    async fn add_car(&self, car: &NewCar) -> Result<Car, ClientError> {
        let data = self.post_action(actions::ADD_CAR, car).await?;
        require_data(actions::ADD_CAR, data)
    }

    async fn update_car_status(&self, car_id: &str, status: &CarStatus) -> Result<(), ClientError> {
        let update = CarStatusUpdate {
            car_id,
            status: status.as_str(),
        };
        self.post_action(actions::UPDATE_CAR_STATUS, &update).await?;
        Ok(())
    }

    async fn update_booking_status(
        &self,
        booking_id: &str,
        status: &BookingStatus,
    ) -> Result<(), ClientError> {
        let update = BookingStatusUpdate { booking_id, status };
        self.post_action(actions::UPDATE_BOOKING_STATUS, &update).await?;
        Ok(())
    }

    async fn generate_pdf(&self, booking_id: &str) -> Result<PdfData, ClientError> {
        let params = [("bookingId", booking_id)];
        let data = self.get_action(actions::GENERATE_PDF, &params).await?;
        require_data(actions::GENERATE_PDF, data)
    }
}
