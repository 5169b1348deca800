//! Sobre de respuesta del backend
//!
//! Todas las acciones responden `{success, data?, error?, message?}`.

use serde::{Deserialize, Serialize};

use super::{booking::Booking, car::Car, system_config::SystemConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Datos de `getInitialData`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitialData {
    #[serde(default)]
    pub config: Option<SystemConfig>,
    #[serde(default)]
    pub cars: Vec<Car>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// Datos de `generatePDF`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfData {
    #[serde(default)]
    pub base64: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
}
