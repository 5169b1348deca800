//! Modelo de Booking
//!
//! Reserva de un coche. Se crea con `saveBooking` y solo cambia de estado;
//! nunca se elimina.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::dates::parse_timestamp;
use crate::utils::serde_helpers::lenient_u32;

/// Estado de la reserva.
///
/// Igual que `CarStatus`, es un texto abierto comparado por igualdad. No hay
/// tabla de transiciones: cualquier estado puede pasar a cualquier otro.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingStatus(String);

impl BookingStatus {
    pub const PENDING: &'static str = "Pending";
    pub const APPROVED: &'static str = "Approved";
    pub const REJECTED: &'static str = "Rejected";
    pub const COMPLETED: &'static str = "Completed";
    pub const CANCELLED: &'static str = "Cancelled";

    /// Opciones del selector genérico de estado, en orden de presentación
    pub const ALL: [&'static str; 5] = [
        Self::PENDING,
        Self::APPROVED,
        Self::REJECTED,
        Self::COMPLETED,
        Self::CANCELLED,
    ];

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn pending() -> Self {
        Self::new(Self::PENDING)
    }

    pub fn approved() -> Self {
        Self::new(Self::APPROVED)
    }

    pub fn rejected() -> Self {
        Self::new(Self::REJECTED)
    }

    pub fn completed() -> Self {
        Self::new(Self::COMPLETED)
    }

    pub fn cancelled() -> Self {
        Self::new(Self::CANCELLED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is(&self, value: &str) -> bool {
        self.0 == value
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookingStatus {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Reserva principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub car_id: String,
    #[serde(default)]
    pub requester: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub passengers: u32,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Booking {
    /// Instante de creación; ausente o ilegible cuenta como epoch
    pub fn created_at_or_epoch(&self) -> DateTime<Utc> {
        self.created_at
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or_default()
    }
}

/// Resultado de `saveBooking`: el backend devuelve al menos el id generado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedBooking {
    pub id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
