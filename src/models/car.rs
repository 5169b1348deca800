//! Modelo de Car
//!
//! Coche de la flota tal y como lo devuelve el servicio backend. El ciclo de
//! vida pertenece al backend; aquí solo se lee y se muestra.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::serde_helpers::lenient_u32;

/// Estado del coche.
///
/// Conjunto abierto: el backend puede devolver cualquier texto y se conserva
/// tal cual. Las constantes cubren los valores conocidos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarStatus(String);

impl CarStatus {
    pub const AVAILABLE: &'static str = "Available";
    pub const IN_USE: &'static str = "In Use";
    pub const MAINTENANCE: &'static str = "Maintenance";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn available() -> Self {
        Self::new(Self::AVAILABLE)
    }

    pub fn in_use() -> Self {
        Self::new(Self::IN_USE)
    }

    pub fn maintenance() -> Self {
        Self::new(Self::MAINTENANCE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_available(&self) -> bool {
        self.0 == Self::AVAILABLE
    }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CarStatus {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Coche principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub plate: String,
    pub model: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub seats: u32,
    #[serde(default)]
    pub image_url: String,
    pub status: CarStatus,
}

impl Car {
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }
}

/// Request para registrar un coche nuevo (acción `addCar`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub plate: String,
    pub model: String,
    pub seats: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CarStatus>,
}
