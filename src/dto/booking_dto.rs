use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::BookingStatus;

// Formulario de nueva reserva (acción saveBooking)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormData {
    pub car_id: String,

    #[validate(length(min = 1, message = "requester is required"))]
    pub requester: String,

    #[validate(length(min = 1, message = "department is required"))]
    pub department: String,

    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,

    #[validate(length(min = 1, message = "startDate is required"))]
    pub start_date: String,

    #[validate(length(min = 1, message = "endDate is required"))]
    pub end_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    pub passengers: u32,
}

impl BookingFormData {
    /// Formulario vacío para un coche: un pasajero, resto en blanco
    pub fn for_car(car_id: impl Into<String>) -> Self {
        Self {
            car_id: car_id.into(),
            passengers: 1,
            ..Default::default()
        }
    }
}

// Cambio de estado de reserva (acción updateBookingStatus)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusUpdate<'a> {
    pub booking_id: &'a str,
    pub status: &'a BookingStatus,
}

// Cambio de estado de coche (acción updateCarStatus)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarStatusUpdate<'a> {
    pub car_id: &'a str,
    pub status: &'a str,
}
