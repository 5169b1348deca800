//! Servicio de reservas
//!
//! Validación en cliente del formulario de reserva y selección de coche.
//! Solo se comprueba que los campos obligatorios no estén vacíos y que la
//! fecha de fin no sea anterior a la de inicio; capacidad, solapes y
//! disponibilidad real son cosa del backend.

use thiserror::Error;
use validator::Validate;

use crate::client::ClientError;
use crate::dto::BookingFormData;
use crate::models::Car;
use crate::utils::dates::parse_timestamp;

/// Errores del flujo de reserva
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("End date must be after start date")]
    InvalidDates,

    #[error("This car is currently {}", .0.to_lowercase())]
    CarNotAvailable(String),

    #[error("Car {0} not found")]
    UnknownCar(String),

    #[error(transparent)]
    Api(#[from] ClientError),
}

/// Campos obligatorios en el orden del formulario: (campo del struct, nombre en el JSON)
const REQUIRED_FIELDS: [(&str, &str); 5] = [
    ("requester", "requester"),
    ("department", "department"),
    ("destination", "destination"),
    ("start_date", "startDate"),
    ("end_date", "endDate"),
];

/// Coches que se pueden reservar ahora mismo
pub fn bookable_cars(cars: &[Car]) -> Vec<&Car> {
    cars.iter().filter(|c| c.is_available()).collect()
}

/// Abrir el formulario para un coche; solo coches disponibles
pub fn select_car(car: &Car) -> Result<BookingFormData, BookingError> {
    if !car.is_available() {
        return Err(BookingError::CarNotAvailable(car.status.to_string()));
    }
    Ok(BookingFormData::for_car(&car.id))
}

/// Validar el formulario antes de cualquier llamada de red
pub fn validate_booking(form: &BookingFormData) -> Result<(), BookingError> {
    if let Err(errors) = form.validate() {
        let invalid = errors.field_errors();
        let missing = REQUIRED_FIELDS
            .into_iter()
            .filter(|&(field, wire)| invalid.contains_key(field) || invalid.contains_key(wire))
            .map(|(_, wire)| wire.to_string())
            .collect();
        return Err(BookingError::MissingFields(missing));
    }

    let start = parse_timestamp(&form.start_date).ok_or(BookingError::InvalidDates)?;
    let end = parse_timestamp(&form.end_date).ok_or(BookingError::InvalidDates)?;
    if end < start {
        return Err(BookingError::InvalidDates);
    }

    Ok(())
}
