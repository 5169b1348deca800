//! Clients - contrato con el servicio backend
//!
//! Este módulo define el trait con una función por acción del backend. La
//! implementación HTTP es `crate::client::BackendClient`; el controlador del
//! dashboard solo depende del trait.

use async_trait::async_trait;

use crate::client::ClientError;
use crate::dto::BookingFormData;
use crate::models::{
    Booking, BookingStatus, Car, CarStatus, InitialData, NewCar, PdfData, SavedBooking,
    SystemConfig,
};

#[async_trait]
pub trait BookingApi: Send + Sync {
    /// `getInitialData`: configuración, coches y reservas en una sola llamada
    async fn get_initial_data(&self) -> Result<InitialData, ClientError>;

    async fn get_config(&self) -> Result<SystemConfig, ClientError>;

    async fn get_cars(&self) -> Result<Vec<Car>, ClientError>;

    async fn get_bookings(&self) -> Result<Vec<Booking>, ClientError>;

    /// `saveBooking`: devuelve al menos el id de la reserva creada
    async fn save_booking(&self, form: &BookingFormData) -> Result<SavedBooking, ClientError>;

    async fn add_car(&self, car: &NewCar) -> Result<Car, ClientError>;

    async fn update_car_status(&self, car_id: &str, status: &CarStatus) -> Result<(), ClientError>;

    /// Sin tabla de transiciones: se envía cualquier estado
    async fn update_booking_status(
        &self,
        booking_id: &str,
        status: &BookingStatus,
    ) -> Result<(), ClientError>;

    async fn generate_pdf(&self, booking_id: &str) -> Result<PdfData, ClientError>;
}
