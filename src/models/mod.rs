//! Modelos del sistema
//!
//! Este módulo contiene los registros que intercambia el servicio backend
//! (coches, reservas, configuración) y los valores derivados en cliente.

pub mod api_response;
pub mod booking;
pub mod car;
pub mod stats;
pub mod system_config;
pub mod theme;

pub use api_response::{ApiEnvelope, InitialData, PdfData};
pub use booking::{Booking, BookingStatus, SavedBooking};
pub use car::{Car, CarStatus, NewCar};
pub use stats::{ChartSlice, Stats};
pub use system_config::{SystemConfig, ThemeColors};
pub use theme::Theme;
