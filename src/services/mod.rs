//! Servicios del dashboard
//!
//! Lógica pura de las vistas: estadísticas, historial, validación de
//! reservas y decodificación de PDF.

pub mod booking_service;
pub mod history_service;
pub mod pdf_service;
pub mod stats_service;

#[cfg(test)]
pub(crate) mod test_fixtures;
