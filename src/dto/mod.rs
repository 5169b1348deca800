//! DTOs
//!
//! Cuerpos y parámetros de las acciones del backend.

pub mod booking_dto;

pub use booking_dto::*;
