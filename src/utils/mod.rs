//! Utilidades del sistema
//!
//! Este módulo contiene errores del servidor, parsing de fechas y
//! deserializadores auxiliares.

pub mod dates;
pub mod errors;
pub mod serde_helpers;

pub use errors::*;
