//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno del servidor proxy y del
//! cliente del backend.

pub mod environment;

pub use environment::*;
