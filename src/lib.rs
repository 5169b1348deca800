//! Car Booking - proxy y cliente del servicio de reservas de coches
//!
//! El servicio backend (hoja de cálculo + scripts) es el sistema de registro.
//! Este crate aporta el proxy del mismo origen que añade la clave secreta,
//! el cliente tipado de sus acciones y la lógica del dashboard.

pub mod client;
pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use client::{BackendClient, ClientError};
pub use clients::BookingApi;
pub use config::environment::{ApiMode, EnvironmentConfig};
pub use controllers::DashboardController;
pub use routes::create_app;
pub use state::AppState;
