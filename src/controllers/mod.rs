//! Controladores
//!
//! El controlador raíz del dashboard, dueño del estado de la aplicación.

pub mod dashboard_controller;

pub use dashboard_controller::{DashboardController, DashboardError, DashboardSummary, StatusChange, View};
