//! Shared application state
//!
//! Este módulo define el estado compartido del servidor proxy que se pasa
//! a través del router de Axum. Es inmutable: configuración y cliente HTTP.

use reqwest::Client;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub http_client: Client,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config: Arc::new(config),
            http_client: Client::new(),
        }
    }

    /// URL del backend (solo servidor)
    pub fn backend_url(&self) -> &str {
        &self.config.backend_api_url
    }

    /// Clave secreta que el proxy añade a cada petición
    pub fn backend_api_key(&self) -> &str {
        &self.config.backend_api_key
    }
}
