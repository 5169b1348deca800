//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. La clave secreta del
//! backend solo vive en el servidor; la variante pública existe para el modo
//! de despliegue en que el cliente habla directamente con el backend.

use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errores al leer la configuración
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Modo de despliegue del cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiMode {
    /// El cliente llama al proxy del mismo origen; el proxy añade la clave secreta
    #[default]
    Proxied,
    /// El cliente llama al backend directamente con la clave pública
    Direct,
}

impl FromStr for ApiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "proxied" | "proxy" => Ok(ApiMode::Proxied),
            "direct" => Ok(ApiMode::Direct),
            other => Err(other.to_string()),
        }
    }
}

/// Configuración del entorno
#[derive(Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    // Backend (solo servidor)
    pub backend_api_url: String,
    pub backend_api_key: String,
    // Variante pública para el modo directo
    pub public_api_url: Option<String>,
    pub public_api_key: Option<String>,
    pub api_mode: ApiMode,
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Leer la configuración desde cualquier fuente clave/valor
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let port = match get("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => 3000,
        };

        let log_level = match get("LOG_LEVEL") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "LOG_LEVEL", value })?,
            None => tracing::Level::INFO,
        };

        let api_mode = match get("API_MODE") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "API_MODE", value })?,
            None => ApiMode::default(),
        };

        let config = Self {
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            cors_origins: get("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level,
            backend_api_url: required("BACKEND_API_URL")?,
            backend_api_key: required("BACKEND_API_KEY")?,
            public_api_url: get("PUBLIC_API_URL"),
            public_api_key: get("PUBLIC_API_KEY"),
            api_mode,
        };

        if config.api_mode == ApiMode::Direct {
            if config.public_api_url.is_none() {
                return Err(ConfigError::Missing("PUBLIC_API_URL"));
            }
            if config.public_api_key.is_none() {
                return Err(ConfigError::Missing("PUBLIC_API_KEY"));
            }
        }

        Ok(config)
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Las claves nunca se imprimen
impl fmt::Debug for EnvironmentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentConfig")
            .field("environment", &self.environment)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("log_level", &self.log_level)
            .field("backend_api_url", &self.backend_api_url)
            .field("backend_api_key", &"***")
            .field("public_api_url", &self.public_api_url)
            .field("public_api_key", &self.public_api_key.as_ref().map(|_| "***"))
            .field("api_mode", &self.api_mode)
            .finish()
    }
}
