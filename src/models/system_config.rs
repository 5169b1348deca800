//! Configuración del sistema servida por el backend
//!
//! Se carga una vez con `getInitialData` / `getConfig` y el cliente nunca la
//! modifica. Las claves llegan en SCREAMING_SNAKE_CASE.

use serde::{Deserialize, Serialize};

/// Paleta de colores tal y como la entrega el backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SystemConfig {
    #[serde(default)]
    pub system_name: String,
    #[serde(default)]
    pub theme_colors: Option<ThemeColors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_bot_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_chat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_template_id: Option<String>,
    #[serde(default)]
    pub api_key: String,
}

pub const DEFAULT_SYSTEM_NAME: &str = "Car Booking System";

impl SystemConfig {
    /// Nombre a mostrar; vacío cae al nombre por defecto
    pub fn display_name(&self) -> &str {
        if self.system_name.trim().is_empty() {
            DEFAULT_SYSTEM_NAME
        } else {
            &self.system_name
        }
    }
}

// Debug manual: los tokens de integración no deben acabar en los logs
impl std::fmt::Debug for SystemConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemConfig")
            .field("system_name", &self.system_name)
            .field("theme_colors", &self.theme_colors)
            .field("line_token", &self.line_token.as_ref().map(|_| "***"))
            .field("telegram_bot_token", &self.telegram_bot_token.as_ref().map(|_| "***"))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("drive_folder_id", &self.drive_folder_id)
            .field("slide_template_id", &self.slide_template_id)
            .field("api_key", &"***")
            .finish()
    }
}
