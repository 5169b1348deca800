//! Tema resuelto
//!
//! Colores efectivos a partir de `ThemeColors`, con valores por defecto.
//! Se pasa explícitamente a quien lo necesite; no hay estado global.

use serde::Serialize;

use super::system_config::ThemeColors;

pub const DEFAULT_PRIMARY: &str = "#3B82F6";
pub const DEFAULT_SECONDARY: &str = "#10B981";
pub const DEFAULT_ACCENT: &str = "#F59E0B";
/// Color fijo para estados de error/rechazo en los gráficos
pub const DANGER: &str = "#EF4444";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: Option<String>,
    pub text: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
            accent: DEFAULT_ACCENT.to_string(),
            background: None,
            text: None,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Theme {
    pub fn from_colors(colors: Option<&ThemeColors>) -> Self {
        let defaults = Self::default();
        let Some(colors) = colors else {
            return defaults;
        };

        Self {
            primary: non_empty(&colors.primary).unwrap_or(defaults.primary),
            secondary: non_empty(&colors.secondary).unwrap_or(defaults.secondary),
            accent: non_empty(&colors.accent).unwrap_or(defaults.accent),
            background: non_empty(&colors.background),
            text: non_empty(&colors.text),
        }
    }

    /// Variables CSS para una capa de presentación
    pub fn css_variables(&self) -> Vec<(&'static str, &str)> {
        let mut vars = vec![
            ("--color-primary", self.primary.as_str()),
            ("--color-secondary", self.secondary.as_str()),
            ("--color-accent", self.accent.as_str()),
        ];
        if let Some(background) = &self.background {
            vars.push(("--color-background", background.as_str()));
        }
        if let Some(text) = &self.text {
            vars.push(("--color-text", text.as_str()));
        }
        vars
    }
}
