//! Deserializadores tolerantes
//!
//! Las hojas de cálculo del backend a veces devuelven números como texto.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Acepta `3`, `3.0`, `"3"` o `null` (cero)
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(0),
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).map_err(serde::de::Error::custom)
            } else if let Some(v) = n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0) {
                u32::try_from(v as u64).map_err(serde::de::Error::custom)
            } else {
                Err(serde::de::Error::custom(format!("invalid count: {}", n)))
            }
        }
        Value::String(s) if s.trim().is_empty() => Ok(0),
        Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|e| serde::de::Error::custom(format!("invalid count '{}': {}", s, e))),
        other => Err(serde::de::Error::custom(format!("invalid count: {}", other))),
    }
}
