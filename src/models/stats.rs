//! Estadísticas derivadas
//!
//! No se persisten: se recalculan a partir de coches y reservas en cada carga.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_cars: usize,
    pub available_cars: usize,
    pub total_bookings: usize,
    pub pending_bookings: usize,
    pub approved_bookings: usize,
    /// Igual a `approved_bookings`
    pub active_bookings: usize,
}

/// Una barra/sector de un gráfico: etiqueta, valor y color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: usize,
    pub color: String,
}
