//! Servicio de estadísticas del dashboard
//!
//! Conteos simples sobre coches y reservas, series para los gráficos y la
//! lista de reservas recientes.

use crate::models::theme::DANGER;
use crate::models::{Booking, BookingStatus, Car, CarStatus, ChartSlice, Stats, Theme};
use crate::services::history_service::sort_by_created_desc;

/// Número de reservas recientes en el dashboard
pub const RECENT_BOOKINGS_LIMIT: usize = 5;

const MUTED: &str = "#6B7280";

pub fn count_bookings_with_status(bookings: &[Booking], status: &str) -> usize {
    bookings.iter().filter(|b| b.status.is(status)).count()
}

pub fn count_cars_with_status(cars: &[Car], status: &str) -> usize {
    cars.iter().filter(|c| c.status.as_str() == status).count()
}

/// Recalcular estadísticas a partir de las colecciones cargadas
pub fn compute_stats(cars: &[Car], bookings: &[Booking]) -> Stats {
    let approved_bookings = count_bookings_with_status(bookings, BookingStatus::APPROVED);

    Stats {
        total_cars: cars.len(),
        available_cars: count_cars_with_status(cars, CarStatus::AVAILABLE),
        total_bookings: bookings.len(),
        pending_bookings: count_bookings_with_status(bookings, BookingStatus::PENDING),
        approved_bookings,
        active_bookings: approved_bookings,
    }
}

/// Reparto de la flota: disponibles, en uso y en mantenimiento.
///
/// Los estados desconocidos cuentan como "en uso" (no disponibles).
pub fn car_status_breakdown(cars: &[Car], theme: &Theme) -> Vec<ChartSlice> {
    let available = count_cars_with_status(cars, CarStatus::AVAILABLE);
    let maintenance = count_cars_with_status(cars, CarStatus::MAINTENANCE);
    let in_use = cars.len() - available - maintenance;

    vec![
        ChartSlice {
            label: CarStatus::AVAILABLE.to_string(),
            value: available,
            color: theme.secondary.clone(),
        },
        ChartSlice {
            label: CarStatus::IN_USE.to_string(),
            value: in_use,
            color: theme.primary.clone(),
        },
        ChartSlice {
            label: CarStatus::MAINTENANCE.to_string(),
            value: maintenance,
            color: DANGER.to_string(),
        },
    ]
}

/// Reparto de reservas por estado
pub fn booking_status_breakdown(bookings: &[Booking], theme: &Theme) -> Vec<ChartSlice> {
    [
        (BookingStatus::PENDING, theme.accent.as_str()),
        (BookingStatus::APPROVED, theme.secondary.as_str()),
        (BookingStatus::COMPLETED, theme.primary.as_str()),
        (BookingStatus::REJECTED, DANGER),
        (BookingStatus::CANCELLED, MUTED),
    ]
    .into_iter()
    .map(|(status, color)| ChartSlice {
        label: status.to_string(),
        value: count_bookings_with_status(bookings, status),
        color: color.to_string(),
    })
    .collect()
}

/// Las reservas más recientes por fecha de creación
pub fn recent_bookings(bookings: &[Booking], limit: usize) -> Vec<&Booking> {
    let mut recent = sort_by_created_desc(bookings.iter().collect());
    recent.truncate(limit);
    recent
}
