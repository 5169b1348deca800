//! Servicio del historial de reservas
//!
//! Búsqueda por texto, filtro por estado, orden por fecha de creación y las
//! acciones rápidas que se ofrecen según el estado actual.

use std::cmp::Reverse;
use std::str::FromStr;

use serde::Serialize;

use crate::models::{Booking, BookingStatus, Car};

/// Texto para referencias a coches inexistentes
pub const MISSING_CAR_LABEL: &str = "N/A";

/// Filtro por estado del historial
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookingStatus),
}

impl StatusFilter {
    pub fn matches(&self, booking: &Booking) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => &booking.status == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "All" => StatusFilter::All,
            other => StatusFilter::Only(BookingStatus::new(other)),
        })
    }
}

/// Criterios del historial: texto libre y estado
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub search: String,
    pub status: StatusFilter,
}

impl HistoryQuery {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }
}

/// Coincidencia sin distinguir mayúsculas en id, solicitante, destino o departamento
pub fn matches_search(booking: &Booking, term: &str) -> bool {
    let term = term.to_lowercase();
    [
        &booking.id,
        &booking.requester,
        &booking.destination,
        &booking.department,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

pub fn search_bookings<'a>(bookings: impl IntoIterator<Item = &'a Booking>, term: &str) -> Vec<&'a Booking> {
    bookings
        .into_iter()
        .filter(|b| matches_search(b, term))
        .collect()
}

pub fn filter_by_status<'a>(
    bookings: impl IntoIterator<Item = &'a Booking>,
    status: &StatusFilter,
) -> Vec<&'a Booking> {
    bookings.into_iter().filter(|b| status.matches(b)).collect()
}

/// Ambos predicados a la vez; el orden de aplicación no cambia el resultado
pub fn filter_bookings<'a>(bookings: &'a [Booking], query: &HistoryQuery) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| matches_search(b, &query.search) && query.status.matches(b))
        .collect()
}

/// Orden estable por fecha de creación, más reciente primero
pub fn sort_by_created_desc(mut bookings: Vec<&Booking>) -> Vec<&Booking> {
    bookings.sort_by_key(|b| Reverse(b.created_at_or_epoch()));
    bookings
}

/// Filtrado y ordenado, listo para mostrar
pub fn history_view<'a>(bookings: &'a [Booking], query: &HistoryQuery) -> Vec<&'a Booking> {
    sort_by_created_desc(filter_bookings(bookings, query))
}

/// Conteo por pestaña de filtro: "All" y los cinco estados conocidos
pub fn status_counts(bookings: &[Booking]) -> Vec<(String, usize)> {
    let mut counts = vec![("All".to_string(), bookings.len())];
    counts.extend(BookingStatus::ALL.iter().map(|status| {
        (
            status.to_string(),
            bookings.iter().filter(|b| b.status.is(status)).count(),
        )
    }));
    counts
}

/// Acciones rápidas del historial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuickAction {
    Approve,
    Reject,
    Complete,
    Cancel,
}

impl QuickAction {
    pub fn target_status(self) -> BookingStatus {
        match self {
            QuickAction::Approve => BookingStatus::approved(),
            QuickAction::Reject => BookingStatus::rejected(),
            QuickAction::Complete => BookingStatus::completed(),
            QuickAction::Cancel => BookingStatus::cancelled(),
        }
    }
}

/// Acciones ofrecidas según el estado actual. No es una tabla de
/// transiciones: el selector genérico permite cualquier cambio.
pub fn quick_actions(status: &BookingStatus) -> Vec<QuickAction> {
    match status.as_str() {
        BookingStatus::PENDING => vec![QuickAction::Approve, QuickAction::Reject, QuickAction::Cancel],
        BookingStatus::APPROVED => vec![QuickAction::Complete, QuickAction::Cancel],
        _ => Vec::new(),
    }
}

/// Opciones del selector genérico de estado
pub fn status_options() -> Vec<BookingStatus> {
    BookingStatus::ALL.iter().map(|s| BookingStatus::new(*s)).collect()
}

pub fn find_car<'a>(cars: &'a [Car], car_id: &str) -> Option<&'a Car> {
    cars.iter().find(|c| c.id == car_id)
}

/// Fila del historial con el coche resuelto
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow<'a> {
    pub booking: &'a Booking,
    pub car_model: &'a str,
    pub car_plate: &'a str,
    pub quick_actions: Vec<QuickAction>,
}

pub fn history_rows<'a>(bookings: &'a [Booking], cars: &'a [Car], query: &HistoryQuery) -> Vec<HistoryRow<'a>> {
    history_view(bookings, query)
        .into_iter()
        .map(|booking| {
            let car = find_car(cars, &booking.car_id);
            HistoryRow {
                booking,
                car_model: car.map_or(MISSING_CAR_LABEL, |c| c.model.as_str()),
                car_plate: car.map_or(MISSING_CAR_LABEL, |c| c.plate.as_str()),
                quick_actions: quick_actions(&booking.status),
            }
        })
        .collect()
}
