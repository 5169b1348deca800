//! Datos de prueba compartidos por los tests de servicios

use crate::models::{Booking, BookingStatus, Car, CarStatus};

pub fn car(id: &str, status: &str) -> Car {
    Car {
        id: id.to_string(),
        plate: format!("PL-{}", id),
        model: "Toyota Commuter".to_string(),
        seats: 12,
        image_url: String::new(),
        status: CarStatus::new(status),
    }
}

pub fn booking(id: &str, status: &str, created_at: Option<&str>) -> Booking {
    Booking {
        id: id.to_string(),
        car_id: "CAR-X".to_string(),
        requester: "Requester".to_string(),
        department: "Sales".to_string(),
        destination: "Office".to_string(),
        start_date: "2025-01-10".to_string(),
        end_date: "2025-01-12".to_string(),
        purpose: None,
        passengers: 1,
        status: BookingStatus::new(status),
        created_at: created_at.map(str::to_string),
    }
}
