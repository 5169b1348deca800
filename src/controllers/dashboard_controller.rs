//! Controlador raíz del dashboard
//!
//! Posee todo el estado de la aplicación (configuración, coches, reservas,
//! estadísticas, tema y vista actual). Cada mutación termina en una recarga
//! completa a través de `resynchronize`, el único punto de recarga.

use serde::Serialize;
use thiserror::Error;

use crate::client::ClientError;
use crate::clients::BookingApi;
use crate::dto::BookingFormData;
use crate::models::{
    Booking, BookingStatus, Car, CarStatus, ChartSlice, InitialData, NewCar, SavedBooking, Stats,
    SystemConfig, Theme,
};
use crate::services::booking_service::{self, BookingError};
use crate::services::history_service::{self, HistoryQuery, HistoryRow, QuickAction};
use crate::services::pdf_service::{self, PdfError, PdfFile};
use crate::services::stats_service;

/// Errores de las operaciones del controlador
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Api(#[from] ClientError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Pdf(#[from] PdfError),
}

/// Vista seleccionada en la barra lateral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Booking,
    History,
    Cars,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Booking => "Book a Car",
            View::History => "Booking History",
            View::Cars => "Manage Cars",
        }
    }
}

/// Resultado del selector genérico de estado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// Mismo estado que el actual: no se llama al backend
    Unchanged,
    Updated,
}

/// Todo lo que pinta la vista de dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary<'a> {
    pub stats: Stats,
    pub car_status: Vec<ChartSlice>,
    pub booking_status: Vec<ChartSlice>,
    pub recent_bookings: Vec<&'a Booking>,
}

pub struct DashboardController<A: BookingApi> {
    api: A,
    config: Option<SystemConfig>,
    cars: Vec<Car>,
    bookings: Vec<Booking>,
    stats: Stats,
    theme: Theme,
    current_view: View,
    loaded: bool,
}

impl<A: BookingApi> DashboardController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            config: None,
            cars: Vec::new(),
            bookings: Vec::new(),
            stats: Stats::default(),
            theme: Theme::default(),
            current_view: View::default(),
            loaded: false,
        }
    }

    /// Carga inicial
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.resynchronize().await
    }

    /// Recarga completa de configuración, coches y reservas.
    ///
    /// Si falla, el estado anterior queda intacto.
    pub async fn resynchronize(&mut self) -> Result<(), ClientError> {
        let data = self.api.get_initial_data().await.map_err(|e| {
            log::error!("❌ Failed to load data: {}", e);
            e
        })?;
        self.apply(data);
        Ok(())
    }

    fn apply(&mut self, data: InitialData) {
        self.stats = stats_service::compute_stats(&data.cars, &data.bookings);
        // Sin THEME_COLORS se mantiene el tema anterior
        if let Some(colors) = data.config.as_ref().and_then(|c| c.theme_colors.as_ref()) {
            self.theme = Theme::from_colors(Some(colors));
        }
        if data.config.is_some() {
            self.config = data.config;
        }
        self.cars = data.cars;
        self.bookings = data.bookings;
        self.loaded = true;

        log::info!(
            "✅ Datos cargados: {} coches, {} reservas",
            self.stats.total_cars,
            self.stats.total_bookings
        );
    }

    /// Tras una mutación correcta; un fallo aquí no deshace la mutación
    async fn resync_after_mutation(&mut self) {
        if let Err(e) = self.resynchronize().await {
            log::warn!("⚠️ Mutation succeeded but reload failed: {}", e);
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn config(&self) -> Option<&SystemConfig> {
        self.config.as_ref()
    }

    pub fn system_name(&self) -> &str {
        self.config
            .as_ref()
            .map_or(crate::models::system_config::DEFAULT_SYSTEM_NAME, |c| c.display_name())
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ---- Dashboard ----

    pub fn dashboard_summary(&self) -> DashboardSummary<'_> {
        DashboardSummary {
            stats: self.stats,
            car_status: stats_service::car_status_breakdown(&self.cars, &self.theme),
            booking_status: stats_service::booking_status_breakdown(&self.bookings, &self.theme),
            recent_bookings: stats_service::recent_bookings(
                &self.bookings,
                stats_service::RECENT_BOOKINGS_LIMIT,
            ),
        }
    }

    // ---- Reservas ----

    pub fn bookable_cars(&self) -> Vec<&Car> {
        booking_service::bookable_cars(&self.cars)
    }

    /// Formulario vacío para el coche elegido
    pub fn select_car(&self, car_id: &str) -> Result<BookingFormData, BookingError> {
        let car = history_service::find_car(&self.cars, car_id)
            .ok_or_else(|| BookingError::UnknownCar(car_id.to_string()))?;
        booking_service::select_car(car)
    }

    /// Validar, guardar y recargar. Si la validación falla no hay llamada de red.
    pub async fn submit_booking(&mut self, form: &BookingFormData) -> Result<SavedBooking, BookingError> {
        booking_service::validate_booking(form)?;

        let saved = self.api.save_booking(form).await?;
        log::info!("✅ Booking submitted: {}", saved.id);

        self.resync_after_mutation().await;
        Ok(saved)
    }

    // ---- Historial ----

    pub fn history(&self, query: &HistoryQuery) -> Vec<HistoryRow<'_>> {
        history_service::history_rows(&self.bookings, &self.cars, query)
    }

    pub fn status_counts(&self) -> Vec<(String, usize)> {
        history_service::status_counts(&self.bookings)
    }

    /// Botón de acción rápida; no comprueba el estado actual
    pub async fn apply_quick_action(&mut self, booking_id: &str, action: QuickAction) -> Result<(), ClientError> {
        let status = action.target_status();
        self.api.update_booking_status(booking_id, &status).await?;
        log::info!("✅ Booking {} status changed to {}", booking_id, status);

        self.resync_after_mutation().await;
        Ok(())
    }

    /// Selector genérico: cualquier estado desde cualquier estado
    pub async fn change_booking_status(
        &mut self,
        booking_id: &str,
        new_status: &BookingStatus,
    ) -> Result<StatusChange, ClientError> {
        let current = self
            .bookings
            .iter()
            .find(|b| b.id == booking_id)
            .map(|b| &b.status);
        if current == Some(new_status) {
            return Ok(StatusChange::Unchanged);
        }

        self.api.update_booking_status(booking_id, new_status).await?;
        log::info!("✅ Booking {} status changed to {}", booking_id, new_status);

        self.resync_after_mutation().await;
        Ok(StatusChange::Updated)
    }

    /// Pedir el PDF al backend y decodificarlo
    pub async fn print_booking(&self, booking_id: &str) -> Result<PdfFile, DashboardError> {
        let data = self.api.generate_pdf(booking_id).await?;
        Ok(pdf_service::decode_pdf_data(&data)?)
    }

    // ---- Coches ----

    pub async fn add_car(&mut self, car: &NewCar) -> Result<Car, ClientError> {
        let created = self.api.add_car(car).await?;
        log::info!("✅ Car added: {}", created.id);

        self.resync_after_mutation().await;
        Ok(created)
    }

    pub async fn update_car_status(&mut self, car_id: &str, status: &CarStatus) -> Result<(), ClientError> {
        self.api.update_car_status(car_id, status).await?;
        log::info!("✅ Car {} status changed to {}", car_id, status);

        self.resync_after_mutation().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThemeColors;
    use crate::services::test_fixtures::{booking, car};
    use async_trait::async_trait;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        InitialData,
        SaveBooking(BookingFormData),
        AddCar(String),
        UpdateCarStatus(String, String),
        UpdateBookingStatus(String, String),
        GeneratePdf(String),
    }

    #[derive(Default)]
    struct FakeApi {
        data: Mutex<InitialData>,
        calls: Mutex<Vec<Call>>,
        fail_with: Mutex<Option<String>>,
        reload_fails: Mutex<bool>,
    }

    impl FakeApi {
        fn with_data(data: InitialData) -> Self {
            Self {
                data: Mutex::new(data),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push(call);
            match self.fail_with.lock().unwrap().clone() {
                Some(message) => Err(ClientError::Api(message)),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl BookingApi for FakeApi {
        async fn get_initial_data(&self) -> Result<InitialData, ClientError> {
            self.record(Call::InitialData)?;
            if *self.reload_fails.lock().unwrap() {
                return Err(ClientError::HttpStatus(503));
            }
            Ok(self.data.lock().unwrap().clone())
        }

        async fn get_config(&self) -> Result<SystemConfig, ClientError> {
            Ok(self.data.lock().unwrap().config.clone().unwrap_or_default())
        }

        async fn get_cars(&self) -> Result<Vec<Car>, ClientError> {
            Ok(self.data.lock().unwrap().cars.clone())
        }

        async fn get_bookings(&self) -> Result<Vec<Booking>, ClientError> {
            Ok(self.data.lock().unwrap().bookings.clone())
        }

        async fn save_booking(&self, form: &BookingFormData) -> Result<SavedBooking, ClientError> {
            self.record(Call::SaveBooking(form.clone()))?;
            Ok(SavedBooking {
                id: "BK-NEW".to_string(),
                extra: Default::default(),
            })
        }

        async fn add_car(&self, car: &NewCar) -> Result<Car, ClientError> {
            self.record(Call::AddCar(car.plate.clone()))?;
            Ok(Car {
                id: "CAR-NEW".to_string(),
                plate: car.plate.clone(),
                model: car.model.clone(),
                seats: car.seats,
                image_url: String::new(),
                status: CarStatus::available(),
            })
        }

        async fn update_car_status(&self, car_id: &str, status: &CarStatus) -> Result<(), ClientError> {
            self.record(Call::UpdateCarStatus(car_id.to_string(), status.to_string()))
        }

        async fn update_booking_status(
            &self,
            booking_id: &str,
            status: &BookingStatus,
        ) -> Result<(), ClientError> {
            self.record(Call::UpdateBookingStatus(booking_id.to_string(), status.to_string()))
        }

        async fn generate_pdf(&self, booking_id: &str) -> Result<crate::models::PdfData, ClientError> {
            self.record(Call::GeneratePdf(booking_id.to_string()))?;
            Ok(crate::models::PdfData {
                base64: STANDARD.encode(b"%PDF-1.4 test"),
                filename: format!("booking-{}.pdf", booking_id),
                pdf_url: None,
            })
        }
    }

    fn sample_data() -> InitialData {
        InitialData {
            config: Some(SystemConfig {
                system_name: "Fleet Desk".to_string(),
                theme_colors: Some(ThemeColors {
                    primary: Some("#123456".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            cars: vec![car("CAR001", "Available"), car("CAR002", "In Use")],
            bookings: vec![
                booking("BK-1", "Pending", Some("2025-01-01")),
                booking("BK-2", "Approved", Some("2025-01-02")),
            ],
        }
    }

    fn round_trip_form() -> BookingFormData {
        BookingFormData {
            car_id: "CAR001".to_string(),
            requester: "A".to_string(),
            department: "B".to_string(),
            destination: "C".to_string(),
            start_date: "2025-01-10".to_string(),
            end_date: "2025-01-12".to_string(),
            purpose: None,
            passengers: 2,
        }
    }

    #[tokio::test]
    async fn test_mutation_succeeds_when_reload_fails() {
        let mut controller = DashboardController::new(FakeApi::with_data(sample_data()));
        controller.load().await.unwrap();

        *controller.api().reload_fails.lock().unwrap() = true;
        controller.api().data.lock().unwrap().cars.clear();

        let saved = controller.submit_booking(&round_trip_form()).await.unwrap();
        assert_eq!(saved.id, "BK-NEW");

        // El estado previo a la recarga fallida se conserva
        assert_eq!(controller.cars(), sample_data().cars.as_slice());
        assert_eq!(controller.bookings(), sample_data().bookings.as_slice());
        assert_eq!(controller.stats().total_cars, 2);
        assert_eq!(
            controller.api().calls(),
            vec![Call::InitialData, Call::SaveBooking(round_trip_form()), Call::InitialData]
        );
    }

    #[tokio::test]
    async fn test_load_derives_stats_and_theme() {
        let mut controller = DashboardController::new(FakeApi::with_data(sample_data()));
        assert!(!controller.is_loaded());
        assert_eq!(controller.system_name(), "Car Booking System");

        controller.load().await.unwrap();

        assert!(controller.is_loaded());
        assert_eq!(controller.system_name(), "Fleet Desk");
        assert_eq!(controller.stats().available_cars, 1);
        assert_eq!(controller.stats().pending_bookings, 1);
        assert_eq!(controller.stats().active_bookings, 1);
        assert_eq!(controller.theme().primary, "#123456");
        assert_eq!(controller.theme().secondary, crate::models::theme::DEFAULT_SECONDARY);
        assert_eq!(controller.api().calls(), vec![Call::InitialData]);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_state() {
        let mut controller = DashboardController::new(FakeApi::with_data(sample_data()));
        controller.load().await.unwrap();

        *controller.api().fail_with.lock().unwrap() = Some("Invalid API key".to_string());
        let err = controller.resynchronize().await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid API key");
        assert_eq!(controller.cars().len(), 2);
        assert_eq!(controller.bookings().len(), 2);
        assert_eq!(controller.theme().primary, "#123456");
    }

    #[tokio::test]
    async fn test_submit_round_trip() {
        let mut controller = DashboardController::new(FakeApi::with_data(sample_data()));
        controller.load().await.unwrap();

        let saved = controller.submit_booking(&round_trip_form()).await.unwrap();

        assert_eq!(saved.id, "BK-NEW");
        assert_eq!(
            controller.api().calls(),
            vec![
                Call::InitialData,
                Call::SaveBooking(round_trip_form()),
                Call::InitialData,
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_submission_makes_no_call() {
        let mut controller = DashboardController::new(FakeApi::with_data(sample_data()));

        let mut form = round_trip_form();
        form.destination.clear();
        assert!(matches!(
            controller.submit_booking(&form).await,
            Err(BookingError::MissingFields(_))
        ));

        let mut form = round_trip_form();
        form.end_date = "2025-01-01".to_string();
        assert!(matches!(
            controller.submit_booking(&form).await,
            Err(BookingError::InvalidDates)
        ));

        assert!(controller.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_does_not_reload() {
        let api = FakeApi::with_data(sample_data());
        *api.fail_with.lock().unwrap() = Some("Car is not available".to_string());
        let mut controller = DashboardController::new(api);

        let err = controller.submit_booking(&round_trip_form()).await.unwrap_err();
        assert_eq!(err.to_string(), "Car is not available");
        assert_eq!(controller.api().calls(), vec![Call::SaveBooking(round_trip_form())]);
    }

    #[tokio::test]
    async fn test_select_car() {
        let mut controller = DashboardController::new(FakeApi::with_data(sample_data()));
        controller.load().await.unwrap();

        assert_eq!(controller.bookable_cars().len(), 1);
        assert_eq!(controller.select_car("CAR001").unwrap().car_id, "CAR001");
        assert!(matches!(
            controller.select_car("CAR002"),
            Err(BookingError::CarNotAvailable(_))
        ));
        assert!(matches!(
            controller.select_car("CAR404"),
            Err(BookingError::UnknownCar(_))
        ));
    }

    #[tokio::test]
    async fn test_generic_picker_is_permissive() {
        let mut data = sample_data();
        data.bookings.push(booking("BK-3", "Cancelled", None));
        let mut controller = DashboardController::new(FakeApi::with_data(data));
        controller.load().await.unwrap();

        let same = controller
            .change_booking_status("BK-1", &BookingStatus::pending())
            .await
            .unwrap();
        assert_eq!(same, StatusChange::Unchanged);

        // Cancelled -> Approved está permitido
        let changed = controller
            .change_booking_status("BK-3", &BookingStatus::approved())
            .await
            .unwrap();
        assert_eq!(changed, StatusChange::Updated);

        assert_eq!(
            controller.api().calls(),
            vec![
                Call::InitialData,
                Call::UpdateBookingStatus("BK-3".to_string(), "Approved".to_string()),
                Call::InitialData,
            ]
        );
    }

    #[tokio::test]
    async fn test_quick_action_reloads() {
        let mut controller = DashboardController::new(FakeApi::with_data(sample_data()));
        controller.load().await.unwrap();

        controller.apply_quick_action("BK-2", QuickAction::Complete).await.unwrap();

        let calls = controller.api().calls();
        assert_eq!(
            &calls[1..],
            &[
                Call::UpdateBookingStatus("BK-2".to_string(), "Completed".to_string()),
                Call::InitialData,
            ]
        );
    }

    #[tokio::test]
    async fn test_print_booking() {
        let controller = DashboardController::new(FakeApi::with_data(sample_data()));
        let file = controller.print_booking("123").await.unwrap();

        assert_eq!(file.filename, "booking-123.pdf");
        assert_eq!(file.bytes, b"%PDF-1.4 test");
    }

    #[tokio::test]
    async fn test_car_mutations_reload() {
        let mut controller = DashboardController::new(FakeApi::with_data(sample_data()));

        let new_car = NewCar {
            plate: "NEW-1".to_string(),
            model: "Honda".to_string(),
            seats: 5,
            image_url: None,
            status: None,
        };
        let created = controller.add_car(&new_car).await.unwrap();
        assert_eq!(created.plate, "NEW-1");

        controller
            .update_car_status("CAR002", &CarStatus::maintenance())
            .await
            .unwrap();

        assert_eq!(
            controller.api().calls(),
            vec![
                Call::AddCar("NEW-1".to_string()),
                Call::InitialData,
                Call::UpdateCarStatus("CAR002".to_string(), "Maintenance".to_string()),
                Call::InitialData,
            ]
        );
    }

    #[tokio::test]
    async fn test_views_and_summary() {
        let mut controller = DashboardController::new(FakeApi::with_data(sample_data()));
        controller.load().await.unwrap();

        assert_eq!(controller.current_view(), View::Dashboard);
        controller.set_view(View::History);
        assert_eq!(controller.current_view(), View::History);
        assert_eq!(View::Cars.label(), "Manage Cars");

        let summary = controller.dashboard_summary();
        assert_eq!(summary.recent_bookings[0].id, "BK-2");
        assert_eq!(summary.car_status[0].value, 1);

        let rows = controller.history(&HistoryQuery::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(controller.status_counts()[0], ("All".to_string(), 2));
    }
}
