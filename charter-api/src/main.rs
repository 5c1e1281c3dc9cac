use std::net::SocketAddr;
use std::sync::Arc;

use charter_api::{app, AppState};
use charter_booking::{BookingRepository, NotificationSender};
use charter_fleet::{CityRepository, VehicleRepository};
use charter_store::{
    seed, Config, ConsoleMailer, DbClient, SmtpMailer, StoreBookingRepository, StoreCityRepository,
    StoreVehicleRepository,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charter_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Charter API on port {}", config.server.port);

    charter_api::error::set_expose_error_detail(config.server.expose_error_detail);

    // Postgres connection and schema
    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let cities: Arc<dyn CityRepository> = Arc::new(StoreCityRepository::new(db.pool.clone()));
    let vehicles: Arc<dyn VehicleRepository> = Arc::new(StoreVehicleRepository::new(db.pool.clone()));
    let bookings: Arc<dyn BookingRepository> = Arc::new(StoreBookingRepository::new(db.pool.clone()));

    if config.database.seed_on_start {
        seed::apply(cities.as_ref(), vehicles.as_ref())
            .await
            .expect("Failed to seed the launch catalog");
    }

    // Notification transport; without SMTP settings emails go to the log
    let sender: Arc<dyn NotificationSender> = match SmtpMailer::from_config(&config.email) {
        Some(mailer) => Arc::new(mailer),
        None => {
            tracing::info!("SMTP not configured, notification emails will only be logged");
            Arc::new(ConsoleMailer::new())
        }
    };

    let admin_email = config.email.admin_email.clone();
    let state = AppState::new(cities, vehicles, bookings, sender, admin_email);
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
