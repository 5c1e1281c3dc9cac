//! Persistence and delivery adapters: Postgres repositories, the seed
//! catalog loader, SMTP/console mailers and application configuration.

pub mod app_config;
pub mod booking_repo;
pub mod city_repo;
pub mod database;
pub mod mailer;
pub mod memory;
pub mod seed;
pub mod vehicle_repo;

pub use app_config::Config;
pub use booking_repo::StoreBookingRepository;
pub use city_repo::StoreCityRepository;
pub use database::DbClient;
pub use mailer::{ConsoleMailer, SmtpMailer};
pub use memory::MemoryStore;
pub use vehicle_repo::StoreVehicleRepository;
