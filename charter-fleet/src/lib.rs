pub mod city;
pub mod repository;
pub mod seed;
pub mod vehicle;

pub use city::{City, CityRef, CityWithCount};
pub use repository::{CityRepository, VehicleFilter, VehicleRepository};
pub use vehicle::{NewVehicle, TransportMode, Vehicle, VehicleDetails, VehicleDraft, VehicleRef};
