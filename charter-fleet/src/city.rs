use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A served metropolitan market. Cities gate which vehicles and transport
/// modes can be booked; they are created by seeding and never mutated by
/// the booking workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    /// Lowercase, unique. The lookup key for all slug-based routes.
    pub slug: String,
    pub country: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl City {
    pub fn new(name: impl Into<String>, slug: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            slug: slug.into().to_lowercase(),
            country: country.into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> CityRef {
        CityRef {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// Minimal city reference embedded in vehicle and booking payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRef {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// City plus its number of active vehicles, as shown in the public list.
#[derive(Debug, Clone)]
pub struct CityWithCount {
    pub city: City,
    pub vehicle_count: i64,
}
