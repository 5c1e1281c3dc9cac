use crate::city::CityRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Transport category a vehicle belongs to. The same enumeration classifies
/// booking requests, so a request can target a category without naming a
/// specific vehicle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Helicopter,
    PrivateJet,
    Bus,
    PrivateCar,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Helicopter,
        TransportMode::PrivateJet,
        TransportMode::Bus,
        TransportMode::PrivateCar,
    ];

    /// Wire form, matching the stored column value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Helicopter => "HELICOPTER",
            TransportMode::PrivateJet => "PRIVATE_JET",
            TransportMode::Bus => "BUS",
            TransportMode::PrivateCar => "PRIVATE_CAR",
        }
    }

    pub fn parse(value: &str) -> Option<TransportMode> {
        match value {
            "HELICOPTER" => Some(TransportMode::Helicopter),
            "PRIVATE_JET" => Some(TransportMode::PrivateJet),
            "BUS" => Some(TransportMode::Bus),
            "PRIVATE_CAR" => Some(TransportMode::PrivateCar),
            _ => None,
        }
    }

    /// Human-readable service name used in notification emails.
    pub fn display_name(&self) -> &'static str {
        match self {
            TransportMode::Helicopter => "Helicopter Charter",
            TransportMode::PrivateJet => "Private Jet",
            TransportMode::Bus => "Executive Bus",
            TransportMode::PrivateCar => "Private Car",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chargeable asset offered in exactly one city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub category: TransportMode,
    /// Free-text passenger capacity, e.g. "10-14 Passengers".
    pub capacity: String,
    pub description: String,
    pub features: Vec<String>,
    /// Opaque image URL; the API never dereferences it.
    pub image: String,
    pub price_range: String,
    pub is_active: bool,
    pub city_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn summary(&self) -> VehicleRef {
        VehicleRef {
            id: self.id,
            name: self.name.clone(),
            category: self.category,
        }
    }
}

/// Minimal vehicle reference embedded in booking payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRef {
    pub id: Uuid,
    pub name: String,
    pub category: TransportMode,
}

/// Vehicle together with the owning city reference, as listed publicly.
#[derive(Debug, Clone)]
pub struct VehicleDetails {
    pub vehicle: Vehicle,
    pub city: CityRef,
}

// =============================================================================
// Administrative drafts
// =============================================================================

/// Raw create/update payload for the vehicle admin endpoints. Every field is
/// optional at the wire so missing values surface as rule messages rather
/// than body-rejection errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDraft {
    pub name: Option<String>,
    pub category: Option<String>,
    pub capacity: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub image: Option<String>,
    pub price_range: Option<String>,
    pub is_active: Option<bool>,
    pub city_id: Option<String>,
}

/// A draft that passed validation, ready to become a [`Vehicle`].
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub name: String,
    pub category: TransportMode,
    pub capacity: String,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
    pub price_range: String,
    pub is_active: bool,
    pub city_id: Uuid,
}

impl VehicleDraft {
    /// Check every rule and collect all violations; a draft is only usable
    /// when the whole list passes.
    pub fn validate(self) -> Result<NewVehicle, Vec<String>> {
        let mut errors = Vec::new();

        let name = self.name.as_deref().unwrap_or("").trim().to_string();
        if !(2..=100).contains(&name.chars().count()) {
            errors.push("Vehicle name must be between 2 and 100 characters".to_string());
        }

        let category = self.category.as_deref().and_then(TransportMode::parse);
        if category.is_none() {
            errors.push("Category must be one of: HELICOPTER, PRIVATE_JET, BUS, PRIVATE_CAR".to_string());
        }

        let capacity = self.capacity.as_deref().unwrap_or("").trim().to_string();
        if !(1..=50).contains(&capacity.chars().count()) {
            errors.push("Capacity is required".to_string());
        }

        let description = self.description.as_deref().unwrap_or("").trim().to_string();
        if !(10..=1000).contains(&description.chars().count()) {
            errors.push("Description must be between 10 and 1000 characters".to_string());
        }

        if self.features.is_none() {
            errors.push("Features must be an array".to_string());
        }

        // Absent image is stored as an empty string; a present one must at
        // least carry an http(s) scheme.
        let image = self.image.unwrap_or_default().trim().to_string();
        if !image.is_empty() && !(image.starts_with("http://") || image.starts_with("https://")) {
            errors.push("Image must be a valid URL".to_string());
        }

        let price_range = self.price_range.as_deref().unwrap_or("").trim().to_string();
        if !(1..=100).contains(&price_range.chars().count()) {
            errors.push("Price range is required".to_string());
        }

        if self.is_active.is_none() {
            errors.push("isActive must be a boolean".to_string());
        }

        let city_id = self.city_id.as_deref().and_then(|raw| Uuid::parse_str(raw.trim()).ok());
        if city_id.is_none() {
            errors.push("Valid city ID is required".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewVehicle {
            name,
            category: category.unwrap_or(TransportMode::PrivateCar),
            capacity,
            description,
            features: self.features.unwrap_or_default(),
            image,
            price_range,
            is_active: self.is_active.unwrap_or(true),
            city_id: city_id.unwrap_or_else(Uuid::nil),
        })
    }
}

impl NewVehicle {
    /// Materialize as a fresh vehicle with a generated id.
    pub fn into_vehicle(self) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            name: self.name,
            category: self.category,
            capacity: self.capacity,
            description: self.description,
            features: self.features,
            image: self.image,
            price_range: self.price_range,
            is_active: self.is_active,
            city_id: self.city_id,
            created_at: Utc::now(),
        }
    }

    /// Materialize as a replacement for an existing vehicle, keeping its
    /// identity and creation time.
    pub fn apply_to(self, existing: &Vehicle) -> Vehicle {
        Vehicle {
            id: existing.id,
            name: self.name,
            category: self.category,
            capacity: self.capacity,
            description: self.description,
            features: self.features,
            image: self.image,
            price_range: self.price_range,
            is_active: self.is_active,
            city_id: self.city_id,
            created_at: existing.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> VehicleDraft {
        serde_json::from_value(serde_json::json!({
            "name": "Rolls-Royce Phantom",
            "category": "PRIVATE_CAR",
            "capacity": "1-4 Passengers",
            "description": "The pinnacle of automotive luxury with handcrafted excellence.",
            "features": ["Handcrafted Interior", "Massage Seats"],
            "image": "https://images.example.com/phantom.jpg",
            "priceRange": "From £350/hour",
            "isActive": true,
            "cityId": Uuid::new_v4().to_string(),
        }))
        .unwrap()
    }

    #[test]
    fn transport_mode_round_trips_through_wire_form() {
        for mode in TransportMode::ALL {
            assert_eq!(TransportMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(TransportMode::parse("SUBMARINE"), None);
    }

    #[test]
    fn transport_mode_serializes_screaming_snake() {
        let json = serde_json::to_string(&TransportMode::PrivateJet).unwrap();
        assert_eq!(json, "\"PRIVATE_JET\"");
    }

    #[test]
    fn valid_draft_materializes() {
        let vehicle = full_draft().validate().unwrap().into_vehicle();
        assert_eq!(vehicle.category, TransportMode::PrivateCar);
        assert!(vehicle.is_active);
        assert_eq!(vehicle.features.len(), 2);
    }

    #[test]
    fn draft_collects_every_violation() {
        let errors = VehicleDraft::default().validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("Vehicle name")));
        assert!(errors.iter().any(|e| e.contains("Category")));
        assert!(errors.iter().any(|e| e.contains("Capacity")));
        assert!(errors.iter().any(|e| e.contains("Description")));
        assert!(errors.iter().any(|e| e.contains("Features")));
        assert!(errors.iter().any(|e| e.contains("Price range")));
        assert!(errors.iter().any(|e| e.contains("isActive")));
        assert!(errors.iter().any(|e| e.contains("city ID")));
    }

    #[test]
    fn draft_rejects_non_http_image() {
        let mut draft = full_draft();
        draft.image = Some("ftp://example.com/phantom.jpg".to_string());
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors, vec!["Image must be a valid URL".to_string()]);
    }

    #[test]
    fn draft_allows_missing_image() {
        let mut draft = full_draft();
        draft.image = None;
        let vehicle = draft.validate().unwrap().into_vehicle();
        assert_eq!(vehicle.image, "");
    }

    #[test]
    fn apply_to_keeps_identity() {
        let original = full_draft().validate().unwrap().into_vehicle();
        let mut draft = full_draft();
        draft.name = Some("Bentley Mulsanne".to_string());
        draft.city_id = Some(original.city_id.to_string());
        let updated = draft.validate().unwrap().apply_to(&original);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.name, "Bentley Mulsanne");
    }
}
