//! Launch catalog: the four markets and their fleets. Applied once at
//! startup by the store's seeding routine when the tables are empty.

use crate::vehicle::TransportMode;

pub struct CitySeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub country: &'static str,
}

pub struct VehicleSeed {
    pub name: &'static str,
    pub category: TransportMode,
    pub capacity: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 6],
    pub image: &'static str,
    pub price_range: &'static str,
    pub city_slug: &'static str,
}

pub const CITIES: [CitySeed; 4] = [
    CitySeed { name: "London", slug: "london", country: "UK" },
    CitySeed { name: "Manchester", slug: "manchester", country: "UK" },
    CitySeed { name: "Budapest", slug: "budapest", country: "Hungary" },
    CitySeed { name: "Madrid", slug: "madrid", country: "Spain" },
];

/// London offers all four categories; the regional markets run buses and
/// cars only.
pub const VEHICLES: [VehicleSeed; 30] = [
    // London jets
    VehicleSeed {
        name: "Gulfstream G650",
        category: TransportMode::PrivateJet,
        capacity: "14-18 Passengers",
        description: "Ultra-long-range business jet with exceptional speed and luxury amenities for transcontinental flights.",
        features: ["Ultra-long Range", "High-speed Wi-Fi", "Full Galley", "Master Suite", "Conference Area", "Premium Entertainment"],
        image: "https://images.unsplash.com/photo-1540962351504-03099e0a754b?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £12,000/hour",
        city_slug: "london",
    },
    VehicleSeed {
        name: "Bombardier Global 7500",
        category: TransportMode::PrivateJet,
        capacity: "10-14 Passengers",
        description: "World's largest and longest-range business jet with four distinct living spaces and unmatched comfort.",
        features: ["Four Living Spaces", "Master Bedroom", "Full Kitchen", "Shower", "Satellite Communications", "Premium Sound System"],
        image: "https://images.unsplash.com/photo-1436491865332-7a61a109cc05?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £15,000/hour",
        city_slug: "london",
    },
    VehicleSeed {
        name: "Cessna Citation X+",
        category: TransportMode::PrivateJet,
        capacity: "8-12 Passengers",
        description: "Fastest civilian aircraft with cutting-edge technology and luxurious cabin for efficient business travel.",
        features: ["Fastest Speed", "Advanced Avionics", "Spacious Cabin", "Business Seating", "High-speed Internet", "Premium Catering"],
        image: "https://images.unsplash.com/photo-1556388158-158ea5ccacbd?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £8,500/hour",
        city_slug: "london",
    },
    // London helicopters
    VehicleSeed {
        name: "Airbus H175",
        category: TransportMode::Helicopter,
        capacity: "12-16 Passengers",
        description: "Super-medium twin-engine helicopter with exceptional safety features and luxury VIP configuration.",
        features: ["VIP Interior", "Panoramic Windows", "Advanced Safety Systems", "Noise Reduction", "Climate Control", "Premium Seating"],
        image: "https://images.unsplash.com/photo-1570710891163-6d3b5c47248b?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £3,200/hour",
        city_slug: "london",
    },
    VehicleSeed {
        name: "Leonardo AW139",
        category: TransportMode::Helicopter,
        capacity: "10-15 Passengers",
        description: "Medium twin-engine helicopter renowned for its versatility, safety, and luxurious passenger experience.",
        features: ["Twin Engine Safety", "Spacious Cabin", "Leather Interior", "Entertainment System", "Refreshment Center", "Professional Crew"],
        image: "https://images.unsplash.com/photo-1540979388789-6cee28a1cdc9?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £2,800/hour",
        city_slug: "london",
    },
    VehicleSeed {
        name: "Bell 429 GlobalRanger",
        category: TransportMode::Helicopter,
        capacity: "6-8 Passengers",
        description: "Light twin-engine helicopter with advanced glass cockpit and exceptional performance for executive transport.",
        features: ["Glass Cockpit", "Executive Seating", "Quiet Operation", "Advanced Navigation", "Luxury Amenities", "Scenic Routes"],
        image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £2,200/hour",
        city_slug: "london",
    },
    // London buses
    VehicleSeed {
        name: "Mercedes-Benz Tourismo",
        category: TransportMode::Bus,
        capacity: "45-55 Passengers",
        description: "Premium touring coach with exceptional comfort and advanced safety features for group transportation.",
        features: ["Reclining Seats", "Air Conditioning", "Entertainment System", "Wi-Fi", "Restroom", "Panoramic Windows"],
        image: "https://images.unsplash.com/photo-1570125909232-eb263c188f7e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £180/hour",
        city_slug: "london",
    },
    VehicleSeed {
        name: "Volvo 9700 Executive",
        category: TransportMode::Bus,
        capacity: "35-45 Passengers",
        description: "Executive coach with premium amenities and superior comfort for corporate events and luxury tours.",
        features: ["Executive Seating", "Conference Table", "Premium Sound", "Climate Control", "Refreshment Bar", "Professional Driver"],
        image: "https://images.unsplash.com/photo-1544620347-c4fd4a3d5957?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £220/hour",
        city_slug: "london",
    },
    VehicleSeed {
        name: "Setra TopClass S 516",
        category: TransportMode::Bus,
        capacity: "25-35 Passengers",
        description: "Luxury VIP coach with spacious interior and premium amenities for exclusive group transportation.",
        features: ["VIP Seating", "LED Lighting", "Premium Bar", "Entertainment Center", "Leather Interior", "Concierge Service"],
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £280/hour",
        city_slug: "london",
    },
    // London cars
    VehicleSeed {
        name: "Rolls-Royce Phantom",
        category: TransportMode::PrivateCar,
        capacity: "1-4 Passengers",
        description: "The pinnacle of automotive luxury with handcrafted excellence and unparalleled comfort.",
        features: ["Handcrafted Interior", "Starlight Headliner", "Champagne Cooler", "Massage Seats", "Bespoke Audio", "Concierge Service"],
        image: "https://images.unsplash.com/photo-1555215695-3004980ad54e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £350/hour",
        city_slug: "london",
    },
    VehicleSeed {
        name: "Bentley Mulsanne",
        category: TransportMode::PrivateCar,
        capacity: "1-4 Passengers",
        description: "British luxury sedan combining traditional craftsmanship with modern technology and performance.",
        features: ["Handcrafted Leather", "Veneer Trim", "Premium Audio", "Climate Comfort", "Privacy Glass", "Professional Chauffeur"],
        image: "https://images.unsplash.com/photo-1563720223185-11003d516935?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £280/hour",
        city_slug: "london",
    },
    VehicleSeed {
        name: "Mercedes-Benz S-Class",
        category: TransportMode::PrivateCar,
        capacity: "1-4 Passengers",
        description: "Executive sedan with cutting-edge technology and supreme comfort for business and leisure travel.",
        features: ["Executive Seating", "Advanced Safety", "Premium Sound", "Ambient Lighting", "Wireless Charging", "Refreshments"],
        image: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £150/hour",
        city_slug: "london",
    },
    // Manchester
    VehicleSeed {
        name: "Scania Touring HD",
        category: TransportMode::Bus,
        capacity: "40-50 Passengers",
        description: "Modern touring coach with excellent fuel efficiency and passenger comfort for regional travel.",
        features: ["Comfortable Seating", "Air Conditioning", "Wi-Fi", "USB Charging", "Luggage Space", "Professional Driver"],
        image: "https://images.unsplash.com/photo-1570125909232-eb263c188f7e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £160/hour",
        city_slug: "manchester",
    },
    VehicleSeed {
        name: "MAN Lion's Coach",
        category: TransportMode::Bus,
        capacity: "35-45 Passengers",
        description: "Reliable and comfortable coach perfect for group transportation and corporate events.",
        features: ["Ergonomic Seats", "Climate Control", "Entertainment", "Safety Systems", "Refreshment Area", "Experienced Driver"],
        image: "https://images.unsplash.com/photo-1544620347-c4fd4a3d5957?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £140/hour",
        city_slug: "manchester",
    },
    VehicleSeed {
        name: "Iveco Magelys Pro",
        category: TransportMode::Bus,
        capacity: "30-40 Passengers",
        description: "Premium coach with advanced comfort features and excellent road performance for luxury group travel.",
        features: ["Premium Comfort", "Advanced Suspension", "Quiet Operation", "Modern Interior", "Safety Features", "Professional Service"],
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £170/hour",
        city_slug: "manchester",
    },
    VehicleSeed {
        name: "BMW 7 Series",
        category: TransportMode::PrivateCar,
        capacity: "1-4 Passengers",
        description: "Executive sedan with innovative technology and luxurious comfort for premium transportation.",
        features: ["Executive Lounge", "Gesture Control", "Premium Audio", "Massage Function", "Ambient Lighting", "Professional Chauffeur"],
        image: "https://images.unsplash.com/photo-1563720223185-11003d516935?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £120/hour",
        city_slug: "manchester",
    },
    VehicleSeed {
        name: "Audi A8",
        category: TransportMode::PrivateCar,
        capacity: "1-4 Passengers",
        description: "Sophisticated luxury sedan with cutting-edge technology and refined comfort for discerning travelers.",
        features: ["Quattro Drive", "Virtual Cockpit", "Premium Interior", "Advanced Safety", "Comfort Seating", "Concierge Service"],
        image: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £110/hour",
        city_slug: "manchester",
    },
    VehicleSeed {
        name: "Jaguar XJ",
        category: TransportMode::PrivateCar,
        capacity: "1-4 Passengers",
        description: "British luxury sedan combining elegant design with dynamic performance and premium amenities.",
        features: ["British Luxury", "Premium Leather", "Advanced Infotainment", "Climate Comfort", "Refined Performance", "Professional Driver"],
        image: "https://images.unsplash.com/photo-1555215695-3004980ad54e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From £130/hour",
        city_slug: "manchester",
    },
    // Budapest
    VehicleSeed {
        name: "Mercedes-Benz Sprinter VIP",
        category: TransportMode::Bus,
        capacity: "16-20 Passengers",
        description: "Luxury VIP minibus with premium amenities for group transportation in Budapest.",
        features: ["VIP Seating", "Air Conditioning", "Wi-Fi", "Entertainment System", "Refreshments", "Professional Driver"],
        image: "https://images.unsplash.com/photo-1570125909232-eb263c188f7e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From €120/hour",
        city_slug: "budapest",
    },
    VehicleSeed {
        name: "Volvo 9900 Executive",
        category: TransportMode::Bus,
        capacity: "30-40 Passengers",
        description: "Executive touring coach with superior comfort for corporate events and city tours.",
        features: ["Executive Comfort", "Climate Control", "Premium Sound", "Panoramic Windows", "Luggage Space", "Tour Guide System"],
        image: "https://images.unsplash.com/photo-1544620347-c4fd4a3d5957?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From €150/hour",
        city_slug: "budapest",
    },
    VehicleSeed {
        name: "Neoplan Cityliner",
        category: TransportMode::Bus,
        capacity: "45-55 Passengers",
        description: "Premium touring coach perfect for large group transportation and sightseeing tours.",
        features: ["Comfortable Seating", "Advanced Suspension", "Entertainment", "Restroom", "Catering Service", "Multi-language Guide"],
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From €180/hour",
        city_slug: "budapest",
    },
    VehicleSeed {
        name: "Mercedes-Benz S-Class",
        category: TransportMode::PrivateCar,
        capacity: "1-4 Passengers",
        description: "Luxury sedan with cutting-edge technology and supreme comfort for Budapest business travel.",
        features: ["Executive Interior", "Advanced Safety", "Premium Audio", "Climate Comfort", "Wireless Charging", "Concierge Service"],
        image: "https://images.unsplash.com/photo-1563720223185-11003d516935?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From €80/hour",
        city_slug: "budapest",
    },
    VehicleSeed {
        name: "BMW 7 Series",
        category: TransportMode::PrivateCar,
        capacity: "1-4 Passengers",
        description: "Executive sedan with innovative technology and luxurious comfort for premium transportation.",
        features: ["Executive Lounge", "Gesture Control", "Premium Audio", "Massage Function", "Ambient Lighting", "Professional Chauffeur"],
        image: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From €75/hour",
        city_slug: "budapest",
    },
    VehicleSeed {
        name: "Audi A8 L",
        category: TransportMode::PrivateCar,
        capacity: "1-4 Passengers",
        description: "Sophisticated luxury sedan with extended wheelbase and refined comfort for discerning travelers.",
        features: ["Extended Wheelbase", "Quattro Drive", "Virtual Cockpit", "Premium Interior", "Advanced Safety", "Comfort Seating"],
        image: "https://images.unsplash.com/photo-1555215695-3004980ad54e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From €85/hour",
        city_slug: "budapest",
    },
    // Madrid
    VehicleSeed {
        name: "Irizar i8 Executive",
        category: TransportMode::Bus,
        capacity: "35-45 Passengers",
        description: "Premium executive coach with Spanish elegance and superior comfort for Madrid tours.",
        features: ["Spanish Design", "Premium Comfort", "Climate Control", "Entertainment System", "Wi-Fi", "Professional Service"],
        image: "https://images.unsplash.com/photo-1570125909232-eb263c188f7e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From €140/hour",
        city_slug: "madrid",
    },
    VehicleSeed {
        name: "Scania Touring HD",
        category: TransportMode::Bus,
        capacity: "40-50 Passengers",
        description: "Modern touring coach with excellent comfort and efficiency for Madrid group transportation.",
        features: ["Modern Design", "Comfortable Seating", "Air Conditioning", "USB Charging", "Luggage Space", "Tour Guide System"],
        image: "https://images.unsplash.com/photo-1544620347-c4fd4a3d5957?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From €130/hour",
        city_slug: "madrid",
    },
    VehicleSeed {
        name: "Mercedes-Benz Tourismo RHD",
        category: TransportMode::Bus,
        capacity: "48-55 Passengers",
        description: "Luxury touring coach with premium amenities perfect for Madrid sightseeing and corporate events.",
        features: ["Luxury Interior", "Panoramic Windows", "Premium Sound", "Restroom", "Catering Options", "Multi-language Support"],
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From €170/hour",
        city_slug: "madrid",
    },
    VehicleSeed {
        name: "Mercedes-Benz E-Class",
        category: TransportMode::PrivateCar,
        capacity: "1-4 Passengers",
        description: "Executive sedan combining elegance and performance for premium Madrid transportation.",
        features: ["Executive Comfort", "Advanced Technology", "Premium Audio", "Climate Control", "Safety Systems", "Professional Driver"],
        image: "https://images.unsplash.com/photo-1563720223185-11003d516935?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From €70/hour",
        city_slug: "madrid",
    },
    VehicleSeed {
        name: "BMW 5 Series",
        category: TransportMode::PrivateCar,
        capacity: "1-4 Passengers",
        description: "Business sedan with dynamic performance and luxury features for Madrid business travel.",
        features: ["Business Comfort", "Dynamic Performance", "Premium Interior", "Advanced Navigation", "Connectivity", "Concierge Service"],
        image: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From €65/hour",
        city_slug: "madrid",
    },
    VehicleSeed {
        name: "Lexus LS 500h",
        category: TransportMode::PrivateCar,
        capacity: "1-4 Passengers",
        description: "Hybrid luxury sedan with Japanese craftsmanship and eco-friendly performance for Madrid.",
        features: ["Hybrid Technology", "Japanese Craftsmanship", "Luxury Interior", "Eco-Friendly", "Advanced Safety", "Premium Service"],
        image: "https://images.unsplash.com/photo-1555215695-3004980ad54e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        price_range: "From €90/hour",
        city_slug: "madrid",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn london_carries_all_categories() {
        for mode in TransportMode::ALL {
            assert!(
                VEHICLES.iter().any(|v| v.city_slug == "london" && v.category == mode),
                "london is missing {mode}"
            );
        }
    }

    #[test]
    fn regional_markets_are_ground_only() {
        for seed in VEHICLES.iter().filter(|v| v.city_slug != "london") {
            assert!(
                matches!(seed.category, TransportMode::Bus | TransportMode::PrivateCar),
                "{} offers {} outside london",
                seed.name,
                seed.category
            );
        }
    }

    #[test]
    fn every_vehicle_references_a_seeded_city() {
        for seed in &VEHICLES {
            assert!(CITIES.iter().any(|c| c.slug == seed.city_slug));
        }
    }

    #[test]
    fn fleet_sizes_per_market() {
        let count = |slug: &str| VEHICLES.iter().filter(|v| v.city_slug == slug).count();
        assert_eq!(count("london"), 12);
        assert_eq!(count("manchester"), 6);
        assert_eq!(count("budapest"), 6);
        assert_eq!(count("madrid"), 6);
    }
}
