//! Pickup addresses and trails around Bedford, Sackville and Beaver Bank.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Client Pickup Addresses
// ============================================================================

pub const BEDFORD_PICKUPS: &[Location] = &[
    Location::new("Oakmount Drive", 44.7321, -63.6841),
    Location::new("Fernleigh Court", 44.7412, -63.6723),
    Location::new("Shore Drive", 44.7265, -63.6612),
    Location::new("Meadowbrook Drive", 44.7218, -63.6765),
    Location::new("Hammonds Plains Road", 44.7298, -63.6952),
    Location::new("Southgate Drive", 44.7080, -63.6731),
];

pub const SACKVILLE_PICKUPS: &[Location] = &[
    Location::new("Glendale Drive", 44.7643, -63.6534),
    Location::new("Cobequid Road", 44.7789, -63.6412),
    Location::new("Sackville Drive", 44.7702, -63.6668),
    Location::new("Beaverbank Road South", 44.7851, -63.6580),
    Location::new("Millwood Drive", 44.7688, -63.7021),
    Location::new("Old Sackville Road", 44.7564, -63.6891),
];

pub const BEAVER_BANK_PICKUPS: &[Location] = &[
    Location::new("Windgate Drive", 44.8234, -63.5923),
    Location::new("Kinsac Road", 44.8123, -63.5834),
    Location::new("Beaver Bank Road", 44.8341, -63.6102),
    Location::new("Majestic Avenue", 44.8052, -63.6040),
    Location::new("Stonemount Crescent", 44.8175, -63.6211),
    Location::new("Lakeview Road", 44.8420, -63.5998),
];

// ============================================================================
// Hiking Trails
// ============================================================================

/// (name, region, location)
pub const TRAILS: &[(&str, &str, Location)] = &[
    ("Blue Mountain-Birch Cove Lakes", "Bedford", Location::new("Blue Mountain", 44.6884, -63.7064)),
    ("Hemlock Ravine Park", "Bedford", Location::new("Hemlock Ravine", 44.6845, -63.6531)),
    ("Shubenacadie Canal Trail", "Sackville", Location::new("Canal Trail", 44.7394, -63.6732)),
    ("Silver Mine Trails", "Beaver Bank", Location::new("Silver Mine", 44.8123, -63.5892)),
    ("Springfield Lake", "Sackville", Location::new("Springfield Lake", 44.7742, -63.6234)),
];

/// Every pickup address.
pub fn all_pickups() -> Vec<Location> {
    let mut all = Vec::with_capacity(18);
    all.extend_from_slice(BEDFORD_PICKUPS);
    all.extend_from_slice(SACKVILLE_PICKUPS);
    all.extend_from_slice(BEAVER_BANK_PICKUPS);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickups_in_halifax_area() {
        for loc in all_pickups() {
            assert!(loc.lat > 44.6 && loc.lat < 44.9, "{} lat out of range: {}", loc.name, loc.lat);
            assert!(loc.lng > -63.8 && loc.lng < -63.5, "{} lng out of range: {}", loc.name, loc.lng);
        }
    }
}
