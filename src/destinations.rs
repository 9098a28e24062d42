//! Destination registry: fixed city-name to provider `dest_id` table
//!
//! Lookup is case-insensitive exact match; there is no fuzzy or partial
//! matching. The identifiers are Booking.com destination ids.

use crate::models::CityEntry;

/// Indian cities known to the assistant
pub const CITIES: &[CityEntry] = &[
    CityEntry { name: "Mumbai", dest_id: "-2092174" },
    CityEntry { name: "Delhi", dest_id: "-2106102" },
    CityEntry { name: "Bangalore", dest_id: "-2090174" },
    CityEntry { name: "Chennai", dest_id: "-2094192" },
    CityEntry { name: "Kolkata", dest_id: "-2097741" },
    CityEntry { name: "Hyderabad", dest_id: "-2098012" },
    CityEntry { name: "Pune", dest_id: "-2109889" },
    CityEntry { name: "Ahmedabad", dest_id: "-2083992" },
    CityEntry { name: "Jaipur", dest_id: "-2099632" },
    // Goa is a state; the provider maps it to Panaji
    CityEntry { name: "Goa", dest_id: "-2096147" },
    CityEntry { name: "Lucknow", dest_id: "-2104118" },
    CityEntry { name: "Chandigarh", dest_id: "-2091480" },
    CityEntry { name: "Kochi", dest_id: "-2101455" },
    CityEntry { name: "Indore", dest_id: "-2098908" },
    CityEntry { name: "Bhopal", dest_id: "-2087495" },
    CityEntry { name: "Patna", dest_id: "-2108911" },
    CityEntry { name: "Nagpur", dest_id: "-2106437" },
    CityEntry { name: "Surat", dest_id: "-2113537" },
    CityEntry { name: "Vadodara", dest_id: "-2116439" },
    CityEntry { name: "Coimbatore", dest_id: "-2092492" },
    CityEntry { name: "Visakhapatnam", dest_id: "-2117287" },
    CityEntry { name: "Thiruvananthapuram", dest_id: "-2114378" },
    CityEntry { name: "Agra", dest_id: "-2083478" },
    CityEntry { name: "Varanasi", dest_id: "-2116548" },
    CityEntry { name: "Guwahati", dest_id: "-2097172" },
    CityEntry { name: "Kanpur", dest_id: "-2100189" },
    CityEntry { name: "Madurai", dest_id: "-2104719" },
    CityEntry { name: "Mysore", dest_id: "-2106320" },
    CityEntry { name: "Udaipur", dest_id: "-2115890" },
    CityEntry { name: "Amritsar", dest_id: "-2084919" },
    CityEntry { name: "Shimla", dest_id: "-2111957" },
    CityEntry { name: "Dehradun", dest_id: "-2093300" },
    CityEntry { name: "Jodhpur", dest_id: "-2100135" },
    CityEntry { name: "Ranchi", dest_id: "-2110508" },
    CityEntry { name: "Raipur", dest_id: "-2110138" },
    CityEntry { name: "Bhubaneswar", dest_id: "-2087546" },
];

/// Resolve a city name to its registry entry, case-insensitively
#[must_use]
pub fn resolve(name: &str) -> Option<&'static CityEntry> {
    let name = name.trim();
    CITIES.iter().find(|city| city.name.eq_ignore_ascii_case(name))
}

/// First `count` city names, for the "unknown city" suggestion message
#[must_use]
pub fn sample_names(count: usize) -> Vec<String> {
    CITIES
        .iter()
        .take(count)
        .map(|city| city.name.to_string())
        .collect()
}
