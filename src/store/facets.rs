//! Distinct location values for building cascading filter inputs.
//!
//! Each function re-scans the whole listing slice on every call; fine
//! at this scale, an index would be needed for anything larger.

use crate::models::Listing;
use std::collections::BTreeSet;

/// Every Indian state and union territory. The state select must offer
/// the full set even before any listing exists for them.
pub const ALL_STATES_AND_TERRITORIES: [&str; 35] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Lakshadweep",
    "Puducherry",
];

/// Union of the states present in the listings and the fixed reference
/// list, sorted ascending with duplicates removed
pub fn unique_states(listings: &[Listing]) -> Vec<String> {
    let mut states: BTreeSet<String> = listings
        .iter()
        .map(|l| l.address.state.clone())
        .collect();
    states.extend(ALL_STATES_AND_TERRITORIES.iter().map(|s| s.to_string()));
    states.into_iter().collect()
}

/// Distinct cities among listings in the given state, sorted ascending.
/// Data-driven only; an unknown state yields an empty vec.
pub fn unique_cities(listings: &[Listing], state: &str) -> Vec<String> {
    let cities: BTreeSet<String> = listings
        .iter()
        .filter(|l| l.address.state == state)
        .map(|l| l.address.city.clone())
        .collect();
    cities.into_iter().collect()
}

/// Distinct pincodes among listings matching both state and city,
/// sorted ascending
pub fn unique_pincodes(listings: &[Listing], state: &str, city: &str) -> Vec<String> {
    let pincodes: BTreeSet<String> = listings
        .iter()
        .filter(|l| l.address.state == state && l.address.city == city)
        .map(|l| l.address.pincode.clone())
        .collect();
    pincodes.into_iter().collect()
}
