//! Filtering of the listing collection by a sparse predicate.

use crate::models::{Listing, SearchFilters};
use tracing::debug;

/// Wildcard the select UI sends when the pincode filter is unset
const ALL_PINCODES: &str = "all-pincodes";

/// Keep every listing matching all present filter fields, preserving
/// the collection order.
///
/// Empty-string location values and the `"all-pincodes"` wildcard are
/// treated as absent. A rent bound of zero is also treated as absent;
/// a genuine zero floor is indistinguishable from "unset", a quirk
/// kept for compatibility with the select/slider UI.
pub fn filter_listings<'a>(listings: &'a [Listing], filters: &SearchFilters) -> Vec<&'a Listing> {
    let result: Vec<&Listing> = listings
        .iter()
        .filter(|listing| matches_filters(listing, filters))
        .collect();
    debug!(
        "Filtered {} of {} listings ({:?})",
        result.len(),
        listings.len(),
        filters
    );
    result
}

fn matches_filters(listing: &Listing, filters: &SearchFilters) -> bool {
    if let Some(state) = present(&filters.state) {
        if listing.address.state != state {
            return false;
        }
    }
    if let Some(city) = present(&filters.city) {
        if listing.address.city != city {
            return false;
        }
    }
    if let Some(pincode) = present(&filters.pincode) {
        if pincode != ALL_PINCODES && listing.address.pincode != pincode {
            return false;
        }
    }
    if let Some(min_rent) = filters.min_rent.filter(|&r| r != 0.0) {
        if listing.rent < min_rent {
            return false;
        }
    }
    if let Some(max_rent) = filters.max_rent.filter(|&r| r != 0.0) {
        if listing.rent > max_rent {
            return false;
        }
    }
    true
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Case-insensitive substring match over title, description, city and
/// state. Callers compose this as a second pass over an already
/// filtered sequence.
pub fn matches_query(listing: &Listing, query: &str) -> bool {
    let query = query.to_lowercase();
    listing.title.to_lowercase().contains(&query)
        || listing.description.to_lowercase().contains(&query)
        || listing.address.city.to_lowercase().contains(&query)
        || listing.address.state.to_lowercase().contains(&query)
}
