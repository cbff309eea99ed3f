use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Postal address of a rental property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// Core rental listing data model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub address: Address,
    pub rent: f64,
    pub images: Vec<String>,
    pub facilities: Vec<String>,
    pub terms: String,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_contact: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a listing; the store assigns `id` and `created_at`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub address: Address,
    pub rent: f64,
    pub images: Vec<String>,
    pub facilities: Vec<String>,
    pub terms: String,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_contact: String,
}

impl NewListing {
    /// Validate the payload before it is handed to the store.
    ///
    /// The store trusts its caller, so every required-field check lives
    /// here; a failing payload never reaches the store.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("street", &self.address.street),
            ("city", &self.address.city),
            ("state", &self.address.state),
            ("pincode", &self.address.pincode),
            ("terms", &self.terms),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                bail!("missing required field: {name}");
            }
        }
        if self.rent < 0.0 || !self.rent.is_finite() {
            bail!("rent must be a non-negative number");
        }
        if self.facilities.is_empty() {
            bail!("at least one facility is required");
        }
        for (i, facility) in self.facilities.iter().enumerate() {
            if facility.trim().is_empty() {
                bail!("facility entries must not be empty");
            }
            if self.facilities[..i].contains(facility) {
                bail!("duplicate facility: {facility}");
            }
        }
        if self.images.len() > 5 {
            bail!("at most 5 images are allowed, got {}", self.images.len());
        }
        Ok(())
    }
}

/// A registered account; every registrant is an owner in this model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_owner: bool,
}

/// Sparse search predicate; `None` means no constraint on that field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    pub state: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub min_rent: Option<f64>,
    pub max_rent: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> NewListing {
        NewListing {
            title: "Modern 2BHK Apartment in Indiranagar".to_string(),
            description: "Two bedrooms and a spacious living room".to_string(),
            address: Address {
                street: "12th Main Road".to_string(),
                city: "Bangalore".to_string(),
                state: "Karnataka".to_string(),
                pincode: "560038".to_string(),
            },
            rent: 35000.0,
            images: vec!["/placeholder.svg".to_string()],
            facilities: vec!["2 Bedrooms".to_string(), "Power Backup".to_string()],
            terms: "10 months security deposit".to_string(),
            owner_id: "1".to_string(),
            owner_name: "Rahul Sharma".to_string(),
            owner_contact: "9876543210".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let mut d = draft();
        d.address.pincode = "  ".to_string();
        let err = d.validate().unwrap_err().to_string();
        assert_eq!(err, "missing required field: pincode");
    }

    #[test]
    fn negative_rent_is_rejected() {
        let mut d = draft();
        d.rent = -1.0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn zero_rent_is_allowed() {
        let mut d = draft();
        d.rent = 0.0;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn duplicate_facility_is_rejected() {
        let mut d = draft();
        d.facilities.push("2 Bedrooms".to_string());
        assert!(d.validate().is_err());
    }

    #[test]
    fn more_than_five_images_is_rejected() {
        let mut d = draft();
        d.images = (0..6).map(|i| format!("/img{i}.jpg")).collect();
        assert!(d.validate().is_err());
    }
}
