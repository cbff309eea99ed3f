pub mod facets;
pub mod query;

use crate::models::{Account, Listing, NewListing};
use chrono::Utc;
use tracing::info;

/// In-memory store for listings and accounts.
///
/// Both collections are append-only: nothing is ever updated, removed
/// or reordered, so iteration order is always insertion order.
#[derive(Debug, Default)]
pub struct ListingStore {
    listings: Vec<Listing>,
    accounts: Vec<Account>,
}

impl ListingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the fixed demo accounts
    pub fn seeded() -> Self {
        let accounts = vec![
            Account {
                id: "1".to_string(),
                name: "Rahul Sharma".to_string(),
                email: "rahul@example.com".to_string(),
                phone: "9876543210".to_string(),
                is_owner: true,
            },
            Account {
                id: "2".to_string(),
                name: "Priya Patel".to_string(),
                email: "priya@example.com".to_string(),
                phone: "9876543211".to_string(),
                is_owner: true,
            },
        ];
        Self {
            listings: Vec::new(),
            accounts,
        }
    }

    /// Store a new listing, assigning its id and creation timestamp.
    ///
    /// The payload is stored as-is; validation is the caller's job
    /// (see [`NewListing::validate`]).
    pub fn add_listing(&mut self, draft: NewListing) -> Listing {
        let listing = Listing {
            id: (self.listings.len() + 1).to_string(),
            title: draft.title,
            description: draft.description,
            address: draft.address,
            rent: draft.rent,
            images: draft.images,
            facilities: draft.facilities,
            terms: draft.terms,
            owner_id: draft.owner_id,
            owner_name: draft.owner_name,
            owner_contact: draft.owner_contact,
            created_at: Utc::now(),
        };
        info!("Stored listing {} ({})", listing.id, listing.title);
        self.listings.push(listing.clone());
        listing
    }

    /// Store a new account. Every registrant is an owner, and no
    /// duplicate-email check is made; login resolves the first match.
    pub fn add_account(&mut self, name: &str, email: &str, phone: &str) -> Account {
        let account = Account {
            id: (self.accounts.len() + 1).to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            is_owner: true,
        };
        info!("Stored account {} ({})", account.id, account.email);
        self.accounts.push(account.clone());
        account
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Look up a listing by id; a miss is `None`, not an error
    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// First account with the given email, in insertion order
    pub fn account_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.email == email)
    }

    /// All listings owned by the given account, in insertion order
    pub fn listings_for_owner(&self, owner_id: &str) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| l.owner_id == owner_id)
            .collect()
    }
}
