mod models;
mod session;
mod store;

use models::{Address, NewListing, SearchFilters};
use session::{FileSlot, SessionManager};
use store::{facets, query, ListingStore};
use tracing::{info, Level};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Rent Radar - listing repository demo");
    info!("========================================");
    info!("");

    let mut store = ListingStore::seeded();
    let mut session = SessionManager::restore(FileSlot::new("currentUser.json"))?;

    // Log in as a seeded owner unless a session survived a restart
    if session.current().is_none() {
        session.login(&store, "rahul@example.com", "password")?;
    }
    let owner = session
        .current()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no active session after seeded login"))?;

    // Create a few listings through the validated path
    let drafts = seed_listings(&owner.id, &owner.name, &owner.phone);
    for draft in drafts {
        draft.validate()?;
        store.add_listing(draft);
    }

    info!("Seeded {} listings", store.listings().len());
    info!("");

    // Cascading facets, the way the filter UI would walk them
    let states = facets::unique_states(store.listings());
    info!("{} selectable states", states.len());
    for city in facets::unique_cities(store.listings(), "Maharashtra") {
        let pincodes = facets::unique_pincodes(store.listings(), "Maharashtra", &city);
        info!("Maharashtra / {}: pincodes {}", city, pincodes.join(", "));
    }
    info!("");

    // Filter query: Karnataka listings in a rent band
    let filters = SearchFilters {
        state: Some("Karnataka".to_string()),
        min_rent: Some(30000.0),
        max_rent: Some(40000.0),
        ..Default::default()
    };
    let hits = query::filter_listings(store.listings(), &filters);

    info!("✅ {} listings match the Karnataka 30k-40k band\n", hits.len());
    for (i, listing) in hits.iter().enumerate() {
        println!("{}. {} (Rs {}/month)", i + 1, listing.title, listing.rent);
        println!(
            "   {}, {}, {} {}",
            listing.address.street, listing.address.city, listing.address.state,
            listing.address.pincode
        );
        println!("   Facilities: {}", listing.facilities.join(", "));
        println!("   Owner: {} ({})", listing.owner_name, listing.owner_contact);
        println!();
    }

    // Save the filtered results
    let hits: Vec<_> = hits.into_iter().cloned().collect();
    let json = serde_json::to_string_pretty(&hits)?;
    std::fs::write("filtered_listings.json", json)?;
    info!("💾 Saved filtered listings to filtered_listings.json");
    info!("💾 Session persisted for {} in currentUser.json", owner.email);

    Ok(())
}

fn seed_listings(owner_id: &str, owner_name: &str, owner_contact: &str) -> Vec<NewListing> {
    let base = |title: &str, description: &str, address: Address, rent: f64, facilities: &[&str], terms: &str| NewListing {
        title: title.to_string(),
        description: description.to_string(),
        address,
        rent,
        images: vec!["/placeholder.svg".to_string()],
        facilities: facilities.iter().map(|f| f.to_string()).collect(),
        terms: terms.to_string(),
        owner_id: owner_id.to_string(),
        owner_name: owner_name.to_string(),
        owner_contact: owner_contact.to_string(),
    };

    vec![
        base(
            "Modern 2BHK Apartment in Indiranagar",
            "Beautiful modern apartment with 2 bedrooms and a spacious living room, located in the heart of Indiranagar.",
            Address {
                street: "12th Main Road".to_string(),
                city: "Bangalore".to_string(),
                state: "Karnataka".to_string(),
                pincode: "560038".to_string(),
            },
            35000.0,
            &["2 Bedrooms", "2 Bathrooms", "Modular Kitchen", "Power Backup", "Security"],
            "10 months security deposit. Family preferred. No pets allowed.",
        ),
        base(
            "Spacious 1BHK near Metro",
            "Well-maintained 1BHK apartment with excellent connectivity, walking distance to metro station.",
            Address {
                street: "Linking Road".to_string(),
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
                pincode: "400054".to_string(),
            },
            28000.0,
            &["1 Bedroom", "1 Bathroom", "Semi-furnished", "24/7 Water Supply"],
            "3 months deposit. Working professionals preferred.",
        ),
        base(
            "Premium 2BHK with Sea View",
            "Luxurious 2BHK apartment with stunning sea view and modern amenities.",
            Address {
                street: "Marine Drive".to_string(),
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
                pincode: "400020".to_string(),
            },
            65000.0,
            &["2 Bedrooms", "2 Bathrooms", "Sea View", "Gym", "Swimming Pool"],
            "Corporate lease preferred. 12 months deposit required.",
        ),
    ]
}
