//! # Seed Data
//!
//! The static catalog every session starts from.
//!
//! | id | name                | location  | ₹/night | beds | free | owner |
//! |----|---------------------|-----------|---------|------|------|-------|
//! | 1  | Sunrise Hostel      | Delhi     | 500     | 10   | 4    | owner |
//! | 2  | City Central Hostel | Mumbai    | 700     | 15   | 2    | owner |
//! | 3  | Student Haven       | Bangalore | 600     | 20   | 5    |       |
//! | 4  | Budget Stay         | Delhi     | 400     | 25   | 8    |       |
//! | 5  | Comfort Inn         | Chennai   | 550     | 12   | 3    |       |
//! | 6  | Urban Living        | Hyderabad | 650     | 18   | 0    |       |

use crate::price::Rupees;
use crate::roster::BedRoster;
use crate::types::Listing;

struct SeedListing {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    price: u32,
    amenities: &'static [&'static str],
    total_beds: u32,
    available_beds: u32,
    image: &'static str,
    owner: Option<&'static str>,
}

const SEED: [SeedListing; 6] = [
    SeedListing {
        id: "1",
        name: "Sunrise Hostel",
        location: "Delhi",
        price: 500,
        amenities: &["Wi-Fi", "AC", "Laundry", "Kitchen"],
        total_beds: 10,
        available_beds: 4,
        image: "https://images.unsplash.com/photo-1555854877-bab0e564b8d5?ixlib=rb-4.0.3&auto=format&fit=crop&w=1740&q=80",
        owner: Some("owner"),
    },
    SeedListing {
        id: "2",
        name: "City Central Hostel",
        location: "Mumbai",
        price: 700,
        amenities: &["Wi-Fi", "AC", "Study Room", "Common Area"],
        total_beds: 15,
        available_beds: 2,
        image: "https://images.unsplash.com/photo-1566665797739-1674de7a421a?ixlib=rb-4.0.3&auto=format&fit=crop&w=1074&q=80",
        owner: Some("owner"),
    },
    SeedListing {
        id: "3",
        name: "Student Haven",
        location: "Bangalore",
        price: 600,
        amenities: &["Wi-Fi", "Study Room", "Laundry", "Parking"],
        total_beds: 20,
        available_beds: 5,
        image: "https://images.unsplash.com/photo-1577896851867-2379275c3d6d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        owner: None,
    },
    SeedListing {
        id: "4",
        name: "Budget Stay",
        location: "Delhi",
        price: 400,
        amenities: &["Wi-Fi", "Common Area"],
        total_beds: 25,
        available_beds: 8,
        image: "https://images.unsplash.com/photo-1629794226066-349748040fb7?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        owner: None,
    },
    SeedListing {
        id: "5",
        name: "Comfort Inn",
        location: "Chennai",
        price: 550,
        amenities: &["Wi-Fi", "AC", "Laundry", "Kitchen", "Study Room"],
        total_beds: 12,
        available_beds: 3,
        image: "https://images.unsplash.com/photo-1520277739336-7bf67edfa768?ixlib=rb-4.0.3&auto=format&fit=crop&w=1632&q=80",
        owner: None,
    },
    SeedListing {
        id: "6",
        name: "Urban Living",
        location: "Hyderabad",
        price: 650,
        amenities: &["Wi-Fi", "AC", "Parking", "Kitchen", "Common Area"],
        total_beds: 18,
        available_beds: 0,
        image: "https://images.unsplash.com/photo-1560448204-603b3fc33ddc?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        owner: None,
    },
];

/// The six seed listings, in id order.
pub fn listings() -> Vec<Listing> {
    SEED.iter()
        .map(|s| Listing {
            id: s.id.to_string(),
            name: s.name.to_string(),
            location: s.location.to_string(),
            price: Rupees::new(s.price),
            amenities: s.amenities.iter().map(|a| a.to_string()).collect(),
            image: s.image.to_string(),
            owner: s.owner.map(str::to_string),
        })
        .collect()
}

/// One roster per seed listing, occupied from bed #1 upward.
pub fn rosters() -> Vec<BedRoster> {
    SEED.iter()
        .map(|s| BedRoster::seeded(s.id, s.total_beds, s.available_beds))
        .collect()
}
