use crate::domain::catalog::{Amount, Catalog, Room, RoomCategory, Service};
use crate::domain::session::Credentials;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Everything the process consumes at startup: the room/service catalog
/// and the single valid credential pair. Loaded once, never reloaded.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct HotelConfig {
    pub catalog: Catalog,
    pub credentials: Credentials,
}

impl HotelConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

impl Default for HotelConfig {
    /// The built-in demo hotel: five rooms over three categories and four
    /// flat-priced services.
    fn default() -> Self {
        let room = |id: &str, number: &str, category: RoomCategory, rate: i64| Room {
            id: id.to_string(),
            number: number.to_string(),
            category,
            rate: Amount::new(Decimal::from(rate)).expect("fixture rate is non-negative"),
            occupied: false,
        };
        let service = |id: &str, name: &str, price: i64| Service {
            id: id.to_string(),
            name: name.to_string(),
            price: Amount::new(Decimal::from(price)).expect("fixture price is non-negative"),
        };

        Self {
            catalog: Catalog {
                rooms: vec![
                    room("1", "101", RoomCategory::Standard, 100),
                    room("2", "102", RoomCategory::Standard, 100),
                    room("3", "201", RoomCategory::Deluxe, 200),
                    room("4", "202", RoomCategory::Deluxe, 200),
                    room("5", "301", RoomCategory::Suite, 300),
                ],
                services: vec![
                    service("1", "Room Service", 20),
                    service("2", "Laundry", 15),
                    service("3", "Spa Treatment", 50),
                    service("4", "Airport Transfer", 40),
                ],
            },
            credentials: Credentials {
                username: "admin".to_string(),
                password: "admin123".to_string(),
            },
        }
    }
}
