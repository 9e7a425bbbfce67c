use crate::domain::catalog::{Amount, Room, Service};
use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What a guest asks for at the desk. Dates arrive already parsed, so an
/// unparseable date never reaches the validation chain.
#[derive(Debug, PartialEq, Clone)]
pub struct BookingRequest {
    pub room_number: String,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Service ids as given; duplicates are collapsed during validation.
    pub services: Vec<String>,
}

/// A record of one guest's stay, its services, computed total, and payment
/// status. Created once by `from_request`; the only mutation afterwards is
/// the pending→paid transition.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Bill {
    pub id: u64,
    pub guest_name: String,
    pub room_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub services: Vec<Service>,
    pub total: Amount,
    pub paid: bool,
}

impl Bill {
    /// Validates a request against a room and the service catalog and
    /// prices the stay. Pure: storing the bill and flipping the room's
    /// occupancy are the caller's responsibility.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// occupancy, guest name, date range, service membership.
    pub fn from_request(
        id: u64,
        room: &Room,
        request: &BookingRequest,
        catalog: &[Service],
    ) -> Result<Self, ValidationError> {
        if room.occupied {
            return Err(ValidationError::RoomOccupied(room.number.clone()));
        }

        let guest_name = request.guest_name.trim();
        if guest_name.is_empty() {
            return Err(ValidationError::EmptyGuestName);
        }

        let nights = (request.check_out - request.check_in).num_days();
        if nights < 1 {
            return Err(ValidationError::InvalidStay {
                check_in: request.check_in,
                check_out: request.check_out,
            });
        }

        // Set membership by service id, not value identity; duplicates in
        // the request collapse to one charge.
        let requested: BTreeSet<&str> = request.services.iter().map(String::as_str).collect();
        for id in &requested {
            if !catalog.iter().any(|s| s.id == *id) {
                return Err(ValidationError::UnknownService(id.to_string()));
            }
        }
        let services: Vec<Service> = catalog
            .iter()
            .filter(|s| requested.contains(s.id.as_str()))
            .cloned()
            .collect();

        let total = room.rate * nights + services.iter().map(|s| s.price).sum::<Amount>();

        Ok(Self {
            id,
            guest_name: guest_name.to_string(),
            room_number: room.number.clone(),
            check_in: request.check_in,
            check_out: request.check_out,
            services,
            total,
            paid: false,
        })
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Transitions pending→paid. Returns false if already paid; the bill
    /// is otherwise untouched, so a repeated call has no effect.
    pub fn mark_paid(&mut self) -> bool {
        if self.paid {
            false
        } else {
            self.paid = true;
            true
        }
    }
}
