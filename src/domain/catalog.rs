use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Represents a non-negative monetary value.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific rules
/// and provide type safety for price calculations.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(ValidationError::NegativeAmount)
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Scales a nightly rate by a stay length.
impl Mul<i64> for Amount {
    type Output = Self;
    fn mul(self, nights: i64) -> Self::Output {
        Self(self.0 * Decimal::from(nights))
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Standard,
    Deluxe,
    Suite,
}

/// A bookable room. Occupancy is the only mutable field; it is flipped by
/// the front desk when a booking for the room is accepted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Room {
    pub id: String,
    /// Display number, e.g. "101". Used as the booking key.
    pub number: String,
    pub category: RoomCategory,
    pub rate: Amount,
    #[serde(default)]
    pub occupied: bool,
}

/// An add-on service with a flat price, independent of stay length.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: Amount,
}

/// The fixed reference data: ordered rooms and services, loaded once at
/// startup and never mutated through the catalog itself.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Catalog {
    pub rooms: Vec<Room>,
    pub services: Vec<Service>,
}

impl Catalog {
    pub fn room(&self, number: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }
}
