use super::bill::Bill;
use super::catalog::Room;
use crate::error::Result;
use async_trait::async_trait;

pub type RoomStoreBox = Box<dyn RoomStore>;
pub type BillLedgerBox = Box<dyn BillLedger>;

#[async_trait]
pub trait RoomStore: Send + Sync {
    async fn store(&self, room: Room) -> Result<()>;
    async fn get(&self, number: &str) -> Result<Option<Room>>;
    /// Rooms in catalog order.
    async fn all(&self) -> Result<Vec<Room>>;
}

/// The ordered collection of all bills, oldest first. Bills are only ever
/// appended or updated in place; there is no deletion.
#[async_trait]
pub trait BillLedger: Send + Sync {
    /// Adds to the end. Ids are allocated monotonically by the front desk,
    /// so a collision is an invariant violation, not a user error.
    async fn append(&self, bill: Bill) -> Result<()>;
    /// Replaces the stored bill with the same id, keeping its position.
    async fn update(&self, bill: Bill) -> Result<()>;
    async fn get(&self, id: u64) -> Result<Option<Bill>>;
    /// A snapshot in insertion order; re-querying reflects current state.
    async fn all(&self) -> Result<Vec<Bill>>;
}
