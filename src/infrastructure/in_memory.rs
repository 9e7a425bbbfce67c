use crate::domain::bill::Bill;
use crate::domain::catalog::Room;
use crate::domain::ports::{BillLedger, RoomStore};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory room store, seeded from the catalog at startup.
///
/// Backed by `Arc<RwLock<Vec<Room>>>` so listing preserves catalog order;
/// at five rooms a linear scan beats any keyed structure.
#[derive(Default, Clone)]
pub struct InMemoryRoomStore {
    rooms: Arc<RwLock<Vec<Room>>>,
}

impl InMemoryRoomStore {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms: Arc::new(RwLock::new(rooms)),
        }
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn store(&self, room: Room) -> Result<()> {
        let mut rooms = self.rooms.write().await;
        match rooms.iter_mut().find(|r| r.number == room.number) {
            Some(existing) => *existing = room,
            None => rooms.push(room),
        }
        Ok(())
    }

    async fn get(&self, number: &str) -> Result<Option<Room>> {
        let rooms = self.rooms.read().await;
        Ok(rooms.iter().find(|r| r.number == number).cloned())
    }

    async fn all(&self) -> Result<Vec<Room>> {
        let rooms = self.rooms.read().await;
        Ok(rooms.clone())
    }
}

/// A thread-safe in-memory bill ledger, insertion order preserved.
#[derive(Default, Clone)]
pub struct InMemoryBillLedger {
    bills: Arc<RwLock<Vec<Bill>>>,
}

impl InMemoryBillLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BillLedger for InMemoryBillLedger {
    async fn append(&self, bill: Bill) -> Result<()> {
        let mut bills = self.bills.write().await;
        debug_assert!(
            bills.iter().all(|b| b.id != bill.id),
            "bill id {} already in ledger",
            bill.id
        );
        bills.push(bill);
        Ok(())
    }

    async fn update(&self, bill: Bill) -> Result<()> {
        let mut bills = self.bills.write().await;
        if let Some(existing) = bills.iter_mut().find(|b| b.id == bill.id) {
            *existing = bill;
        }
        Ok(())
    }

    async fn get(&self, id: u64) -> Result<Option<Bill>> {
        let bills = self.bills.read().await;
        Ok(bills.iter().find(|b| b.id == id).cloned())
    }

    async fn all(&self) -> Result<Vec<Bill>> {
        let bills = self.bills.read().await;
        Ok(bills.clone())
    }
}
