use crate::domain::bill::{Bill, BookingRequest};
use crate::domain::catalog::{Catalog, Room, Service};
use crate::domain::ports::{BillLedgerBox, RoomStoreBox};
use crate::domain::session::{Credentials, SessionGuard};
use crate::error::{DeskError, Result, ValidationError};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// The main entry point of the booking workflow.
///
/// `FrontDesk` owns the session guard, the catalog, and the storage
/// backends. Every operation runs to completion before the next begins;
/// storage calls are awaited within each operation, so ledger mutations
/// are totally ordered by the calling sequence.
pub struct FrontDesk {
    catalog: Catalog,
    session: RwLock<SessionGuard>,
    rooms: RoomStoreBox,
    ledger: BillLedgerBox,
    next_bill_id: AtomicU64,
}

impl FrontDesk {
    pub fn new(
        catalog: Catalog,
        credentials: Credentials,
        rooms: RoomStoreBox,
        ledger: BillLedgerBox,
    ) -> Self {
        Self {
            catalog,
            session: RwLock::new(SessionGuard::new(credentials)),
            rooms,
            ledger,
            next_bill_id: AtomicU64::new(1),
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> bool {
        let ok = self.session.write().await.login(username, password);
        if !ok {
            tracing::warn!("rejected login attempt");
        }
        ok
    }

    pub async fn logout(&self) {
        self.session.write().await.logout();
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    async fn ensure_authenticated(&self) -> Result<()> {
        if self.is_authenticated().await {
            Ok(())
        } else {
            Err(DeskError::NotAuthenticated)
        }
    }

    /// Books a room: validates the request, appends the resulting bill to
    /// the ledger, and flips the room's occupancy so a second booking of
    /// the same room is rejected.
    pub async fn book(&self, request: BookingRequest) -> Result<Bill> {
        self.ensure_authenticated().await?;

        let Some(mut room) = self.rooms.get(&request.room_number).await? else {
            tracing::warn!(room = %request.room_number, "booking for unknown room");
            return Err(ValidationError::UnknownRoom(request.room_number.clone()).into());
        };

        let id = self.next_bill_id.fetch_add(1, Ordering::Relaxed);
        let bill = Bill::from_request(id, &room, &request, &self.catalog.services)
            .inspect_err(|reason| {
                tracing::warn!(room = %room.number, %reason, "booking rejected");
            })?;

        self.ledger.append(bill.clone()).await?;
        room.occupied = true;
        self.rooms.store(room).await?;

        tracing::debug!(bill = bill.id, total = %bill.total.value(), "booking accepted");
        Ok(bill)
    }

    /// Transitions a bill pending→paid. Returns false for an unknown id or
    /// an already-paid bill; in both cases the ledger is left unchanged.
    pub async fn mark_paid(&self, bill_id: u64) -> Result<bool> {
        self.ensure_authenticated().await?;

        let Some(mut bill) = self.ledger.get(bill_id).await? else {
            tracing::warn!(bill = bill_id, "payment for unknown bill");
            return Ok(false);
        };
        if !bill.mark_paid() {
            return Ok(false);
        }
        self.ledger.update(bill).await?;

        tracing::debug!(bill = bill_id, "bill paid");
        Ok(true)
    }

    /// The ledger in insertion order, oldest first.
    pub async fn bills(&self) -> Result<Vec<Bill>> {
        self.ensure_authenticated().await?;
        self.ledger.all().await
    }

    /// Rooms with their current occupancy, in catalog order.
    pub async fn rooms(&self) -> Result<Vec<Room>> {
        self.ensure_authenticated().await?;
        self.rooms.all().await
    }

    pub async fn services(&self) -> Result<Vec<Service>> {
        self.ensure_authenticated().await?;
        Ok(self.catalog.services.clone())
    }
}
