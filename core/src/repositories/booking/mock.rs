//! Mock implementation of BookingRepository for testing

use async_trait::async_trait;
use hs_shared::{OverlapPolicy, Pagination};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingDetails};
use crate::domain::entities::room::RoomSummary;
use crate::domain::entities::user::UserSummary;
use crate::errors::DomainError;

use super::trait_::BookingRepository;

/// Mock booking repository for testing
///
/// Room and user summaries are not joined from other repositories;
/// register them explicitly to see them in listings.
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
    rooms: Arc<RwLock<HashMap<Uuid, RoomSummary>>>,
    users: Arc<RwLock<HashMap<Uuid, UserSummary>>>,
}

impl MockBookingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
            rooms: Arc::new(RwLock::new(HashMap::new())),
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Make a room summary available to `list_active`
    pub async fn register_room(&self, room: RoomSummary) {
        self.rooms.write().await.insert(room.id, room);
    }

    /// Make a user summary available to `list_active`
    pub async fn register_user(&self, user: UserSummary) {
        self.users.write().await.insert(user.id, user);
    }

    /// Insert a booking without any availability check
    pub async fn insert(&self, booking: Booking) {
        self.bookings.write().await.insert(booking.id, booking);
    }

    /// Snapshot of every stored booking, deleted ones included
    pub async fn all(&self) -> Vec<Booking> {
        self.bookings.read().await.values().cloned().collect()
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn list_active(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<BookingDetails>, DomainError> {
        let bookings = self.bookings.read().await;
        let rooms = self.rooms.read().await;
        let users = self.users.read().await;

        let mut active: Vec<&Booking> = bookings.values().filter(|b| !b.is_deleted).collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(active
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .map(|b| BookingDetails {
                booking: b.clone(),
                user: users.get(&b.user_id).cloned(),
                room: rooms.get(&b.room_id).cloned(),
            })
            .collect())
    }

    async fn count_active(&self) -> Result<u64, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.values().filter(|b| !b.is_deleted).count() as u64)
    }

    async fn create_exclusive(
        &self,
        booking: Booking,
        policy: OverlapPolicy,
    ) -> Result<Booking, DomainError> {
        // Check and insert under one write guard
        let mut bookings = self.bookings.write().await;
        ensure_free(&bookings, &booking, policy)?;

        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update_exclusive(
        &self,
        booking: Booking,
        policy: OverlapPolicy,
    ) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        if !bookings.contains_key(&booking.id) {
            return Err(DomainError::not_found("Booking"));
        }
        ensure_free(&bookings, &booking, policy)?;

        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        
        if !bookings.contains_key(&booking.id) {
            return Err(DomainError::not_found("Booking"));
        }
        
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }
}

/// Fails with the first other live booking on the room that conflicts
fn ensure_free(
    bookings: &HashMap<Uuid, Booking>,
    booking: &Booking,
    policy: OverlapPolicy,
) -> Result<(), DomainError> {
    let requested = booking.stay();

    match bookings.values().find(|b| {
        b.id != booking.id
            && !b.is_deleted
            && b.room_id == booking.room_id
            && b.stay().conflicts_with(&requested, policy)
    }) {
        Some(existing) => Err(DomainError::BookingConflict {
            booking_id: existing.id,
        }),
        None => Ok(()),
    }
}
