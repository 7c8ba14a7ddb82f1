//! Booking service: availability checks, pricing and status rules.
//!
//! A booking is accepted only for a bookable room, a future stay with
//! check-in before check-out, and no conflicting non-deleted booking on the
//! same room. The stored price is always recomputed from the room's hourly
//! rate; the client's figure is only sanity-checked.

use std::sync::Arc;

use chrono::Utc;
use hs_shared::{Page, Pagination};
use uuid::Uuid;

use crate::domain::entities::booking::{
    Booking, BookingDetails, BookingPatch, BookingRequest, BookingStatus,
};
use crate::domain::entities::room::RoomStatus;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, RoomRepository, UserRepository};

use super::config::BookingServiceConfig;

/// Service for creating and maintaining bookings
pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    rooms: Arc<dyn RoomRepository>,
    users: Arc<dyn UserRepository>,
    config: BookingServiceConfig,
}

impl BookingService {
    /// Create a new booking service
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        rooms: Arc<dyn RoomRepository>,
        users: Arc<dyn UserRepository>,
        config: BookingServiceConfig,
    ) -> Self {
        Self {
            bookings,
            rooms,
            users,
            config,
        }
    }

    /// Validate, price and persist a new booking
    ///
    /// # Errors
    /// * `NotFound` - The guest or the room does not exist
    /// * `BusinessRule` - The room is occupied or deleted
    /// * `Validation` - Dates, price or status are unacceptable
    /// * `BookingConflict` - Another booking already holds the room
    pub async fn create_booking(&self, request: BookingRequest) -> DomainResult<Booking> {
        self.users
            .find_by_id(request.user_id)
            .await?
            .filter(|u| u.active)
            .ok_or_else(|| DomainError::not_found("User"))?;

        let room = self
            .rooms
            .find_by_id(request.room_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Room"))?;

        if room.status == RoomStatus::Occupied {
            return Err(DomainError::business_rule("Room is not available"));
        }
        if room.is_deleted {
            return Err(DomainError::business_rule("Room is deleted"));
        }

        let stay = request.stay();
        let now = Utc::now();

        if !stay.is_ordered() {
            return Err(DomainError::validation(
                "Check-in date must be before check-out date",
            ));
        }
        if stay.check_in < now {
            return Err(DomainError::validation("Check-in date must be in the future"));
        }
        if stay.check_out < now {
            return Err(DomainError::validation("Check-out date must be in the future"));
        }
        // also rejects NaN
        if !(request.total_price > 0.0) {
            return Err(DomainError::validation("Total price must be greater than 0"));
        }
        if request.status != BookingStatus::Booked {
            return Err(DomainError::validation("Invalid booking status"));
        }

        let total_price = room.price_for(&stay);
        if !(total_price > 0.0) {
            return Err(DomainError::validation("Total price must be greater than 0"));
        }

        let booking = self
            .bookings
            .create_exclusive(Booking::new(request, total_price), self.config.overlap_policy)
            .await?;

        tracing::info!(
            booking_id = %booking.id,
            room_id = %booking.room_id,
            user_id = %booking.user_id,
            total_price = booking.total_price,
            event = "booking_created",
            "Booking created"
        );

        Ok(booking)
    }

    /// Merge `patch` onto an editable booking
    ///
    /// Bookings that are cancelled, checked in or checked out are rejected
    /// even when the patch changes nothing. Moving the stay re-runs the
    /// conflict check against the room's other bookings.
    pub async fn update_booking(&self, id: Uuid, patch: BookingPatch) -> DomainResult<Booking> {
        let mut booking = self.find_active(id).await?;

        if let Some(message) = booking.status.lock_message() {
            return Err(DomainError::business_rule(message));
        }

        let stored_stay = booking.stay();
        booking.apply(patch);

        if !booking.stay().is_ordered() {
            return Err(DomainError::validation(
                "Check-in date must be before check-out date",
            ));
        }

        let booking = if booking.stay() == stored_stay {
            self.bookings.update(booking).await?
        } else {
            self.bookings
                .update_exclusive(booking, self.config.overlap_policy)
                .await?
        };

        tracing::info!(
            booking_id = %booking.id,
            status = %booking.status,
            event = "booking_updated",
            "Booking updated"
        );

        Ok(booking)
    }

    /// Soft delete a booking regardless of its status
    pub async fn delete_booking(&self, id: Uuid) -> DomainResult<Booking> {
        let mut booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        booking.mark_deleted();
        let booking = self.bookings.update(booking).await?;

        tracing::info!(
            booking_id = %booking.id,
            status = %booking.status,
            event = "booking_deleted",
            "Booking soft-deleted"
        );

        Ok(booking)
    }

    /// One page of non-deleted bookings, newest first
    pub async fn get_bookings(&self, pagination: Pagination) -> DomainResult<Page<BookingDetails>> {
        let (items, total) = tokio::try_join!(
            self.bookings.list_active(pagination),
            self.bookings.count_active(),
        )?;

        Ok(Page::new(items, pagination, total))
    }

    /// Point lookup of a non-deleted booking
    pub async fn get_booking(&self, id: Uuid) -> DomainResult<Booking> {
        self.find_active(id).await
    }

    async fn find_active(&self, id: Uuid) -> DomainResult<Booking> {
        self.bookings
            .find_by_id(id)
            .await?
            .filter(|b| !b.is_deleted)
            .ok_or_else(|| DomainError::not_found("Booking"))
    }
}
