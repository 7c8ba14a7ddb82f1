//! Booking repository trait defining the interface for booking persistence.
//!
//! The booking engine depends on this trait rather than on a database client,
//! so the availability rules can run against MySQL in production and against
//! the in-memory mock in tests.

use async_trait::async_trait;
use hs_shared::{OverlapPolicy, Pagination};
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingDetails};
use crate::errors::DomainError;

/// Repository trait for Booking entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use hs_core::repositories::BookingRepository;
/// use hs_core::domain::entities::{Booking, BookingDetails};
/// use hs_core::errors::DomainError;
/// use hs_shared::{OverlapPolicy, Pagination};
///
/// struct InMemoryBookings;
///
/// #[async_trait]
/// impl BookingRepository for InMemoryBookings {
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn list_active(&self, _: Pagination) -> Result<Vec<BookingDetails>, DomainError> { Ok(vec![]) }
/// #   async fn count_active(&self) -> Result<u64, DomainError> { Ok(0) }
/// #   async fn create_exclusive(&self, b: Booking, _: OverlapPolicy) -> Result<Booking, DomainError> { Ok(b) }
/// #   async fn update_exclusive(&self, b: Booking, _: OverlapPolicy) -> Result<Booking, DomainError> { Ok(b) }
/// #   async fn update(&self, b: Booking) -> Result<Booking, DomainError> { Ok(b) }
/// }
/// ```
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a booking by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Booking))` - Booking found, soft-deleted or not
    /// * `Ok(None)` - No booking with this id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// Non-deleted bookings, newest first, joined with guest and room summaries
    ///
    /// # Arguments
    /// * `pagination` - Page window; skips `(page - 1) * limit` rows
    async fn list_active(&self, pagination: Pagination) -> Result<Vec<BookingDetails>, DomainError>;

    /// Number of non-deleted bookings
    async fn count_active(&self) -> Result<u64, DomainError>;

    /// Insert a booking unless another non-deleted booking on the same room
    /// conflicts with it under `policy`
    ///
    /// The conflict check and the insert must be atomic with respect to other
    /// calls for the same room, so two concurrent requests can never both
    /// succeed for conflicting stays.
    ///
    /// # Returns
    /// * `Ok(Booking)` - The persisted booking
    /// * `Err(DomainError::BookingConflict)` - Carries the id of the booking in the way
    /// * `Err(DomainError)` - Database or other error occurred
    async fn create_exclusive(
        &self,
        booking: Booking,
        policy: OverlapPolicy,
    ) -> Result<Booking, DomainError>;

    /// Overwrite an existing booking whose stay moved, unless another
    /// non-deleted booking on the same room conflicts with the new stay
    ///
    /// The booking never conflicts with its own stored record. Same atomicity
    /// as `create_exclusive`.
    ///
    /// # Returns
    /// * `Ok(Booking)` - The stored record
    /// * `Err(DomainError::BookingConflict)` - Carries the id of the booking in the way
    /// * `Err(DomainError::NotFound)` - No booking with this id
    async fn update_exclusive(
        &self,
        booking: Booking,
        policy: OverlapPolicy,
    ) -> Result<Booking, DomainError>;

    /// Overwrite an existing booking with the given record
    ///
    /// # Returns
    /// * `Ok(Booking)` - The stored record
    /// * `Err(DomainError::NotFound)` - No booking with this id
    async fn update(&self, booking: Booking) -> Result<Booking, DomainError>;
}
