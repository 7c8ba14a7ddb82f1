//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use hs_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Listings and counts only see active users; point lookups return
/// deactivated users too so callers can decide.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email, active or not
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Active users, newest first, for one page
    async fn list(&self, pagination: Pagination) -> Result<Vec<User>, DomainError>;

    /// Number of active users
    async fn count(&self) -> Result<u64, DomainError>;

    /// Persist a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Overwrite an existing user with the given record
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No user with this id
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
