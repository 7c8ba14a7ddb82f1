//! User service: profile registration, listing, self-service updates and
//! deactivation.

use std::sync::Arc;

use hs_shared::{Page, Pagination};
use uuid::Uuid;

use crate::domain::entities::user::{NewUser, User, UserPatch, UserRole};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;

/// Service for user profiles
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Register a profile under a not yet used email
    pub async fn create_user(&self, mut input: NewUser) -> DomainResult<User> {
        input.name = input.name.trim().to_string();
        input.email = input.email.trim().to_lowercase();
        if input.name.is_empty() {
            return Err(ValidationError::required("name").into());
        }
        if input.email.is_empty() {
            return Err(ValidationError::required("email").into());
        }

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(DomainError::business_rule("Email already registered"));
        }

        let user = self.users.create(User::new(input)).await?;
        tracing::info!(user_id = %user.id, event = "user_created", "User created");
        Ok(user)
    }

    pub async fn get_users(&self, pagination: Pagination) -> DomainResult<Page<User>> {
        let (items, total) = tokio::try_join!(self.users.list(pagination), self.users.count())?;
        Ok(Page::new(items, pagination, total))
    }

    /// Point lookup of an active user
    pub async fn get_user(&self, id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .filter(|u| u.active)
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Update name and/or phone number of an active user
    pub async fn update_user(&self, id: Uuid, patch: UserPatch) -> DomainResult<User> {
        let mut user = self.get_user(id).await?;
        user.apply(patch);
        self.users.update(user).await
    }

    /// Deactivate a user. Only admins may deactivate someone else.
    ///
    /// # Errors
    /// * `Forbidden` - The caller is neither the user nor an admin
    /// * `NotFound` - No such user
    /// * `BusinessRule` - The user is already deactivated
    pub async fn deactivate_user(
        &self,
        id: Uuid,
        caller_id: Uuid,
        caller_role: UserRole,
    ) -> DomainResult<User> {
        if caller_role != UserRole::Admin && caller_id != id {
            return Err(DomainError::forbidden(
                "You don't have permission to delete this user",
            ));
        }

        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        if !user.active {
            return Err(DomainError::business_rule("User is already deactivated"));
        }

        user.deactivate();
        let user = self.users.update(user).await?;
        tracing::info!(
            user_id = %user.id,
            deactivated_by = %caller_id,
            event = "user_deactivated",
            "User deactivated"
        );
        Ok(user)
    }
}
