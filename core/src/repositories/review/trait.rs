//! Review repository trait defining the interface for review persistence.

use async_trait::async_trait;
use hs_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::review::{RatingScope, Review, ReviewDetails, ReviewFilter};
use crate::errors::DomainError;

/// Repository trait for Review entity persistence operations
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find a review by its unique identifier, deleted or not
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError>;

    /// Non-deleted reviews matching every set filter, newest first,
    /// joined with author, branch and room summaries
    async fn list(
        &self,
        filter: ReviewFilter,
        pagination: Pagination,
    ) -> Result<Vec<ReviewDetails>, DomainError>;

    /// Number of non-deleted reviews matching every set filter
    async fn count(&self, filter: ReviewFilter) -> Result<u64, DomainError>;

    /// Mean rating of the non-deleted reviews in `scope`
    ///
    /// # Returns
    /// * `Ok(0.0)` - No review falls in the scope (including an empty room list)
    async fn average_rating(&self, scope: RatingScope) -> Result<f64, DomainError>;

    /// Persist a new review
    async fn create(&self, review: Review) -> Result<Review, DomainError>;

    /// Overwrite an existing review with the given record
    async fn update(&self, review: Review) -> Result<Review, DomainError>;
}
