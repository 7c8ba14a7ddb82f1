//! Mock implementation of ReviewRepository for testing

use async_trait::async_trait;
use hs_shared::Pagination;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::review::{RatingScope, Review, ReviewDetails, ReviewFilter};
use crate::errors::DomainError;

use super::trait_::ReviewRepository;

/// Mock review repository for testing
///
/// Listings carry no joined summaries.
pub struct MockReviewRepository {
    reviews: Arc<RwLock<HashMap<Uuid, Review>>>,
}

impl MockReviewRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            reviews: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn matching(&self, filter: ReviewFilter) -> Vec<Review> {
        let reviews = self.reviews.read().await;
        let mut found: Vec<Review> = reviews
            .values()
            .filter(|r| !r.is_deleted && filter.matches(r))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }
}

impl Default for MockReviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewRepository for MockReviewRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: ReviewFilter,
        pagination: Pagination,
    ) -> Result<Vec<ReviewDetails>, DomainError> {
        Ok(self
            .matching(filter)
            .await
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .map(|review| ReviewDetails {
                review,
                user: None,
                branch: None,
                room: None,
            })
            .collect())
    }

    async fn count(&self, filter: ReviewFilter) -> Result<u64, DomainError> {
        Ok(self.matching(filter).await.len() as u64)
    }

    async fn average_rating(&self, scope: RatingScope) -> Result<f64, DomainError> {
        let reviews = self.reviews.read().await;
        let ratings: Vec<i32> = reviews
            .values()
            .filter(|r| !r.is_deleted && scope.matches(r))
            .map(|r| r.rating)
            .collect();

        if ratings.is_empty() {
            return Ok(0.0);
        }
        Ok(ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64)
    }

    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;
        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn update(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;
        
        if !reviews.contains_key(&review.id) {
            return Err(DomainError::not_found("Review"));
        }
        
        reviews.insert(review.id, review.clone());
        Ok(review)
    }
}
