//! Review service: CRUD over reviews plus the average rating shown
//! alongside review listings.

use std::sync::Arc;

use hs_shared::{PageInfo, Pagination};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::review::{
    NewReview, RatingScope, Review, ReviewDetails, ReviewFilter, ReviewPatch, MAX_RATING,
    MIN_RATING,
};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{BranchRepository, ReviewRepository, RoomRepository, UserRepository};

/// Filters and window for a review listing
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewQuery {
    pub filter: ReviewFilter,
    pub pagination: Pagination,
}

/// One page of reviews and the average rating of the filtered target
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListing {
    pub reviews: Vec<ReviewDetails>,
    pub average_rating: f64,
    #[serde(skip)]
    pub pagination: PageInfo,
}

/// Branch rating from its direct reviews and the reviews of its rooms.
///
/// A zero mean stands for "no reviews": when both sides are present the
/// result is their unweighted average, otherwise whichever side is present.
pub fn combine_branch_rating(direct: f64, rooms: f64) -> f64 {
    match (direct > 0.0, rooms > 0.0) {
        (true, true) => (direct + rooms) / 2.0,
        (true, false) => direct,
        (false, true) => rooms,
        (false, false) => 0.0,
    }
}

/// Service for reviews and rating aggregation
pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
    rooms: Arc<dyn RoomRepository>,
    branches: Arc<dyn BranchRepository>,
    users: Arc<dyn UserRepository>,
}

impl ReviewService {
    /// Create a new review service
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        rooms: Arc<dyn RoomRepository>,
        branches: Arc<dyn BranchRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            reviews,
            rooms,
            branches,
            users,
        }
    }

    /// List reviews and compute the average rating for the filtered target
    ///
    /// The average covers the room when `room_id` is set, otherwise the
    /// branch (direct and room reviews combined) when `branch_id` is set,
    /// and is `0` for any other query.
    pub async fn get_reviews(&self, query: ReviewQuery) -> DomainResult<ReviewListing> {
        let ReviewQuery { filter, pagination } = query;

        let (reviews, total, average_rating) = tokio::try_join!(
            self.reviews.list(filter, pagination),
            self.reviews.count(filter),
            self.average_for(filter),
        )?;

        Ok(ReviewListing {
            reviews,
            average_rating,
            pagination: pagination.info(total),
        })
    }

    async fn average_for(&self, filter: ReviewFilter) -> DomainResult<f64> {
        if let Some(room_id) = filter.room_id {
            return self.reviews.average_rating(RatingScope::Room(room_id)).await;
        }

        let Some(branch_id) = filter.branch_id else {
            return Ok(0.0);
        };

        let room_ids = self.rooms.list_ids_by_branch(branch_id).await?;
        let (direct, rooms) = tokio::try_join!(
            self.reviews.average_rating(RatingScope::Branch(branch_id)),
            self.reviews.average_rating(RatingScope::Rooms(room_ids)),
        )?;

        Ok(combine_branch_rating(direct, rooms))
    }

    /// Create a review by an active user for an existing branch and/or room
    pub async fn create_review(&self, input: NewReview) -> DomainResult<Review> {
        validate_rating(input.rating)?;

        self.users
            .find_by_id(input.user_id)
            .await?
            .filter(|u| u.active)
            .ok_or_else(|| DomainError::not_found("User"))?;

        if let Some(room_id) = input.room_id {
            self.rooms
                .find_by_id(room_id)
                .await?
                .filter(|r| !r.is_deleted)
                .ok_or_else(|| DomainError::not_found("Room"))?;
        }
        if let Some(branch_id) = input.branch_id {
            self.branches
                .find_by_id(branch_id)
                .await?
                .filter(|b| !b.is_deleted)
                .ok_or_else(|| DomainError::not_found("Branch"))?;
        }

        let review = self.reviews.create(Review::new(input)).await?;

        tracing::info!(
            review_id = %review.id,
            rating = review.rating,
            event = "review_created",
            "Review created"
        );

        Ok(review)
    }

    /// Update rating and/or comment of a live review
    pub async fn update_review(&self, id: Uuid, patch: ReviewPatch) -> DomainResult<Review> {
        if let Some(rating) = patch.rating {
            validate_rating(rating)?;
        }

        let mut review = self
            .reviews
            .find_by_id(id)
            .await?
            .filter(|r| !r.is_deleted)
            .ok_or_else(|| DomainError::not_found("Review"))?;

        review.apply(patch);
        self.reviews.update(review).await
    }

    /// Soft delete a review
    pub async fn delete_review(&self, id: Uuid) -> DomainResult<Review> {
        let mut review = self
            .reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Review"))?;

        review.mark_deleted();
        let review = self.reviews.update(review).await?;

        tracing::info!(review_id = %review.id, event = "review_deleted", "Review soft-deleted");

        Ok(review)
    }
}

fn validate_rating(rating: i32) -> DomainResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::out_of_range("rating", MIN_RATING, MAX_RATING).into());
    }
    Ok(())
}
