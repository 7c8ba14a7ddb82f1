use hs_core::domain::entities::{NewReview, ReviewFilter, ReviewPatch};
use hs_core::services::ReviewQuery;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /api/v1/reviews`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub user_id: Uuid,
    pub branch_id: Option<Uuid>,
    pub room_id: Option<Uuid>,
    pub rating: i32,
    #[validate(length(max = 2000, message = "Comment is too long"))]
    pub comment: Option<String>,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(body: CreateReviewRequest) -> Self {
        NewReview {
            user_id: body.user_id,
            branch_id: body.branch_id,
            room_id: body.room_id,
            rating: body.rating,
            comment: body.comment,
        }
    }
}

/// Body of `PATCH /api/v1/reviews/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    pub rating: Option<i32>,
    #[validate(length(max = 2000, message = "Comment is too long"))]
    pub comment: Option<String>,
}

impl From<UpdateReviewRequest> for ReviewPatch {
    fn from(body: UpdateReviewRequest) -> Self {
        ReviewPatch {
            rating: body.rating,
            comment: body.comment,
        }
    }
}

/// Query string of `GET /api/v1/reviews`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub user_id: Option<Uuid>,
    pub branch_id: Option<Uuid>,
    pub room_id: Option<Uuid>,
}

impl From<ReviewListQuery> for ReviewQuery {
    fn from(query: ReviewListQuery) -> Self {
        ReviewQuery {
            filter: ReviewFilter {
                user_id: query.user_id,
                branch_id: query.branch_id,
                room_id: query.room_id,
            },
            pagination: super::pagination(query.limit.as_deref(), query.page.as_deref()),
        }
    }
}
