use actix_web::{web, HttpResponse};
use hs_shared::BaseResponse;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{CreateReviewRequest, ReviewListQuery, UpdateReviewRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_review))
            .route(web::get().to(get_reviews)),
    )
    .service(
        web::resource("/{id}")
            .route(web::patch().to(update_review))
            .route(web::delete().to(delete_review)),
    );
}

/// Handler for POST /api/v1/reviews
///
/// # Request Body
///
/// ```json
/// {
///     "userId": "7c0e5c0a-3f7e-4a44-9d8e-7fb9a3a1d001",
///     "roomId": "1b2f5a6e-0c1d-4f5e-8a9b-0c1d2e3f4a5b",
///     "rating": 5,
///     "comment": "Spotless room"
/// }
/// ```
///
/// ## Errors
/// - 400: rating outside 1..=5 (`data` carries `field`, `min`, `max`)
/// - 404: referenced room or branch not found
pub async fn create_review(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateReviewRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    log::info!("User {} posting review for user {}", auth.user_id, request.user_id);

    match state.review_service.create_review(request.into()).await {
        Ok(review) => HttpResponse::Created()
            .json(BaseResponse::created(review, "Review created successfully")),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/reviews?limit&page&userId&branchId&roomId
///
/// ## Success (200 OK)
/// ```json
/// {
///     "code": 200,
///     "message": "Reviews fetched successfully",
///     "data": { "reviews": [], "averageRating": 3.0 },
///     "pagination": { "total": 0, "page": 1, "limit": 10 }
/// }
/// ```
///
/// `averageRating` covers the room when `roomId` is given, otherwise the
/// branch and its rooms when `branchId` is given, and is `0` otherwise.
pub async fn get_reviews(
    state: web::Data<AppState>,
    query: web::Query<ReviewListQuery>,
) -> HttpResponse {
    match state.review_service.get_reviews(query.into_inner().into()).await {
        Ok(listing) => {
            let pagination = listing.pagination;
            HttpResponse::Ok().json(
                BaseResponse::success(listing, "Reviews fetched successfully")
                    .with_pagination(pagination),
            )
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for PATCH /api/v1/reviews/{id}
///
/// # Request Body
///
/// ```json
/// { "rating": 4, "comment": "Updated after a second stay" }
/// ```
pub async fn update_review(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateReviewRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .review_service
        .update_review(path.into_inner(), request.into())
        .await
    {
        Ok(review) => {
            HttpResponse::Ok().json(BaseResponse::success(review, "Review updated successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for DELETE /api/v1/reviews/{id}
pub async fn delete_review(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.review_service.delete_review(path.into_inner()).await {
        Ok(review) => {
            HttpResponse::Ok().json(BaseResponse::success(review, "Review deleted successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}
