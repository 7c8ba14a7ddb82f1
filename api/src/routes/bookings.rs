use actix_web::{web, HttpResponse};
use hs_shared::BaseResponse;
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::{BookingListQuery, CreateBookingRequest, UpdateBookingRequest};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_booking))
            .route(web::get().to(get_bookings)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_booking))
            .route(web::patch().to(update_booking))
            .route(web::delete().to(delete_booking)),
    );
}

/// Handler for POST /api/v1/bookings
///
/// The stored `totalPrice` is recomputed from the room's hourly price.
///
/// # Request Body
///
/// ```json
/// {
///     "userId": "7c0e5c0a-3f7e-4a44-9d8e-7fb9a3a1d001",
///     "roomId": "1b2f5a6e-0c1d-4f5e-8a9b-0c1d2e3f4a5b",
///     "checkIn": "2030-01-01T10:00:00Z",
///     "checkOut": "2030-01-01T12:30:00Z",
///     "status": "BOOKED",
///     "totalPrice": 250
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "code": 201,
///     "message": "Booking created successfully",
///     "data": { "id": "…", "status": "BOOKED", "totalPrice": 250.0, "isDeleted": false }
/// }
/// ```
///
/// ## Errors
/// - 400: invalid dates, price or status, room unavailable, or `Room is already booked`
///   with `data.conflictingBookingId`
/// - 404: room not found
pub async fn create_booking(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateBookingRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    log::info!(
        "User {} booking room {} for user {}",
        auth.user_id,
        request.room_id,
        request.user_id
    );

    match state.booking_service.create_booking(request.into()).await {
        Ok(booking) => HttpResponse::Created()
            .json(BaseResponse::created(booking, "Booking created successfully")),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/bookings?limit&page
///
/// Non-deleted bookings, newest first, each joined with its guest and room.
///
/// ## Success (200 OK)
/// ```json
/// {
///     "code": 200,
///     "message": "Bookings fetched successfully",
///     "data": [{ "id": "…", "user": { "name": "…" }, "room": { "roomNumber": "101" } }],
///     "pagination": { "total": 1, "page": 1, "limit": 10 }
/// }
/// ```
pub async fn get_bookings(
    state: web::Data<AppState>,
    query: web::Query<BookingListQuery>,
) -> HttpResponse {
    match state.booking_service.get_bookings(query.pagination()).await {
        Ok(page) => HttpResponse::Ok().json(
            BaseResponse::success(page.items, "Bookings fetched successfully")
                .with_pagination(page.info),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/bookings/{id}
pub async fn get_booking(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.booking_service.get_booking(path.into_inner()).await {
        Ok(booking) => {
            HttpResponse::Ok().json(BaseResponse::success(booking, "Booking fetched successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for PATCH /api/v1/bookings/{id}
///
/// # Request Body
///
/// Any subset of the booking fields:
/// ```json
/// { "status": "CHECKED_IN", "actualCheckIn": "2030-01-01T10:05:00Z" }
/// ```
///
/// ## Errors
/// - 400: the booking is cancelled, checked in or checked out
/// - 404: booking not found
pub async fn update_booking(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateBookingRequest>,
) -> HttpResponse {
    let id = path.into_inner();

    match state
        .booking_service
        .update_booking(id, request.into_inner().into())
        .await
    {
        Ok(booking) => {
            HttpResponse::Ok().json(BaseResponse::success(booking, "Booking updated successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for DELETE /api/v1/bookings/{id}
///
/// Soft delete; the row is kept with `isDeleted: true`.
pub async fn delete_booking(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.booking_service.delete_booking(path.into_inner()).await {
        Ok(booking) => {
            HttpResponse::Ok().json(BaseResponse::success(booking, "Booking deleted successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}
