use actix_web::{web, HttpResponse};
use hs_shared::BaseResponse;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{CreateRoomRequest, RoomListQuery, UpdateRoomRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_room))
            .route(web::get().to(get_rooms)),
    )
    .service(
        web::resource("/{id}")
            .route(web::patch().to(update_room))
            .route(web::delete().to(delete_room)),
    );
}

/// Handler for POST /api/v1/rooms
///
/// # Request Body
///
/// ```json
/// {
///     "branchId": "0f8fad5b-d9cb-469f-a165-70867728950e",
///     "roomNumber": "101",
///     "type": "DELUXE",
///     "price": 100,
///     "status": "AVAILABLE"
/// }
/// ```
///
/// `price` is per hour and must be greater than 0.
pub async fn create_room(
    state: web::Data<AppState>,
    request: web::Json<CreateRoomRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.room_service.create_room(request.into()).await {
        Ok(room) => {
            HttpResponse::Created().json(BaseResponse::created(room, "Room created successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/rooms?limit&page&branchId
pub async fn get_rooms(
    state: web::Data<AppState>,
    query: web::Query<RoomListQuery>,
) -> HttpResponse {
    match state
        .room_service
        .get_rooms(query.filter(), query.pagination())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(
            BaseResponse::success(page.items, "Rooms fetched successfully")
                .with_pagination(page.info),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for PATCH /api/v1/rooms/{id}
pub async fn update_room(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateRoomRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .room_service
        .update_room(path.into_inner(), request.into())
        .await
    {
        Ok(room) => {
            HttpResponse::Ok().json(BaseResponse::success(room, "Room updated successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for DELETE /api/v1/rooms/{id}
pub async fn delete_room(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.room_service.delete_room(path.into_inner()).await {
        Ok(room) => {
            HttpResponse::Ok().json(BaseResponse::success(room, "Room deleted successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}
