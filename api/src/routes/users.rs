use actix_web::{web, HttpResponse};
use hs_core::domain::entities::UserRole;
use hs_shared::BaseResponse;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{CreateUserRequest, UpdateUserRequest, UserListQuery};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_user))
            .route(web::get().to(get_users))
            .route(web::patch().to(update_me)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_user))
            .route(web::delete().to(delete_user)),
    );
}

/// Handler for POST /api/v1/users
///
/// # Request Body
///
/// ```json
/// { "name": "Nguyen Hoa", "email": "hoa@example.com", "phoneNumber": "0901 234 567" }
/// ```
pub async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.user_service.create_user(request.into()).await {
        Ok(user) => {
            HttpResponse::Created().json(BaseResponse::created(user, "User created successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/users?limit&page
pub async fn get_users(
    state: web::Data<AppState>,
    query: web::Query<UserListQuery>,
) -> HttpResponse {
    match state.user_service.get_users(query.pagination()).await {
        Ok(page) => HttpResponse::Ok().json(
            BaseResponse::success(page.items, "Users fetched successfully")
                .with_pagination(page.info),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/users/{id}
pub async fn get_user(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.user_service.get_user(path.into_inner()).await {
        Ok(user) => {
            HttpResponse::Ok().json(BaseResponse::success(user, "User fetched successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for PATCH /api/v1/users
pub async fn update_me(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .user_service
        .update_user(auth.user_id, request.into())
        .await
    {
        Ok(user) => {
            HttpResponse::Ok().json(BaseResponse::success(user, "User updated successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for DELETE /api/v1/users/{id}
///
/// Users may deactivate themselves; admins may deactivate anyone.
pub async fn delete_user(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let role = auth.role.parse::<UserRole>().unwrap_or_default();

    match state
        .user_service
        .deactivate_user(path.into_inner(), auth.user_id, role)
        .await
    {
        Ok(user) => {
            HttpResponse::Ok().json(BaseResponse::success(user, "User deactivated successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}
