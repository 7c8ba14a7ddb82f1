use actix_web::{web, HttpResponse};
use hs_shared::BaseResponse;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{BranchListQuery, CreateBranchRequest, UpdateBranchRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_branch))
            .route(web::get().to(get_branches)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_branch))
            .route(web::patch().to(update_branch))
            .route(web::delete().to(delete_branch)),
    );
}

/// Handler for POST /api/v1/branches
///
/// # Request Body
///
/// ```json
/// {
///     "chainId": "0f8fad5b-d9cb-469f-a165-70867728950e",
///     "name": "Old Quarter",
///     "address": "12 Hang Bac",
///     "phone": "+84 24 1234 5678"
/// }
/// ```
///
/// ## Errors
/// - 400: name, address or phone missing
/// - 404: chain not found
pub async fn create_branch(
    state: web::Data<AppState>,
    request: web::Json<CreateBranchRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.branch_service.create_branch(request.into()).await {
        Ok(branch) => HttpResponse::Created()
            .json(BaseResponse::created(branch, "Branch created successfully")),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/branches?limit&page&chainId&id
pub async fn get_branches(
    state: web::Data<AppState>,
    query: web::Query<BranchListQuery>,
) -> HttpResponse {
    match state
        .branch_service
        .get_branches(query.filter(), query.pagination())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(
            BaseResponse::success(page.items, "Branches fetched successfully")
                .with_pagination(page.info),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/branches/{id}
pub async fn get_branch(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.branch_service.get_branch(path.into_inner()).await {
        Ok(branch) => {
            HttpResponse::Ok().json(BaseResponse::success(branch, "Branch fetched successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for PATCH /api/v1/branches/{id}
pub async fn update_branch(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateBranchRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .branch_service
        .update_branch(path.into_inner(), request.into())
        .await
    {
        Ok(branch) => {
            HttpResponse::Ok().json(BaseResponse::success(branch, "Branch updated successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for DELETE /api/v1/branches/{id}
pub async fn delete_branch(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.branch_service.delete_branch(path.into_inner()).await {
        Ok(branch) => {
            HttpResponse::Ok().json(BaseResponse::success(branch, "Branch deleted successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}
