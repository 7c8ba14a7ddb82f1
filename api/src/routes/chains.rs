use actix_web::{web, HttpResponse};
use hs_shared::BaseResponse;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{ChainListQuery, CreateChainRequest, UpdateChainRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_chain))
            .route(web::get().to(get_chains)),
    )
    .service(
        web::resource("/{id}")
            .route(web::patch().to(update_chain))
            .route(web::delete().to(delete_chain)),
    );
}

/// Handler for POST /api/v1/chains
///
/// # Request Body
///
/// ```json
/// { "name": "Seaside Stays", "description": "Coastal homestays" }
/// ```
pub async fn create_chain(
    state: web::Data<AppState>,
    request: web::Json<CreateChainRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.chain_service.create_chain(request.into()).await {
        Ok(chain) => {
            HttpResponse::Created().json(BaseResponse::created(chain, "Chain created successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/chains?limit&page
pub async fn get_chains(
    state: web::Data<AppState>,
    query: web::Query<ChainListQuery>,
) -> HttpResponse {
    match state.chain_service.get_chains(query.pagination()).await {
        Ok(page) => HttpResponse::Ok().json(
            BaseResponse::success(page.items, "Chains fetched successfully")
                .with_pagination(page.info),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for PATCH /api/v1/chains/{id}
pub async fn update_chain(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateChainRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .chain_service
        .update_chain(path.into_inner(), request.into())
        .await
    {
        Ok(chain) => {
            HttpResponse::Ok().json(BaseResponse::success(chain, "Chain updated successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for DELETE /api/v1/chains/{id}
pub async fn delete_chain(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.chain_service.delete_chain(path.into_inner()).await {
        Ok(chain) => {
            HttpResponse::Ok().json(BaseResponse::success(chain, "Chain deleted successfully"))
        }
        Err(e) => handle_domain_error(e),
    }
}
