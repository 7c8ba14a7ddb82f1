//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    middleware::Logger,
    web, App, HttpResponse,
};

use hs_core::repositories::{
    BookingRepository, BranchRepository, ChainRepository, ReviewRepository, RoomRepository,
    UserRepository,
};
use hs_core::services::{
    BookingService, BookingServiceConfig, BranchService, ChainService, ReviewService, RoomService,
    UserService,
};
use hs_shared::AppConfig;

use crate::handlers::error::{
    error_response, json_error_handler, path_error_handler, query_error_handler,
};
use crate::middleware::{cors::create_cors, JwtAuth};
use crate::routes;

/// Storage handles the services are built from
#[derive(Clone)]
pub struct Repositories {
    pub chains: Arc<dyn ChainRepository>,
    pub branches: Arc<dyn BranchRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub users: Arc<dyn UserRepository>,
}

/// Application state that holds shared services
pub struct AppState {
    pub booking_service: Arc<BookingService>,
    pub review_service: Arc<ReviewService>,
    pub chain_service: Arc<ChainService>,
    pub branch_service: Arc<BranchService>,
    pub room_service: Arc<RoomService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wire every service against the given repositories
    pub fn new(repos: Repositories, booking_config: BookingServiceConfig) -> Self {
        Self {
            booking_service: Arc::new(BookingService::new(
                repos.bookings,
                repos.rooms.clone(),
                repos.users.clone(),
                booking_config,
            )),
            review_service: Arc::new(ReviewService::new(
                repos.reviews,
                repos.rooms.clone(),
                repos.branches.clone(),
                repos.users.clone(),
            )),
            chain_service: Arc::new(ChainService::new(repos.chains.clone())),
            branch_service: Arc::new(BranchService::new(repos.branches.clone(), repos.chains)),
            room_service: Arc::new(RoomService::new(repos.rooms, repos.branches)),
            user_service: Arc::new(UserService::new(repos.users)),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = create_cors(&config.cors);
    let jwt_auth = JwtAuth::new(&config.auth);

    App::new()
        // Add application state
        .app_data(app_state)
        // Malformed input is answered in the response envelope
        .app_data(
            web::JsonConfig::default()
                .limit(config.server.max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Add middleware (order matters: CORS outermost, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(routes::health::health_check))
        // API v1 routes, all behind bearer authentication
        .service(
            web::scope("/api/v1")
                .configure(routes::configure)
                .wrap(jwt_auth),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
        None,
    )
}
