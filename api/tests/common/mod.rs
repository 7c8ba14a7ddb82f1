//! Shared fixtures for endpoint tests: the real app factory wired to
//! in-memory repositories, plus helpers to mint tokens and seed the catalog.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{http::header::AUTHORIZATION, test, web};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use uuid::Uuid;

use hs_api::app::{AppState, Repositories};
use hs_api::middleware::Claims;
use hs_core::repositories::{
    MockBookingRepository, MockBranchRepository, MockChainRepository, MockReviewRepository,
    MockRoomRepository, MockUserRepository,
};
use hs_core::domain::entities::{Branch, NewBranch, NewChain, NewRoom, NewUser, Room};
use hs_core::services::BookingServiceConfig;
use hs_shared::{AppConfig, AuthConfig, OverlapPolicy};

pub const SECRET: &str = "endpoint-test-secret";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub config: AppConfig,
    pub bookings: Arc<MockBookingRepository>,
    pub user_id: Uuid,
}

pub async fn context() -> TestContext {
    context_with_policy(OverlapPolicy::Intersect).await
}

/// App state over empty mocks with one registered guest as the caller
pub async fn context_with_policy(policy: OverlapPolicy) -> TestContext {
    let bookings = Arc::new(MockBookingRepository::new());
    let repositories = Repositories {
        chains: Arc::new(MockChainRepository::new()),
        branches: Arc::new(MockBranchRepository::new()),
        rooms: Arc::new(MockRoomRepository::new()),
        bookings: bookings.clone(),
        reviews: Arc::new(MockReviewRepository::new()),
        users: Arc::new(MockUserRepository::new()),
    };
    let state = web::Data::new(AppState::new(
        repositories,
        BookingServiceConfig {
            overlap_policy: policy,
        },
    ));

    let mut config = AppConfig::default();
    config.auth = AuthConfig::new(SECRET);

    let guest = state
        .user_service
        .create_user(NewUser {
            name: "Test Guest".to_string(),
            email: "guest@example.com".to_string(),
            phone_number: None,
        })
        .await
        .unwrap();

    TestContext {
        state,
        config,
        bookings,
        user_id: guest.id,
    }
}

/// Access token for `user_id`, valid for three hours
pub fn token_for(user_id: Uuid, secret: &str) -> String {
    token_with_role(user_id, "USER", secret)
}

pub fn token_with_role(user_id: Uuid, role: &str, secret: &str) -> String {
    let claims = Claims {
        id: user_id.to_string(),
        email: "guest@example.com".to_string(),
        role: role.to_string(),
        exp: (Utc::now().timestamp() + 3 * 3600) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn bearer(ctx: &TestContext) -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {}", token_for(ctx.user_id, SECRET)))
}

/// Attach the context user's bearer token
pub fn authed(ctx: &TestContext, req: test::TestRequest) -> test::TestRequest {
    req.insert_header(bearer(ctx))
}

/// Create chain, branch and room directly through the services
pub async fn seed_room(ctx: &TestContext, price: f64) -> (Branch, Room) {
    let chain = ctx
        .state
        .chain_service
        .create_chain(NewChain {
            name: "Seaside Stays".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let branch = ctx
        .state
        .branch_service
        .create_branch(NewBranch {
            chain_id: chain.id,
            name: "Old Quarter".to_string(),
            address: "12 Hang Bac".to_string(),
            phone: "+84 24 1234 5678".to_string(),
            manager_id: None,
        })
        .await
        .unwrap();

    let room = ctx
        .state
        .room_service
        .create_room(NewRoom {
            branch_id: branch.id,
            room_number: "101".to_string(),
            room_type: "DELUXE".to_string(),
            status: None,
            price,
            description: None,
        })
        .await
        .unwrap();

    (branch, room)
}

/// JSON body for a booking of `room_id` starting `start_hours` from now
pub fn booking_body(ctx: &TestContext, room_id: Uuid, start_hours: i64, minutes: i64) -> Value {
    let check_in = Utc::now() + Duration::hours(start_hours);
    json!({
        "userId": ctx.user_id,
        "roomId": room_id,
        "checkIn": check_in,
        "checkOut": check_in + Duration::minutes(minutes),
        "status": "BOOKED",
        "totalPrice": 1.0
    })
}
