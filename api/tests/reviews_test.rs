mod common;

use actix_web::test;
use hs_api::create_app;
use hs_core::domain::entities::NewReview;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{authed, context, seed_room, TestContext};

async fn review(ctx: &TestContext, branch_id: Option<Uuid>, room_id: Option<Uuid>, rating: i32) {
    ctx.state
        .review_service
        .create_review(NewReview {
            user_id: ctx.user_id,
            branch_id,
            room_id,
            rating,
            comment: None,
        })
        .await
        .unwrap();
}

#[actix_rt::test]
async fn test_branch_average_combines_direct_and_room_reviews() {
    let ctx = context().await;
    let (branch, room) = seed_room(&ctx, 100.0).await;
    review(&ctx, Some(branch.id), None, 4).await;
    review(&ctx, None, Some(room.id), 2).await;

    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let req = authed(
        &ctx,
        test::TestRequest::get().uri(&format!("/api/v1/reviews?branchId={}", branch.id)),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Reviews fetched successfully");
    assert_eq!(body["data"]["averageRating"], 3.0);
    // only the direct branch review matches the branchId filter
    assert_eq!(body["data"]["reviews"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["total"], 1);
}

#[actix_rt::test]
async fn test_branch_average_with_only_room_reviews() {
    let ctx = context().await;
    let (branch, room) = seed_room(&ctx, 100.0).await;
    review(&ctx, None, Some(room.id), 5).await;

    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let req = authed(
        &ctx,
        test::TestRequest::get().uri(&format!("/api/v1/reviews?branchId={}", branch.id)),
    )
    .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["averageRating"], 5.0);
}

#[actix_rt::test]
async fn test_create_review_validates_rating() {
    let ctx = context().await;
    let (_, room) = seed_room(&ctx, 100.0).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = authed(&ctx, test::TestRequest::post().uri("/api/v1/reviews"))
        .set_json(json!({ "userId": ctx.user_id, "roomId": room.id, "rating": 6 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["field"], "rating");

    let req = authed(&ctx, test::TestRequest::post().uri("/api/v1/reviews"))
        .set_json(json!({
            "userId": ctx.user_id,
            "roomId": room.id,
            "rating": 5,
            "comment": "Spotless room"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Review created successfully");
    assert_eq!(body["data"]["rating"], 5);
}

#[actix_rt::test]
async fn test_review_for_missing_room_is_not_found() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = authed(&ctx, test::TestRequest::post().uri("/api/v1/reviews"))
        .set_json(json!({ "userId": ctx.user_id, "roomId": Uuid::new_v4(), "rating": 3 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_rt::test]
async fn test_update_and_delete_review() {
    let ctx = context().await;
    let (_, room) = seed_room(&ctx, 100.0).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let create = authed(&ctx, test::TestRequest::post().uri("/api/v1/reviews"))
        .set_json(json!({ "userId": ctx.user_id, "roomId": room.id, "rating": 2 }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, create).await).await;
    let uri = format!("/api/v1/reviews/{}", created["data"]["id"].as_str().unwrap());

    let update = authed(&ctx, test::TestRequest::patch().uri(&uri))
        .set_json(json!({ "rating": 4, "comment": "Better the second time" }))
        .to_request();
    let resp = test::call_service(&app, update).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["rating"], 4);

    let too_long = authed(&ctx, test::TestRequest::patch().uri(&uri))
        .set_json(json!({ "comment": "x".repeat(2001) }))
        .to_request();
    let resp = test::call_service(&app, too_long).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Validation failed");

    let delete = authed(&ctx, test::TestRequest::delete().uri(&uri)).to_request();
    let resp = test::call_service(&app, delete).await;
    assert_eq!(resp.status(), 200);

    let list = authed(
        &ctx,
        test::TestRequest::get().uri(&format!("/api/v1/reviews?roomId={}", room.id)),
    )
    .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, list).await).await;
    assert!(body["data"]["reviews"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["averageRating"], 0.0);
}
