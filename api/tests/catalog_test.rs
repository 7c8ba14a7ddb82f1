mod common;

use actix_web::test;
use hs_api::create_app;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{authed, context, seed_room};

#[actix_rt::test]
async fn test_chain_branch_room_lifecycle() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = authed(&ctx, test::TestRequest::post().uri("/api/v1/chains"))
        .set_json(json!({ "name": "Seaside Stays", "description": "Coastal homestays" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let chain: Value = test::read_body_json(resp).await;
    let chain_id = chain["data"]["id"].as_str().unwrap().to_string();

    let req = authed(&ctx, test::TestRequest::post().uri("/api/v1/branches"))
        .set_json(json!({
            "chainId": chain_id,
            "name": "Old Quarter",
            "address": "12 Hang Bac",
            "phone": "+84 24 1234 5678"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let branch: Value = test::read_body_json(resp).await;
    let branch_id = branch["data"]["id"].as_str().unwrap().to_string();

    let req = authed(&ctx, test::TestRequest::post().uri("/api/v1/rooms"))
        .set_json(json!({
            "branchId": branch_id,
            "roomNumber": "101",
            "type": "DELUXE",
            "price": 100
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let room: Value = test::read_body_json(resp).await;
    assert_eq!(room["data"]["type"], "DELUXE");
    assert_eq!(room["data"]["status"], "AVAILABLE");

    let req = authed(
        &ctx,
        test::TestRequest::get().uri(&format!("/api/v1/branches?chainId={}", chain_id)),
    )
    .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["message"], "Branches fetched successfully");
    assert_eq!(body["pagination"]["total"], 1);

    let req = authed(
        &ctx,
        test::TestRequest::get().uri(&format!("/api/v1/rooms?branchId={}", branch_id)),
    )
    .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let req = authed(
        &ctx,
        test::TestRequest::delete().uri(&format!("/api/v1/chains/{}", chain_id)),
    )
    .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["message"], "Chain deleted successfully");
    assert_eq!(body["data"]["isDeleted"], true);

    let req = authed(&ctx, test::TestRequest::get().uri("/api/v1/chains")).to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_branch_requires_existing_chain() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = authed(&ctx, test::TestRequest::post().uri("/api/v1/branches"))
        .set_json(json!({
            "chainId": Uuid::new_v4(),
            "name": "Nowhere",
            "address": "1 Nowhere Lane",
            "phone": "000"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Chain not found");
}

#[actix_rt::test]
async fn test_room_price_must_stay_positive() {
    let ctx = context().await;
    let (_, room) = seed_room(&ctx, 100.0).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = authed(
        &ctx,
        test::TestRequest::patch().uri(&format!("/api/v1/rooms/{}", room.id)),
    )
    .set_json(json!({ "price": 0 }))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Price must be greater than 0");

    let req = authed(
        &ctx,
        test::TestRequest::patch().uri(&format!("/api/v1/rooms/{}", room.id)),
    )
    .set_json(json!({ "price": 120.5, "roomNumber": "" }))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["price"], 120.5);
    // blank strings leave the field untouched
    assert_eq!(body["data"]["roomNumber"], "101");
}

#[actix_rt::test]
async fn test_get_branch_by_id() {
    let ctx = context().await;
    let (branch, _) = seed_room(&ctx, 100.0).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = authed(
        &ctx,
        test::TestRequest::get().uri(&format!("/api/v1/branches/{}", branch.id)),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Old Quarter");

    let req = authed(
        &ctx,
        test::TestRequest::get().uri(&format!("/api/v1/branches/{}", Uuid::new_v4())),
    )
    .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}
