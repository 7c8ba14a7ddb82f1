mod common;

use actix_web::{http::header::AUTHORIZATION, test};
use hs_api::create_app;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{authed, context, token_with_role, SECRET};

#[actix_rt::test]
async fn test_register_then_fetch_user() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = authed(&ctx, test::TestRequest::post().uri("/api/v1/users"))
        .set_json(json!({
            "name": "Nguyen Hoa",
            "email": "Hoa@Example.com",
            "phoneNumber": "0901 234 567"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["data"]["email"], "hoa@example.com");
    assert_eq!(body["data"]["role"], "USER");

    let uri = format!("/api/v1/users/{}", body["data"]["id"].as_str().unwrap());
    let get = authed(&ctx, test::TestRequest::get().uri(&uri)).to_request();
    let resp = test::call_service(&app, get).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Nguyen Hoa");

    let list = authed(&ctx, test::TestRequest::get().uri("/api/v1/users")).to_request();
    let body: Value = test::read_body_json(test::call_service(&app, list).await).await;
    assert_eq!(body["message"], "Users fetched successfully");
    assert_eq!(body["pagination"]["total"], 2);
}

#[actix_rt::test]
async fn test_invalid_email_is_rejected() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = authed(&ctx, test::TestRequest::post().uri("/api/v1/users"))
        .set_json(json!({ "name": "Hoa", "email": "not-an-email" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_rt::test]
async fn test_patch_edits_the_caller() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = authed(&ctx, test::TestRequest::patch().uri("/api/v1/users"))
        .set_json(json!({ "name": "Renamed Guest", "phoneNumber": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User updated successfully");
    assert_eq!(body["data"]["id"], ctx.user_id.to_string());
    assert_eq!(body["data"]["name"], "Renamed Guest");
}

#[actix_rt::test]
async fn test_deleting_someone_else_requires_admin() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let uri = format!("/api/v1/users/{}", ctx.user_id);

    let stranger = token_with_role(Uuid::new_v4(), "USER", SECRET);
    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header((AUTHORIZATION, format!("Bearer {}", stranger)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "You don't have permission to delete this user");

    let admin = token_with_role(Uuid::new_v4(), "ADMIN", SECRET);
    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header((AUTHORIZATION, format!("Bearer {}", admin)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User deactivated successfully");
    assert_eq!(body["data"]["active"], false);

    let get = authed(&ctx, test::TestRequest::get().uri(&uri)).to_request();
    assert_eq!(test::call_service(&app, get).await.status(), 404);
}

#[actix_rt::test]
async fn test_malformed_body_uses_envelope() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = authed(&ctx, test::TestRequest::post().uri("/api/v1/users"))
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 400);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}
