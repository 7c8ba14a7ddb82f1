use actix_web::HttpResponse;
use hs_shared::BaseResponse;

/// Handler for GET /health
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "code": 200,
///     "message": "Service is healthy",
///     "data": {
///         "status": "healthy",
///         "service": "homestay-api",
///         "version": "0.1.0",
///         "timestamp": "2030-01-01T10:00:00+00:00"
///     }
/// }
/// ```
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(BaseResponse::success(
        serde_json::json!({
            "status": "healthy",
            "service": "homestay-api",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }),
        "Service is healthy",
    ))
}
