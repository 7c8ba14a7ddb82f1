//! Conversion of failures into the `{code, message, data}` envelope.

use std::collections::HashMap;

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use hs_core::errors::DomainError;
use hs_shared::BaseResponse;
use validator::ValidationErrors;

/// Build an error envelope with the given status
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    data: Option<serde_json::Value>,
) -> HttpResponse {
    HttpResponse::build(status).json(BaseResponse::error(message, status.as_u16(), data))
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    if error.is_internal() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::warn!("Request rejected: {}", error);
    }

    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    error_response(status, error.public_message(), error.data())
}

/// Field-level messages collected from `validator`
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();

    for (field, errors) in errors.field_errors() {
        let messages = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        field_errors.insert(field.to_string(), messages);
    }

    log::warn!("Validation failed: {:?}", field_errors);

    error_response(
        StatusCode::BAD_REQUEST,
        "Validation failed",
        serde_json::to_value(field_errors).ok(),
    )
}

/// Malformed JSON bodies
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_response(
        StatusCode::BAD_REQUEST,
        format!("Invalid request body: {}", err),
        None,
    );
    InternalError::from_response(err, response).into()
}

/// Malformed query strings
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_response(
        StatusCode::BAD_REQUEST,
        format!("Invalid query parameters: {}", err),
        None,
    );
    InternalError::from_response(err, response).into()
}

/// Path segments that fail to parse, e.g. a non-UUID id
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_response(StatusCode::BAD_REQUEST, "Invalid resource id", None);
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use uuid::Uuid;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_rt::test]
    async fn test_internal_error_is_masked() {
        let response = handle_domain_error(DomainError::internal("connection refused"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["code"], 500);
        assert_eq!(body["message"], "Internal server error");
        assert!(body["data"].is_null());
    }

    #[actix_rt::test]
    async fn test_conflict_carries_booking_id() {
        let booking_id = Uuid::new_v4();
        let response = handle_domain_error(DomainError::BookingConflict { booking_id });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Room is already booked");
        assert_eq!(body["data"]["conflictingBookingId"], booking_id.to_string());
    }

    #[actix_rt::test]
    async fn test_not_found_status() {
        let response = handle_domain_error(DomainError::not_found("Room"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Room not found");
    }
}
