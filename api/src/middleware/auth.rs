//! JWT authentication middleware for protecting API endpoints.
//!
//! Access tokens are issued by the account service and signed with the
//! shared HS256 secret. This middleware only verifies them: it reads the
//! `Authorization: Bearer <token>` header, checks signature and expiry, and
//! injects an [`AuthContext`] into the request extensions. Rejections are
//! answered with a 401 in the standard response envelope.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use hs_shared::AuthConfig;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use thiserror::Error;
use uuid::Uuid;

use crate::handlers::error_response;

/// Claims carried by access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub id: String,
    pub email: String,
    pub role: String,
    /// Expiry as seconds since the epoch
    pub exp: usize,
}

/// Reasons a request is rejected before reaching a handler
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("No token provided")]
    MissingToken,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Invalid or expired token")]
    InvalidToken,
}

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
}

impl AuthContext {
    pub fn from_claims(claims: Claims) -> Result<Self, AuthError> {
        let user_id = Uuid::parse_str(&claims.id).map_err(|_| AuthError::InvalidToken)?;
        Ok(Self {
            user_id,
            email: claims.email,
            role: claims.role,
        })
    }
}

/// Key material and validation rules shared by every middleware instance
struct Verifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Verifier {
    fn verify(&self, token: &str) -> Result<AuthContext, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                log::debug!("Token decode error: {}", e);
                AuthError::InvalidToken
            })?;
        AuthContext::from_claims(token_data.claims)
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    verifier: Rc<Verifier>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        Self {
            verifier: Rc::new(Verifier {
                decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
                validation,
            }),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Rc::clone(&self.verifier),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Rc<Verifier>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Rc::clone(&self.verifier);

        Box::pin(async move {
            let auth_context =
                extract_bearer_token(&req).and_then(|token| verifier.verify(&token));

            match auth_context {
                Ok(context) => {
                    req.extensions_mut().insert(context);
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(err) => {
                    log::warn!("Unauthorized request to {}: {}", req.path(), err);
                    let response = error_response(StatusCode::UNAUTHORIZED, err.to_string(), None);
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Result<String, AuthError> {
    let header = req.headers().get(AUTHORIZATION).ok_or(AuthError::MissingToken)?;

    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(AuthError::InvalidFormat)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn claims(id: &str, exp: i64) -> Claims {
        Claims {
            id: id.to_string(),
            email: "guest@example.com".to_string(),
            role: "USER".to_string(),
            exp: exp as usize,
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req), Ok("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), Err(AuthError::InvalidFormat));

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_empty), Err(AuthError::InvalidFormat));

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), Err(AuthError::MissingToken));
    }

    #[test]
    fn test_verify_accepts_valid_token() {
        let auth = JwtAuth::new(&AuthConfig::new("secret"));
        let user_id = Uuid::new_v4();
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = sign(&claims(&user_id.to_string(), exp), "secret");

        let context = auth.verifier.verify(&token).unwrap();
        assert_eq!(context.user_id, user_id);
        assert_eq!(context.role, "USER");
    }

    #[test]
    fn test_verify_rejects_bad_tokens() {
        let auth = JwtAuth::new(&AuthConfig::new("secret"));
        let now = chrono::Utc::now().timestamp();
        let user_id = Uuid::new_v4().to_string();

        let wrong_secret = sign(&claims(&user_id, now + 3600), "other");
        assert_eq!(auth.verifier.verify(&wrong_secret).unwrap_err(), AuthError::InvalidToken);

        let expired = sign(&claims(&user_id, now - 3600), "secret");
        assert_eq!(auth.verifier.verify(&expired).unwrap_err(), AuthError::InvalidToken);

        let bad_id = sign(&claims("not-a-uuid", now + 3600), "secret");
        assert_eq!(auth.verifier.verify(&bad_id).unwrap_err(), AuthError::InvalidToken);

        assert_eq!(auth.verifier.verify("garbage").unwrap_err(), AuthError::InvalidToken);
    }
}
