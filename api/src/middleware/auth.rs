//! Bearer token authentication.
//!
//! Handlers that require an authenticated user take a [`CallerContext`]
//! parameter; the extractor pulls the bearer token from the Authorization
//! header, verifies it against the shared [`TokenService`], and hands the
//! handler an explicit `Caller` (user id + role). Requests without a valid
//! token are answered with a 401 in the standard envelope.

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{error::InternalError, web, Error, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use std::sync::Arc;

use ky_core::services::token::TokenService;
use ky_core::services::Caller;
use ky_shared::types::response::ApiResponse;

/// The authenticated caller, extracted from the bearer token
#[derive(Debug, Clone, Copy)]
pub struct CallerContext(pub Caller);

impl CallerContext {
    pub fn caller(&self) -> &Caller {
        &self.0
    }
}

fn unauthorized(message: &str) -> Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::Unauthorized().json(ApiResponse::error(message)),
    )
    .into()
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequest for CallerContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let tokens = match req.app_data::<web::Data<Arc<TokenService>>>() {
            Some(tokens) => tokens,
            None => return ready(Err(unauthorized("Authentication is not configured."))),
        };

        let token = match bearer_token(req) {
            Some(token) => token,
            None => {
                return ready(Err(unauthorized(
                    "Missing or invalid Authorization header.",
                )))
            }
        };

        let result = tokens
            .verify(token)
            .and_then(|claims| claims.caller())
            .map(CallerContext)
            .map_err(|err| unauthorized(&format!("{}.", err)));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use ky_core::domain::entities::user::{User, UserRole};

    fn token_data(secret: &str) -> web::Data<Arc<TokenService>> {
        web::Data::new(Arc::new(TokenService::new(secret, 3600)))
    }

    #[actix_rt::test]
    async fn test_extracts_caller_from_valid_token() {
        let tokens = token_data("secret");
        let user = User::new("255712345678".to_string(), UserRole::Owner);
        let issued = tokens.issue(&user).unwrap();

        let req = TestRequest::default()
            .app_data(tokens)
            .insert_header((AUTHORIZATION, format!("Bearer {}", issued.token)))
            .to_http_request();

        let ctx = CallerContext::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(ctx.caller().user_id, user.id);
        assert_eq!(ctx.caller().role, UserRole::Owner);
    }

    #[actix_rt::test]
    async fn test_missing_header_is_rejected() {
        let req = TestRequest::default()
            .app_data(token_data("secret"))
            .to_http_request();
        assert!(CallerContext::from_request(&req, &mut Payload::None)
            .await
            .is_err());
    }

    #[actix_rt::test]
    async fn test_wrong_secret_is_rejected() {
        let issuer = TokenService::new("other-secret", 3600);
        let user = User::new("255712345678".to_string(), UserRole::Customer);
        let issued = issuer.issue(&user).unwrap();

        let req = TestRequest::default()
            .app_data(token_data("secret"))
            .insert_header((AUTHORIZATION, format!("Bearer {}", issued.token)))
            .to_http_request();
        assert!(CallerContext::from_request(&req, &mut Payload::None)
            .await
            .is_err());
    }

    #[actix_rt::test]
    async fn test_non_bearer_scheme_is_rejected() {
        let req = TestRequest::default()
            .app_data(token_data("secret"))
            .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert!(CallerContext::from_request(&req, &mut Payload::None)
            .await
            .is_err());
    }
}
