//! Handler for POST /api/v1/auth/logout

use actix_web::HttpResponse;

use ky_shared::types::response::ApiResponse;

use crate::middleware::CallerContext;

/// Acknowledge a logout
///
/// Tokens are stateless, so there is nothing to revoke server-side; the
/// client discards its token. The endpoint still requires a valid token so
/// an expired session gets a 401 rather than a false success.
pub async fn logout(_ctx: CallerContext) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok().with_message("Logged out successfully."))
}
