// Authentication gate for every route except the welcome and start routes.
//
// The bearer token is resolved to an `Identity` and attached to the request
// extensions, where protected handlers pick it up with `Extension<Identity>`.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::shell::error::{ApiError, USER_NOT_FOUND};
use crate::shell::state::AppState;

pub const MISSING_TOKEN: &str = "Missing or invalid token";

/// Token after `Bearer `, up to the next space.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .split(' ')
        .next()
}

pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())
        .map(str::to_owned)
        .ok_or_else(|| ApiError::Unauthorized(MISSING_TOKEN.into()))?;

    let identity = state
        .credentials
        .resolve(&token)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "credential resolution failed");
            ApiError::Internal
        })?
        .ok_or_else(|| {
            tracing::debug!(token = %token, "unknown bearer token");
            ApiError::Unauthorized(USER_NOT_FOUND.into())
        })?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod bearer_token_tests {
    use super::*;
    use axum::http::HeaderValue;
    use rstest::rstest;

    fn headers(value: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        }
        headers
    }

    #[rstest]
    #[case(Some("Bearer a@b.com"), Some("a@b.com"))]
    #[case(Some("Bearer a@b.com extra"), Some("a@b.com"))]
    #[case(Some("Bearer "), Some(""))]
    #[case(Some("bearer a@b.com"), None)]
    #[case(Some("Basic a@b.com"), None)]
    #[case(Some("a@b.com"), None)]
    #[case(None, None)]
    fn it_should_extract_the_bearer_token(
        #[case] header: Option<&'static str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(bearer_token(&headers(header)), expected);
    }
}
