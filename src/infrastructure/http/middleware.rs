//! HTTP Middleware
//!
//! - HTTP 状态码错误日志中间件
//! - Access token 鉴权中间件

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::application::AuthenticateToken;

use super::error::ApiError;
use super::state::AppState;

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

/// Access token 鉴权中间件
///
/// 从 `Authorization` 头取 token（可带 `Bearer ` 前缀），找到对应用户后
/// 把 `AuthenticatedUser` 放入请求扩展；否则返回 401 `{loggedOut: true}`
pub async fn require_access_token(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_access_token(request.headers()).ok_or(ApiError::LoggedOut)?;

    let user = state
        .authenticate_token_handler
        .handle(AuthenticateToken { token })
        .await?
        .ok_or(ApiError::LoggedOut)?;

    tracing::debug!(user_id = %user.id, "Access token accepted");
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// 提取 access token
fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    // 先去掉 Bearer 前缀再 trim，"Bearer " 与 "Bearer" 都视为空
    let token = match value.strip_prefix("Bearer") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => value,
    };

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{HeaderValue, Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn not_found_handler() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    async fn error_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/not-found", get(not_found_handler))
            .route("/error", get(error_handler))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    #[tokio::test]
    async fn test_logging_middleware_passes_responses_through() {
        for (uri, expected) in [
            ("/ok", StatusCode::OK),
            ("/not-found", StatusCode::NOT_FOUND),
            ("/error", StatusCode::INTERNAL_SERVER_ERROR),
        ] {
            let request = HttpRequest::builder()
                .uri(uri)
                .body(Body::empty())
                .unwrap();

            let response = create_test_router().oneshot(request).await.unwrap();
            assert_eq!(response.status(), expected);
        }
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_raw_token() {
        assert_eq!(
            extract_access_token(&headers_with("abc123")),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(
            extract_access_token(&headers_with("Bearer abc123")),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_missing_or_blank_header_yields_none() {
        assert_eq!(extract_access_token(&HeaderMap::new()), None);
        assert_eq!(extract_access_token(&headers_with("Bearer ")), None);
        assert_eq!(extract_access_token(&headers_with("Bearer")), None);
        assert_eq!(extract_access_token(&headers_with("  Bearer   ")), None);
    }

    #[test]
    fn test_bearer_prefix_needs_separator() {
        assert_eq!(
            extract_access_token(&headers_with("Bearer   abc123  ")),
            Some("abc123".to_string())
        );
        assert_eq!(
            extract_access_token(&headers_with("Bearerabc123")),
            Some("Bearerabc123".to_string())
        );
    }
}
