// src/utils/basic_auth.rs

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use sqlx::SqlitePool;

use crate::{error::AppError, services::user_service};

/// Name and plaintext password taken from an `Authorization: Basic` header.
#[derive(Debug, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

/// Extracts Basic credentials from the request headers.
///
/// Returns `None` when the header is absent, uses another scheme,
/// or does not decode to `name:password`.
pub fn parse_credentials(headers: &HeaderMap) -> Option<Credentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    // The password may itself contain ':'; the name may not.
    let (name, password) = decoded.split_once(':')?;

    Some(Credentials {
        name: name.to_string(),
        password: password.to_string(),
    })
}

/// Axum Middleware: Authentication.
///
/// Resolves the caller from Basic credentials and injects the `Principal`
/// into the request extensions for handlers to pass on to the services.
/// Missing or wrong credentials end the request with 401.
pub async fn auth_middleware(
    State(pool): State<SqlitePool>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = parse_credentials(req.headers())
        .ok_or_else(|| AppError::AuthError("Authentication required".to_string()))?;

    let principal =
        user_service::authenticate(&pool, &credentials.name, &credentials.password).await?;

    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn parses_basic_credentials() {
        let encoded = STANDARD.encode("test@mail.org:pa:ss");
        let creds = parse_credentials(&headers_with(&format!("Basic {}", encoded))).unwrap();
        assert_eq!(
            creds,
            Credentials {
                name: "test@mail.org".into(),
                password: "pa:ss".into()
            }
        );
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let encoded = STANDARD.encode("a@b.c:12345");
        assert!(parse_credentials(&headers_with(&format!("basic {}", encoded))).is_some());
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert!(parse_credentials(&HeaderMap::new()).is_none());
        assert!(parse_credentials(&headers_with("Bearer abc.def.ghi")).is_none());
        assert!(parse_credentials(&headers_with("Basic !!!not-base64")).is_none());
        let no_colon = STANDARD.encode("justaname");
        assert!(parse_credentials(&headers_with(&format!("Basic {}", no_colon))).is_none());
    }
}
