//! Responses built by guards when they short-circuit.
//!
//! Bodies are always `B::default()`; clients act on the status and headers.

use http::header::LOCATION;
use http::{HeaderName, HeaderValue, Response, StatusCode};

/// Header set on AJAX responses when login is required.
pub const REQUIRES_AUTH_HEADER: HeaderName = HeaderName::from_static("x-django-requires-auth");

/// Header carrying the login URL on AJAX responses when login is required.
pub const LOGIN_URL_HEADER: HeaderName = HeaderName::from_static("x-django-login-url");

/// 302 Found pointing at `location`.
pub fn redirect<B: Default>(location: HeaderValue) -> Response<B> {
    let mut res = Response::new(B::default());
    *res.status_mut() = StatusCode::FOUND;
    res.headers_mut().insert(LOCATION, location);
    res
}

/// 400 Bad Request with an empty body.
pub fn bad_request<B: Default>() -> Response<B> {
    let mut res = Response::new(B::default());
    *res.status_mut() = StatusCode::BAD_REQUEST;
    res
}

/// 200 OK telling a script-driven client to send the user to `login_url`.
///
/// AJAX clients cannot follow a login redirect on the user's behalf, so the
/// requirement travels in headers instead.
pub fn auth_required<B: Default>(login_url: HeaderValue) -> Response<B> {
    let mut res = Response::new(B::default());
    let headers = res.headers_mut();
    headers.insert(REQUIRES_AUTH_HEADER, HeaderValue::from_static("True"));
    headers.insert(LOGIN_URL_HEADER, login_url);
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_is_found_with_location() {
        let res: Response<()> = redirect(HeaderValue::from_static("/login/"));
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(res.headers()[LOCATION], "/login/");
    }

    #[test]
    fn bad_request_has_no_headers() {
        let res: Response<String> = bad_request();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(res.headers().is_empty());
        assert!(res.body().is_empty());
    }

    #[test]
    fn auth_required_is_ok_with_both_headers() {
        let res: Response<Vec<u8>> = auth_required(HeaderValue::from_static("/accounts/login/"));
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[REQUIRES_AUTH_HEADER], "True");
        assert_eq!(res.headers()[LOGIN_URL_HEADER], "/accounts/login/");
        assert!(res.headers().get(LOCATION).is_none());
    }

    #[test]
    fn header_names_are_case_insensitive() {
        let res: Response<()> = auth_required(HeaderValue::from_static("/login/"));
        assert!(res.headers().contains_key("X-Django-Requires-Auth"));
        assert!(res.headers().contains_key("X-Django-Login-Url"));
    }
}
