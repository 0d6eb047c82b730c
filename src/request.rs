use http::HeaderMap;

/// Header carrying the request identifier used in guard log events.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// An authenticated user or service principal.
///
/// The host framework attaches a principal once its own authentication has
/// succeeded. A request without one is anonymous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Unique identifier for this principal
    pub id: String,
    /// Display name
    pub name: String,
}

/// The view of an incoming request that guards need.
///
/// Guards never mutate the request. Implementations only expose state the
/// host framework has already established.
pub trait GuardRequest {
    /// Authenticated principal, if any.
    fn principal(&self) -> Option<&Principal>;

    /// Request headers, used for AJAX detection.
    fn headers(&self) -> &HeaderMap;

    /// Path plus query string, as the client requested it.
    fn full_path(&self) -> &str;

    /// Request identifier for log correlation.
    fn request_id(&self) -> Option<&str> {
        None
    }

    /// Returns `true` if a principal is attached.
    fn is_authenticated(&self) -> bool {
        self.principal().is_some()
    }
}

/// Reads the principal from request extensions and the request id from the
/// `x-request-id` header.
///
/// # Examples
///
/// ```
/// use request_guard::{GuardRequest, Principal};
///
/// let mut req = http::Request::builder()
///     .uri("/inbox/?page=2")
///     .header("x-request-id", "req-7")
///     .body(())
///     .unwrap();
/// assert!(!req.is_authenticated());
///
/// req.extensions_mut().insert(Principal {
///     id: "user-1".to_string(),
///     name: "Alice".to_string(),
/// });
/// assert!(req.is_authenticated());
/// assert_eq!(GuardRequest::full_path(&req), "/inbox/?page=2");
/// assert_eq!(GuardRequest::request_id(&req), Some("req-7"));
/// ```
impl<B> GuardRequest for http::Request<B> {
    fn principal(&self) -> Option<&Principal> {
        self.extensions().get::<Principal>()
    }

    fn headers(&self) -> &HeaderMap {
        http::Request::headers(self)
    }

    fn full_path(&self) -> &str {
        self.uri()
            .path_and_query()
            .map_or_else(|| self.uri().path(), |pq| pq.as_str())
    }

    fn request_id(&self) -> Option<&str> {
        http::Request::headers(self)
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
    }
}
