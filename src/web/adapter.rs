//! Request adapter for hosts without `http::Request`.

use http::{HeaderMap, HeaderName, HeaderValue};

use crate::ajax::{X_REQUESTED_WITH, XML_HTTP_REQUEST};
use crate::request::{GuardRequest, Principal};

/// Owned request data for guard evaluation.
///
/// `RequestAdapter` carries exactly what guards inspect: the authenticated
/// principal, the headers and the requested path. Framework-specific code
/// fills it from its own request type.
///
/// # Examples
///
/// ```
/// use request_guard::web::RequestAdapter;
/// use request_guard::{GuardRequest, Principal};
///
/// let mut adapter = RequestAdapter::new("req-12345".to_string());
/// adapter.set_path("/reports/?year=2024");
/// adapter.mark_ajax();
/// assert!(!adapter.is_authenticated());
///
/// adapter.set_principal(Some(Principal {
///     id: "user-1".to_string(),
///     name: "Alice".to_string(),
/// }));
/// assert!(adapter.is_authenticated());
/// assert_eq!(adapter.full_path(), "/reports/?year=2024");
/// ```
#[derive(Debug, Clone)]
pub struct RequestAdapter {
    /// Unique request identifier
    request_id: String,
    /// Authenticated principal (optional)
    principal: Option<Principal>,
    /// Request headers
    headers: HeaderMap,
    /// Path plus query string
    path: String,
}

impl RequestAdapter {
    /// Creates an anonymous request for `/` with no headers.
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            principal: None,
            headers: HeaderMap::new(),
            path: "/".to_string(),
        }
    }

    /// Sets the authenticated principal for this request.
    ///
    /// Called by host middleware after its own authentication succeeded.
    /// `None` makes the request anonymous again.
    pub fn set_principal(&mut self, principal: Option<Principal>) {
        self.principal = principal;
    }

    /// Adds a header, replacing any previous value.
    pub fn add_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Marks the request as AJAX with `X-Requested-With: XMLHttpRequest`.
    pub fn mark_ajax(&mut self) {
        self.add_header(X_REQUESTED_WITH, HeaderValue::from_static(XML_HTTP_REQUEST));
    }

    /// Sets the requested path, including any query string.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }
}

impl GuardRequest for RequestAdapter {
    fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn full_path(&self) -> &str {
        &self.path
    }

    fn request_id(&self) -> Option<&str> {
        Some(&self.request_id)
    }
}
