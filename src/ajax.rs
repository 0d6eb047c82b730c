//! Pluggable detection of AJAX requests.
//!
//! Browsers do not mark asynchronous requests on their own. The long-standing
//! convention is a client-side `X-Requested-With: XMLHttpRequest` header, which
//! [`RequestedWith`] checks by default. Hosts with a different convention can
//! supply their own [`AjaxDetector`], including a plain closure.

use http::{HeaderMap, HeaderName, HeaderValue};

use crate::error::Error;

/// Conventional AJAX marker header.
pub const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

/// Value of [`X_REQUESTED_WITH`] set by XMLHttpRequest-based clients.
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Decides whether a request was made over AJAX.
///
/// # Examples
///
/// ```
/// use http::HeaderMap;
/// use request_guard::AjaxDetector;
///
/// let by_accept = |headers: &HeaderMap| {
///     headers
///         .get(http::header::ACCEPT)
///         .is_some_and(|v| v.as_bytes() == b"application/json")
/// };
///
/// let mut headers = HeaderMap::new();
/// assert!(!by_accept.is_ajax(&headers));
/// headers.insert(http::header::ACCEPT, "application/json".parse().unwrap());
/// assert!(by_accept.is_ajax(&headers));
/// ```
pub trait AjaxDetector: Send + Sync {
    /// Returns `true` if the headers mark an AJAX request.
    fn is_ajax(&self, headers: &HeaderMap) -> bool;
}

impl<F> AjaxDetector for F
where
    F: Fn(&HeaderMap) -> bool + Send + Sync,
{
    fn is_ajax(&self, headers: &HeaderMap) -> bool {
        (self)(headers)
    }
}

/// Detects AJAX requests by an exact header match.
///
/// The default matches `X-Requested-With: XMLHttpRequest`. Header names are
/// case-insensitive; the value must match byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedWith {
    header: HeaderName,
    value: HeaderValue,
}

impl RequestedWith {
    /// Creates a detector matching `header: value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAjaxHeader`] if either part is not valid in an
    /// HTTP header.
    pub fn new(header: &str, value: &str) -> Result<Self, Error> {
        let header = HeaderName::from_bytes(header.as_bytes())
            .map_err(|_| Error::InvalidAjaxHeader(header.to_string()))?;
        let value =
            HeaderValue::from_str(value).map_err(|_| Error::InvalidAjaxHeader(value.to_string()))?;
        Ok(Self { header, value })
    }

    /// Returns the header name this detector inspects.
    pub fn header(&self) -> &HeaderName {
        &self.header
    }
}

impl Default for RequestedWith {
    fn default() -> Self {
        Self {
            header: X_REQUESTED_WITH,
            value: HeaderValue::from_static(XML_HTTP_REQUEST),
        }
    }
}

impl AjaxDetector for RequestedWith {
    fn is_ajax(&self, headers: &HeaderMap) -> bool {
        headers.get(&self.header) == Some(&self.value)
    }
}
