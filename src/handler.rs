use http::Response;

/// A request handler: the thing a guard wraps.
///
/// Any `Fn(&R) -> Response<B>` closure or function is a handler, and every
/// guarded handler is itself a handler, so guards stack by nesting.
///
/// # Examples
///
/// ```
/// use http::{Response, StatusCode};
/// use request_guard::Handler;
/// use request_guard::web::RequestAdapter;
///
/// fn inbox(_req: &RequestAdapter) -> Response<String> {
///     Response::new("3 unread".to_string())
/// }
///
/// let res = inbox.handle(&RequestAdapter::new("req-1".to_string()));
/// assert_eq!(res.status(), StatusCode::OK);
/// assert_eq!(res.body(), "3 unread");
/// ```
pub trait Handler<R: ?Sized, B> {
    /// Produces the response for `req`.
    fn handle(&self, req: &R) -> Response<B>;
}

impl<R: ?Sized, B, F> Handler<R, B> for F
where
    F: Fn(&R) -> Response<B>,
{
    fn handle(&self, req: &R) -> Response<B> {
        (self)(req)
    }
}
