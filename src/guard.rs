use http::Response;

use crate::error::Violation;
use crate::handler::Handler;
use crate::logging::GuardLog;
use crate::request::GuardRequest;

/// An access policy: a predicate over the request plus the response sent
/// when the predicate fails.
///
/// A `Guard` does not call handlers itself. Wrap a handler with
/// [`Guard::wrap`] to get a [`Guarded`] handler that enforces the policy.
pub trait Guard {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Decides whether the request may reach the wrapped handler.
    ///
    /// # Errors
    ///
    /// Returns the [`Violation`] describing why the request is blocked.
    fn check<R: GuardRequest + ?Sized>(&self, req: &R) -> Result<(), Violation>;

    /// Builds the response for a request that failed [`Guard::check`].
    fn reject<R: GuardRequest + ?Sized, B: Default>(
        &self,
        req: &R,
        violation: &Violation,
    ) -> Response<B>;

    /// Wraps `handler` so it only runs when this guard allows the request.
    fn wrap<H>(self, handler: H) -> Guarded<Self, H>
    where
        Self: Sized,
    {
        Guarded::new(self, handler)
    }
}

/// A handler protected by a guard.
///
/// Each call evaluates the guard once, then runs either the inner handler or
/// the guard's rejection. Never both, and never the handler twice.
///
/// # Examples
///
/// ```
/// use http::{Response, StatusCode};
/// use request_guard::{Guard, Handler, RequireAjax};
/// use request_guard::web::RequestAdapter;
///
/// let handler = RequireAjax::default().wrap(|_: &RequestAdapter| Response::new("ok"));
///
/// let mut req = RequestAdapter::new("req-1".to_string());
/// assert_eq!(handler.handle(&req).status(), StatusCode::BAD_REQUEST);
///
/// req.mark_ajax();
/// assert_eq!(*handler.handle(&req).body(), "ok");
/// ```
#[derive(Debug, Clone)]
pub struct Guarded<G, H> {
    guard: G,
    inner: H,
}

impl<G, H> Guarded<G, H> {
    /// Wraps `inner` with `guard`.
    pub fn new(guard: G, inner: H) -> Self {
        Self { guard, inner }
    }

    /// Returns the guard.
    pub fn guard(&self) -> &G {
        &self.guard
    }

    /// Returns the wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// Unwraps into the guard and the handler.
    pub fn into_parts(self) -> (G, H) {
        (self.guard, self.inner)
    }
}

impl<R, B, G, H> Handler<R, B> for Guarded<G, H>
where
    R: GuardRequest + ?Sized,
    B: Default,
    G: Guard,
    H: Handler<R, B>,
{
    fn handle(&self, req: &R) -> Response<B> {
        let log = GuardLog::new(self.guard.name(), req.request_id());

        match self.guard.check(req) {
            Ok(()) => {
                log.allowed();
                self.inner.handle(req)
            }
            Err(violation) => {
                log.blocked(&violation);
                self.guard.reject(req, &violation)
            }
        }
    }
}
