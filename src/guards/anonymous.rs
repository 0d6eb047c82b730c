use http::{HeaderValue, Response};

use crate::config::{parse_redirect_target, GuardConfig, DEFAULT_ANONYMOUS_REDIRECT};
use crate::error::{Error, Violation, ViolationKind};
use crate::guard::{Guard, Guarded};
use crate::request::GuardRequest;
use crate::response::redirect;

/// Only lets anonymous callers through; authenticated ones are redirected.
///
/// Typical for login and sign-up pages, which make no sense to a user who is
/// already logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireAnonymous {
    redirect_to: HeaderValue,
}

impl RequireAnonymous {
    /// Redirects authenticated callers to `target` instead of `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRedirectTarget`] if `target` cannot be sent in
    /// a `Location` header.
    pub fn redirect_to(target: &str) -> Result<Self, Error> {
        Ok(Self {
            redirect_to: parse_redirect_target(target)?,
        })
    }

    /// Uses the configured default redirect target.
    pub fn from_config(config: &GuardConfig) -> Self {
        Self {
            redirect_to: config.anonymous_redirect_value().clone(),
        }
    }

    /// Returns where authenticated callers are sent.
    pub fn target(&self) -> &str {
        self.redirect_to.to_str().unwrap_or(DEFAULT_ANONYMOUS_REDIRECT)
    }
}

impl Default for RequireAnonymous {
    fn default() -> Self {
        Self {
            redirect_to: HeaderValue::from_static(DEFAULT_ANONYMOUS_REDIRECT),
        }
    }
}

impl Guard for RequireAnonymous {
    fn name(&self) -> &'static str {
        "anonymous_required"
    }

    fn check<R: GuardRequest + ?Sized>(&self, req: &R) -> Result<(), Violation> {
        if req.is_authenticated() {
            Err(Violation::new(
                ViolationKind::AnonymousRequired,
                "Already authenticated",
            ))
        } else {
            Ok(())
        }
    }

    fn reject<R: GuardRequest + ?Sized, B: Default>(
        &self,
        _req: &R,
        _violation: &Violation,
    ) -> Response<B> {
        redirect(self.redirect_to.clone())
    }
}

/// Wraps `handler` so only anonymous callers reach it; authenticated callers
/// are redirected to `/`.
pub fn anonymous_required<H>(handler: H) -> Guarded<RequireAnonymous, H> {
    RequireAnonymous::default().wrap(handler)
}

/// Like [`anonymous_required`], redirecting authenticated callers to `target`.
///
/// # Errors
///
/// Returns [`Error::InvalidRedirectTarget`] if `target` cannot be sent in a
/// `Location` header.
///
/// # Examples
///
/// ```
/// use http::{Response, StatusCode};
/// use request_guard::{anonymous_required_to, Handler, Principal};
/// use request_guard::web::RequestAdapter;
///
/// let signup = anonymous_required_to(|_: &RequestAdapter| Response::new("sign up"), "/custom/")
///     .unwrap();
///
/// let mut req = RequestAdapter::new("req-1".to_string());
/// assert_eq!(*signup.handle(&req).body(), "sign up");
///
/// req.set_principal(Some(Principal {
///     id: "user-1".to_string(),
///     name: "Alice".to_string(),
/// }));
/// let res = signup.handle(&req);
/// assert_eq!(res.status(), StatusCode::FOUND);
/// assert_eq!(res.headers()["location"], "/custom/");
/// ```
pub fn anonymous_required_to<H>(
    handler: H,
    target: &str,
) -> Result<Guarded<RequireAnonymous, H>, Error> {
    Ok(RequireAnonymous::redirect_to(target)?.wrap(handler))
}
