use http::{HeaderValue, Response};
use url::form_urlencoded;

use crate::config::GuardConfig;
use crate::error::{Violation, ViolationKind};
use crate::guard::{Guard, Guarded};
use crate::request::GuardRequest;
use crate::response::{auth_required, redirect};

/// Requires an authenticated caller, answering AJAX requests without a
/// redirect.
///
/// - Authenticated: the handler runs.
/// - Anonymous AJAX request: 200 with `X-Django-Requires-Auth: True` and
///   `X-Django-Login-Url: <login URL>`.
/// - Anonymous regular request: 302 to the login URL.
#[derive(Debug, Clone, Default)]
pub struct RequireLogin {
    config: GuardConfig,
}

impl RequireLogin {
    /// Creates the guard from shared configuration.
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this guard reads.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    fn login_location<R: GuardRequest + ?Sized>(&self, req: &R) -> HeaderValue {
        let Some(field) = self.config.redirect_field_name() else {
            return self.config.login_url_value().clone();
        };

        let (base, fragment) = split_fragment(self.config.login_url());
        let (path, existing) = base.split_once('?').unwrap_or((base, ""));

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form_urlencoded::parse(existing.as_bytes()).filter(|(k, _)| k != field))
            .append_pair(field, req.full_path())
            .finish();

        ascii_header(format!("{path}?{query}{fragment}"))
    }
}

/// Splits `url` before its `#fragment`, keeping the `#` on the fragment.
fn split_fragment(url: &str) -> (&str, &str) {
    url.find('#').map_or((url, ""), |at| url.split_at(at))
}

// The login URL is validated as visible ASCII when the config is built, and
// form encoding only emits visible ASCII.
fn ascii_header(location: String) -> HeaderValue {
    HeaderValue::try_from(location).expect("login location is visible ASCII")
}

impl Guard for RequireLogin {
    fn name(&self) -> &'static str {
        "login_required"
    }

    fn check<R: GuardRequest + ?Sized>(&self, req: &R) -> Result<(), Violation> {
        if req.is_authenticated() {
            return Ok(());
        }

        let ajax = self.config.ajax_detector().is_ajax(req.headers());
        Err(Violation::new(
            ViolationKind::Unauthenticated { ajax },
            "Authentication required",
        ))
    }

    fn reject<R: GuardRequest + ?Sized, B: Default>(
        &self,
        req: &R,
        violation: &Violation,
    ) -> Response<B> {
        match violation.kind {
            ViolationKind::Unauthenticated { ajax: true } => {
                auth_required(self.config.login_url_value().clone())
            }
            _ => redirect(self.login_location(req)),
        }
    }
}

/// Wraps `handler` so only authenticated callers reach it.
///
/// # Examples
///
/// ```
/// use http::{Response, StatusCode};
/// use request_guard::{login_required, GuardConfig, Handler, Principal};
/// use request_guard::web::RequestAdapter;
///
/// let config = GuardConfig::new("/login/").unwrap();
/// let profile = login_required(|_: &RequestAdapter| Response::new("profile"), &config);
///
/// // Anonymous page load: redirect to the login page
/// let mut req = RequestAdapter::new("req-1".to_string());
/// let res = profile.handle(&req);
/// assert_eq!(res.status(), StatusCode::FOUND);
/// assert_eq!(res.headers()["location"], "/login/");
///
/// // Anonymous AJAX call: 200 with login headers
/// req.mark_ajax();
/// let res = profile.handle(&req);
/// assert_eq!(res.status(), StatusCode::OK);
/// assert_eq!(res.headers()["x-django-login-url"], "/login/");
///
/// // Logged in: the view runs
/// req.set_principal(Some(Principal {
///     id: "user-1".to_string(),
///     name: "Alice".to_string(),
/// }));
/// assert_eq!(*profile.handle(&req).body(), "profile");
/// ```
pub fn login_required<H>(handler: H, config: &GuardConfig) -> Guarded<RequireLogin, H> {
    RequireLogin::new(config.clone()).wrap(handler)
}
