use std::fmt;
use std::sync::Arc;

use http::Response;

use crate::ajax::{AjaxDetector, RequestedWith};
use crate::config::GuardConfig;
use crate::error::{Violation, ViolationKind};
use crate::guard::{Guard, Guarded};
use crate::request::GuardRequest;
use crate::response::bad_request;

/// Only lets AJAX requests through; everything else gets 400 Bad Request.
#[derive(Clone)]
pub struct RequireAjax {
    detector: Arc<dyn AjaxDetector>,
}

impl RequireAjax {
    /// Creates the guard with a custom AJAX detector.
    pub fn new(detector: impl AjaxDetector + 'static) -> Self {
        Self {
            detector: Arc::new(detector),
        }
    }

    /// Shares the detector configured in `config`.
    pub fn from_config(config: &GuardConfig) -> Self {
        Self {
            detector: Arc::clone(config.ajax_detector()),
        }
    }
}

impl Default for RequireAjax {
    fn default() -> Self {
        Self::new(RequestedWith::default())
    }
}

impl fmt::Debug for RequireAjax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequireAjax").finish_non_exhaustive()
    }
}

impl Guard for RequireAjax {
    fn name(&self) -> &'static str {
        "ajax_required"
    }

    fn check<R: GuardRequest + ?Sized>(&self, req: &R) -> Result<(), Violation> {
        if self.detector.is_ajax(req.headers()) {
            Ok(())
        } else {
            Err(Violation::new(
                ViolationKind::AjaxRequired,
                "Request was not made over AJAX",
            ))
        }
    }

    fn reject<R: GuardRequest + ?Sized, B: Default>(
        &self,
        _req: &R,
        _violation: &Violation,
    ) -> Response<B> {
        bad_request()
    }
}

/// Wraps `handler` so only AJAX requests reach it, detected by the
/// conventional `X-Requested-With: XMLHttpRequest` header.
///
/// Use [`RequireAjax::new`] or [`RequireAjax::from_config`] with
/// [`Guard::wrap`] for a different detector.
pub fn ajax_required<H>(handler: H) -> Guarded<RequireAjax, H> {
    RequireAjax::default().wrap(handler)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use http::{HeaderMap, HeaderValue, StatusCode};

    use super::*;
    use crate::handler::Handler;
    use crate::web::RequestAdapter;

    fn ajax() -> RequestAdapter {
        let mut req = RequestAdapter::new("req-ajax".to_string());
        req.mark_ajax();
        req
    }

    #[test]
    fn ajax_request_reaches_handler() {
        let calls = Cell::new(0);
        let view = ajax_required(|_: &RequestAdapter| {
            calls.set(calls.get() + 1);
            let mut res = Response::new("{}".to_string());
            res.headers_mut()
                .insert("content-type", HeaderValue::from_static("application/json"));
            res
        });

        let res = view.handle(&ajax());

        assert_eq!(calls.get(), 1);
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["content-type"], "application/json");
        assert_eq!(res.body(), "{}");
    }

    #[test]
    fn plain_request_is_bad_request() {
        let calls = Cell::new(0);
        let view = ajax_required(|_: &RequestAdapter| {
            calls.set(calls.get() + 1);
            Response::new("{}".to_string())
        });

        let res = view.handle(&RequestAdapter::new("req-plain".to_string()));

        assert_eq!(calls.get(), 0);
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(res.body().is_empty());
    }

    #[test]
    fn ignores_authentication_state() {
        let guard = RequireAjax::default();
        let mut req = ajax();
        req.set_principal(Some(crate::Principal {
            id: "u".to_string(),
            name: "U".to_string(),
        }));
        assert!(guard.check(&req).is_ok());
    }

    #[test]
    fn check_reports_ajax_required() {
        let err = RequireAjax::default()
            .check(&RequestAdapter::new("req".to_string()))
            .unwrap_err();
        assert_eq!(err.kind, ViolationKind::AjaxRequired);
    }

    #[test]
    fn custom_detector() {
        let guard = RequireAjax::new(|headers: &HeaderMap| headers.contains_key("x-fetch"));
        let mut req = RequestAdapter::new("req".to_string());
        assert!(guard.check(&ajax()).is_err());

        req.add_header(
            http::HeaderName::from_static("x-fetch"),
            HeaderValue::from_static("1"),
        );
        assert!(guard.check(&req).is_ok());
    }

    #[test]
    fn from_config_shares_detector() {
        let config = GuardConfig::default().with_ajax_detector(|_: &HeaderMap| true);
        let guard = RequireAjax::from_config(&config);
        assert!(guard.check(&RequestAdapter::new("req".to_string())).is_ok());
    }
}
