//! Login, AJAX and anonymous-access guards for HTTP request handlers.
//!
//! A guard wraps a handler and decides, from the request's authentication
//! state and transport, whether the handler runs or the guard answers the
//! request itself:
//! - **`login_required`**: authenticated callers only. Anonymous AJAX calls get
//!   `200` with `X-Django-Requires-Auth` / `X-Django-Login-Url` headers so the
//!   client script can redirect; anonymous page loads get a `302` to the login
//!   URL.
//! - **`ajax_required`**: AJAX requests only, `400` otherwise.
//! - **`anonymous_required`**: anonymous callers only, `302` elsewhere
//!   (default `/`).
//!
//! Authentication, sessions and routing belong to the host framework. Guards
//! only read the request through [`GuardRequest`] and take their settings from
//! an explicit [`GuardConfig`].
//!
//! # Core Types
//!
//! - [`Handler`]: anything that turns a request into an `http::Response`
//! - [`Guard`]: a policy, i.e. a check plus the response sent when it fails
//! - [`Guarded`]: a handler wrapped by a guard
//! - [`GuardConfig`]: login URL, redirect targets and AJAX detection
//!
//! # Examples
//!
//! ```
//! use http::{Response, StatusCode};
//! use request_guard::{ajax_required, login_required, GuardConfig, Handler, Principal};
//! use request_guard::web::RequestAdapter;
//!
//! let config = GuardConfig::new("/accounts/login/").unwrap();
//!
//! // Guards stack: AJAX-only endpoint that also needs a logged-in user
//! let unread = login_required(
//!     ajax_required(|_: &RequestAdapter| Response::new("{\"unread\":3}")),
//!     &config,
//! );
//!
//! let mut req = RequestAdapter::new("req-1".to_string());
//! req.mark_ajax();
//!
//! let res = unread.handle(&req);
//! assert_eq!(res.status(), StatusCode::OK);
//! assert_eq!(res.headers()["x-django-login-url"], "/accounts/login/");
//!
//! req.set_principal(Some(Principal {
//!     id: "user-1".to_string(),
//!     name: "Alice".to_string(),
//! }));
//! let res = unread.handle(&req);
//! assert!(!res.headers().contains_key("x-django-requires-auth"));
//! assert_eq!(*res.body(), "{\"unread\":3}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ajax;
mod config;
mod error;
mod guard;
mod guards;
mod handler;
mod logging;
mod request;
pub mod response;
pub mod web;

pub use ajax::{AjaxDetector, RequestedWith, XML_HTTP_REQUEST, X_REQUESTED_WITH};
pub use config::{GuardConfig, GuardSettings, DEFAULT_ANONYMOUS_REDIRECT, DEFAULT_LOGIN_URL};
pub use error::{Error, Violation, ViolationKind};
pub use guard::{Guard, Guarded};
pub use guards::{
    ajax_required, anonymous_required, anonymous_required_to, login_required, RequireAjax,
    RequireAnonymous, RequireLogin,
};
pub use handler::Handler;
pub use request::{GuardRequest, Principal, REQUEST_ID_HEADER};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
