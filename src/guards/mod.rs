//! The three request guards.
//!
//! | Guard | Allows | Otherwise |
//! |---|---|---|
//! | [`RequireLogin`] | authenticated callers | AJAX: 200 + login headers; else 302 to login |
//! | [`RequireAjax`] | AJAX requests | 400 |
//! | [`RequireAnonymous`] | anonymous callers | 302 to the redirect target |
//!
//! Each guard has a function-style constructor (`login_required`,
//! `ajax_required`, `anonymous_required`) for wrapping handlers directly.

mod ajax_only;
mod anonymous;
mod login;

pub use ajax_only::{ajax_required, RequireAjax};
pub use anonymous::{anonymous_required, anonymous_required_to, RequireAnonymous};
pub use login::{login_required, RequireLogin};
