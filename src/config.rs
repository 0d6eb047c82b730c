//! Guard configuration.
//!
//! [`GuardSettings`] is the serializable form that host applications embed in
//! their own configuration files. [`GuardConfig`] is the validated form the
//! guards consume: URLs are already converted to header values and the AJAX
//! detector is ready to share between threads.

use std::fmt;
use std::sync::Arc;

use http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::ajax::{AjaxDetector, RequestedWith, X_REQUESTED_WITH, XML_HTTP_REQUEST};
use crate::error::Error;

/// Login URL used when none is configured.
pub const DEFAULT_LOGIN_URL: &str = "/accounts/login/";

/// Redirect target for authenticated callers of anonymous-only endpoints.
pub const DEFAULT_ANONYMOUS_REDIRECT: &str = "/";

/// Serializable guard settings.
///
/// Every field has a default, so an empty table deserializes to a usable
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GuardSettings {
    /// Where unauthenticated callers are sent to log in.
    pub login_url: String,

    /// Where authenticated callers of anonymous-only endpoints are sent.
    pub anonymous_redirect: String,

    /// Query parameter carrying the original path on login redirects.
    ///
    /// `None` redirects to the bare login URL.
    pub redirect_field_name: Option<String>,

    /// Header marking AJAX requests.
    pub ajax_header: String,

    /// Value of `ajax_header` that marks an AJAX request.
    pub ajax_header_value: String,
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_string(),
            anonymous_redirect: DEFAULT_ANONYMOUS_REDIRECT.to_string(),
            redirect_field_name: None,
            ajax_header: X_REQUESTED_WITH.as_str().to_string(),
            ajax_header_value: XML_HTTP_REQUEST.to_string(),
        }
    }
}

/// Validated, read-only configuration shared by guards.
///
/// Cloning is cheap; the AJAX detector is reference counted.
///
/// # Examples
///
/// ```
/// use request_guard::GuardConfig;
///
/// let config = GuardConfig::new("/login/")
///     .unwrap()
///     .with_redirect_field_name("next");
///
/// assert_eq!(config.login_url(), "/login/");
/// assert_eq!(config.anonymous_redirect(), "/");
/// assert_eq!(config.redirect_field_name(), Some("next"));
/// ```
#[derive(Clone)]
pub struct GuardConfig {
    login_url: HeaderValue,
    anonymous_redirect: HeaderValue,
    redirect_field_name: Option<String>,
    ajax: Arc<dyn AjaxDetector>,
}

impl GuardConfig {
    /// Creates a configuration with the given login URL and defaults for
    /// everything else.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLoginUrl`] if `login_url` cannot be sent in a
    /// header.
    pub fn new(login_url: &str) -> Result<Self, Error> {
        Ok(Self {
            login_url: parse_login_url(login_url)?,
            anonymous_redirect: HeaderValue::from_static(DEFAULT_ANONYMOUS_REDIRECT),
            redirect_field_name: None,
            ajax: Arc::new(RequestedWith::default()),
        })
    }

    /// Validates serialized settings.
    ///
    /// # Errors
    ///
    /// Returns the first setting that cannot be represented in an HTTP header.
    pub fn from_settings(settings: &GuardSettings) -> Result<Self, Error> {
        let detector = RequestedWith::new(&settings.ajax_header, &settings.ajax_header_value)?;
        let config = Self::new(&settings.login_url)?
            .with_anonymous_redirect(&settings.anonymous_redirect)?
            .with_ajax_detector(detector);

        Ok(match &settings.redirect_field_name {
            Some(field) => config.with_redirect_field_name(field.clone()),
            None => config,
        })
    }

    /// Overrides the default redirect target for anonymous-only guards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRedirectTarget`] if `target` cannot be sent in
    /// a header.
    pub fn with_anonymous_redirect(mut self, target: &str) -> Result<Self, Error> {
        self.anonymous_redirect = parse_redirect_target(target)?;
        Ok(self)
    }

    /// Appends the requested path to login redirects under `field`.
    pub fn with_redirect_field_name(mut self, field: impl Into<String>) -> Self {
        self.redirect_field_name = Some(field.into());
        self
    }

    /// Replaces the AJAX detector.
    pub fn with_ajax_detector(mut self, detector: impl AjaxDetector + 'static) -> Self {
        self.ajax = Arc::new(detector);
        self
    }

    /// Returns the login URL.
    pub fn login_url(&self) -> &str {
        header_str(&self.login_url)
    }

    /// Returns the default anonymous-only redirect target.
    pub fn anonymous_redirect(&self) -> &str {
        header_str(&self.anonymous_redirect)
    }

    /// Returns the name of the query parameter carrying the original path.
    pub fn redirect_field_name(&self) -> Option<&str> {
        self.redirect_field_name.as_deref()
    }

    pub(crate) fn login_url_value(&self) -> &HeaderValue {
        &self.login_url
    }

    pub(crate) fn anonymous_redirect_value(&self) -> &HeaderValue {
        &self.anonymous_redirect
    }

    pub(crate) fn ajax_detector(&self) -> &Arc<dyn AjaxDetector> {
        &self.ajax
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_url: HeaderValue::from_static(DEFAULT_LOGIN_URL),
            anonymous_redirect: HeaderValue::from_static(DEFAULT_ANONYMOUS_REDIRECT),
            redirect_field_name: None,
            ajax: Arc::new(RequestedWith::default()),
        }
    }
}

impl fmt::Debug for GuardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardConfig")
            .field("login_url", &self.login_url)
            .field("anonymous_redirect", &self.anonymous_redirect)
            .field("redirect_field_name", &self.redirect_field_name)
            .finish_non_exhaustive()
    }
}

fn parse_login_url(url: &str) -> Result<HeaderValue, Error> {
    visible_ascii(url).ok_or_else(|| Error::InvalidLoginUrl(url.to_string()))
}

pub(crate) fn parse_redirect_target(target: &str) -> Result<HeaderValue, Error> {
    visible_ascii(target).ok_or_else(|| Error::InvalidRedirectTarget(target.to_string()))
}

// URLs must arrive percent-encoded; raw UTF-8 is accepted by `HeaderValue`
// but cannot be read back as `&str`.
fn visible_ascii(s: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(s).ok().filter(|v| v.to_str().is_ok())
}

fn header_str(value: &HeaderValue) -> &str {
    value.to_str().unwrap_or_default()
}
