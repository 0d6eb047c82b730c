//! Framework-agnostic request representation.
//!
//! Hosts whose request type is `http::Request` need nothing from this module:
//! guards accept `http::Request<B>` directly once the host's authentication
//! layer has inserted a [`Principal`](crate::Principal) into its extensions.
//! Other hosts, and tests simulating requests, build a [`RequestAdapter`].
//!
//! # Integration Flow
//!
//! ```text
//! HTTP Request
//!   ↓
//! Host authenticates, builds RequestAdapter (principal, headers, path)
//!   ↓
//! Guarded handler: guard.check() once
//!   ↓
//! Allowed → inner handler response  |  Blocked → guard response
//! ```

mod adapter;

pub use adapter::RequestAdapter;
