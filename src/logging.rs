use crate::error::Violation;

/// Placeholder request id for requests that carry none.
const NO_REQUEST_ID: &str = "-";

/// Structured log events for a single guard decision.
///
/// Every event carries the guard name and request id, so a blocked request
/// can be traced back to the policy that stopped it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GuardLog<'a> {
    guard: &'static str,
    request_id: &'a str,
}

impl<'a> GuardLog<'a> {
    pub(crate) fn new(guard: &'static str, request_id: Option<&'a str>) -> Self {
        Self {
            guard,
            request_id: request_id.unwrap_or(NO_REQUEST_ID),
        }
    }

    /// The wrapped handler is about to run.
    pub(crate) fn allowed(&self) {
        tracing::debug!(
            guard = self.guard,
            request_id = %self.request_id,
            "request allowed"
        );
    }

    /// The guard answered the request itself.
    pub(crate) fn blocked(&self, violation: &Violation) {
        tracing::info!(
            guard = self.guard,
            request_id = %self.request_id,
            kind = %violation.kind,
            "request blocked: {}",
            violation.message
        );
    }
}
