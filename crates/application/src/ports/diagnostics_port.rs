//! Diagnostics port - observability sink for engine operation outcomes
//!
//! A synthesis failure is user-visible only as silence; the diagnostics
//! sink is the one place those failures surface, as the originating
//! operation name plus the vendor status code or a message.

#[cfg(test)]
use mockall::automock;
use tracing::warn;

/// Port for reporting engine operation outcomes
#[cfg_attr(test, automock)]
pub trait DiagnosticsPort: Send + Sync {
    /// Report a non-zero vendor status code for an engine operation
    fn report_status(&self, operation: &str, code: i32);

    /// Report a failure described by a message for an operation
    fn report_message(&self, operation: &str, message: &str);
}

/// Diagnostics sink backed by the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsPort for TracingDiagnostics {
    fn report_status(&self, operation: &str, code: i32) {
        warn!(operation, code, "Engine operation returned error status");
    }

    fn report_message(&self, operation: &str, message: &str) {
        warn!(operation, message, "Engine operation failed");
    }
}
