//! Ports for the application layer

mod diagnostics_port;

pub use diagnostics_port::{DiagnosticsPort, TracingDiagnostics};

#[cfg(test)]
pub use diagnostics_port::MockDiagnosticsPort;
