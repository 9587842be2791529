//! Injected audit sink for dispatched requests
//!
//! The dispatcher reports every inbound method through an `AuditSink` instead
//! of writing to process-wide state, so independent dispatcher instances can
//! coexist without cross-contamination.

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    Success,
    Failure,
}

impl AuditOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

pub trait AuditSink: Send + Sync {
    fn record(&self, method: &str, outcome: AuditOutcome);
}

/// Default sink; emits one structured tracing event per dispatched request.
#[derive(Debug, Default)]
pub struct TracingAudit;

impl AuditSink for TracingAudit {
    fn record(&self, method: &str, outcome: AuditOutcome) {
        info!(
            method = %method,
            outcome = outcome.as_str(),
            "rpc action audited"
        );
    }
}
