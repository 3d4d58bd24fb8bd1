//! Append-only audit collection of raw event-log payloads.

use serde_json::{json, Value};

/// Accumulates every successfully fetched raw event-log payload,
/// unmodified, for the diagnostic dump written at the end of a run.
#[derive(Debug, Default)]
pub struct EventAuditLog {
    responses: Vec<Value>,
}

impl EventAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one raw payload; entries are never transformed or removed.
    pub fn append(&mut self, payload: Value) {
        self.responses.push(payload);
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Dump shape written to disk at the end of a run.
    pub fn to_dump(&self) -> Value {
        json!({ "responses": self.responses })
    }
}
