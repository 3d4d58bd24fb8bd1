//! Per-call event-log resolution into a histogram key.

use calltally_core::{
    extract_between, CODE_LEFT_DELIMITER, CODE_RIGHT_DELIMITER, INVALID_CODE_KEY,
};

use crate::audit::EventAuditLog;
use crate::client::CallLogClient;
use crate::types::{CallRecord, EventLog};

/// Resolves the histogram key contributed by one call.
///
/// `None` when the events fetch or decode fails: that call contributes
/// nothing, not even the invalid sentinel. A successfully decoded event
/// log with no extractable code (an empty `events` array included)
/// resolves to the sentinel, so the call still surfaces in the report as
/// an `Invalid` occurrence.
pub async fn resolve_call_code(
    client: &CallLogClient,
    audit: &mut EventAuditLog,
    call: &CallRecord,
) -> Option<String> {
    let payload = match client.fetch_call_events(&call.sid).await {
        Ok(payload) => payload,
        Err(error) => {
            tracing::warn!(
                call_sid = call.sid.as_str(),
                %error,
                "events fetch failed; call skipped"
            );
            return None;
        }
    };
    // The raw payload is audited even when the typed decode below rejects it.
    audit.append(payload.clone());

    let event_log: EventLog = match serde_json::from_value(payload) {
        Ok(event_log) => event_log,
        Err(error) => {
            tracing::warn!(
                call_sid = call.sid.as_str(),
                %error,
                "event log decode failed; call skipped"
            );
            return None;
        }
    };

    for entry in &event_log.events {
        let Some(body) = entry
            .response
            .as_ref()
            .and_then(|response| response.response_body.as_deref())
        else {
            continue;
        };
        if let Some(code) = extract_between(body, CODE_LEFT_DELIMITER, CODE_RIGHT_DELIMITER) {
            tracing::debug!(call_sid = call.sid.as_str(), code, "extracted event code");
            return Some(code.to_string());
        }
    }

    tracing::debug!(call_sid = call.sid.as_str(), "no extractable code in event log");
    Some(INVALID_CODE_KEY.to_string())
}
