//! Pagination walk over the call-log API.

use crate::client::{ApiError, CallLogClient};
use crate::context::RunContext;
use crate::resolver::resolve_call_code;
use crate::types::CallRecord;

/// Outcome counters for one walk, feeding the final status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub pages_fetched: usize,
    pub calls_counted: usize,
    pub calls_skipped: usize,
    pub stopped_early: bool,
}

/// Walks call-log pages starting at `first_page_uri` until the API stops
/// returning a next-page cursor, feeding `context`.
///
/// A page-level fetch or decode failure aborts the whole walk with the
/// error; whatever already accumulated in `context` stays usable. A
/// per-call failure only skips that call. The stop flag is consulted
/// once per record, and triggering it ends the walk without fetching
/// further pages.
pub async fn walk_call_pages(
    client: &CallLogClient,
    context: &mut RunContext,
    first_page_uri: &str,
) -> Result<WalkSummary, ApiError> {
    let mut summary = WalkSummary::default();
    let mut page_uri = first_page_uri.to_string();

    loop {
        let page = client.fetch_page(&page_uri).await?;
        summary.pages_fetched += 1;
        let next_cursor = page.next_cursor().map(ToOwned::to_owned);

        for raw_call in page.calls {
            if context.stop.is_stopped() {
                summary.stopped_early = true;
                tracing::info!(
                    pages = summary.pages_fetched,
                    "walk stopped early by operator"
                );
                return Ok(summary);
            }

            let call: CallRecord = match serde_json::from_value(raw_call) {
                Ok(call) => call,
                Err(error) => {
                    tracing::debug!(%error, "call record missing required fields; skipped");
                    summary.calls_skipped += 1;
                    continue;
                }
            };
            if !call.has_full_start_timestamp() {
                tracing::debug!(
                    call_sid = call.sid.as_str(),
                    start_time = call.start_time.as_str(),
                    "start timestamp too short; call skipped"
                );
                summary.calls_skipped += 1;
                continue;
            }

            let day = call.start_day();
            match resolve_call_code(client, &mut context.audit, &call).await {
                Some(code) => {
                    context.histogram.increment(&code, day);
                    summary.calls_counted += 1;
                }
                None => summary.calls_skipped += 1,
            }
        }

        match next_cursor {
            Some(next) => page_uri = next,
            None => break,
        }
    }

    Ok(summary)
}
