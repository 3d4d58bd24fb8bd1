//! Network-facing pipeline for calltally: the call-log API client,
//! per-call event resolution, and the pagination walk that feeds the
//! shared histogram.

mod audit;
mod client;
mod context;
mod resolver;
mod types;
mod walker;


pub use audit::EventAuditLog;
pub use client::{ApiError, CallLogClient, CallLogClientConfig};
pub use context::{RunContext, StopFlag};
pub use resolver::resolve_call_code;
pub use types::{
    CallLogPage, CallRecord, EventEntry, EventLog, EventResponse, FULL_TIMESTAMP_MIN_LEN,
};
pub use walker::{walk_call_pages, WalkSummary};
