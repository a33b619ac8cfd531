//! Task-local trace id for the request being served.
//!
//! `RequestTrace` scopes every request future with its trace id so error
//! responses and logs can echo it without threading it through handlers.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, if running inside one.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(|id| id.clone()).ok()
}

/// Trace id of the current request, or `"unknown"` outside a request.
pub fn trace_id() -> String {
    current().unwrap_or_else(|| "unknown".to_string())
}

/// Run `future` with `trace_id` as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

/// Run the synchronous part of request dispatch with `trace_id` in scope.
pub fn sync_with_trace_id<F, R>(trace_id: String, f: F) -> R
where
    F: FnOnce() -> R,
{
    TRACE_ID.sync_scope(trace_id, f)
}
