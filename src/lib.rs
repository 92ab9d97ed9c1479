/// fn-adapter - serverless function templates behind a small invocation adapter.
///
/// The crate turns an HTTP-proxy-shaped invocation event into a typed request,
/// runs one of the bundled function templates against it, and hands back a
/// normalized response. Two templates ship with it:
/// 1. `hello-world`, which always answers `200 Hello, world!`
/// 2. `scheduled`, which reads the scheduler's `next_run` body and answers `204`
///
/// # Architecture
///
/// - AWS Lambda (`lambda_runtime`) hosts one binary per template
/// - `InvocationAdapter` converts handler errors into error-status responses
///   instead of aborting the process
/// - Diagnostics go through a `DiagnosticSink`, `tracing` in production
///
/// # Example
///
/// ```
/// use fn_adapter::adapter::InvocationAdapter;
/// use fn_adapter::core::models::InboundEvent;
/// use fn_adapter::handlers::HelloWorld;
///
/// let adapter = InvocationAdapter::new(HelloWorld);
/// let response = adapter.invoke(&InboundEvent::default());
/// assert_eq!(response.status_code, 200);
/// assert_eq!(response.body, "Hello, world!");
/// ```
// Module declarations
pub mod adapter;
pub mod core;
pub mod errors;
pub mod handlers;

pub use errors::AdapterError;

use crate::core::config::LogFormat;

/// Configure structured logging for AWS Lambda environments.
///
/// `LogFormat::Json` emits one JSON object per event for `CloudWatch` Logs;
/// `LogFormat::Pretty` is meant for local runs. Calling this more than once
/// keeps the first subscriber.
///
/// # Example
///
/// ```
/// fn_adapter::setup_logging(fn_adapter::core::config::LogFormat::Json);
/// ```
pub fn setup_logging(format: LogFormat) {
    use tracing_subscriber::prelude::*;

    let registry = tracing_subscriber::registry();
    let _ = match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };
}
