//! Lambda entry point shared by the function binaries.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use super::diagnostics::DiagnosticSink;
use super::{FunctionHandler, InvocationAdapter};
use crate::core::models::OutboundResponse;

/// Lambda handler for any adapter-hosted function.
///
/// Bad input still yields `Ok` with an error-status response; the runtime
/// only sees `Err` if something outside the adapter breaks.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<H, S>(
    adapter: &InvocationAdapter<H, S>,
    event: LambdaEvent<Value>,
) -> Result<OutboundResponse, Error>
where
    H: FunctionHandler,
    S: DiagnosticSink,
{
    let response = adapter.invoke_value(event.payload);
    info!(status_code = response.status_code, "Function returned");
    Ok(response)
}
