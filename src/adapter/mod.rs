//! Invocation adapter: one host event in, one handler run, one response out.
//!
//! Handler errors never escape an invocation. They are logged and turned
//! into an error-status `OutboundResponse`, so a long-lived worker process
//! keeps serving later events.

pub mod diagnostics;
pub mod handler;
pub mod time;

use serde_json::Value;
use tracing::{error, info};

use crate::core::models::{InboundEvent, OutboundResponse};
use crate::errors::AdapterError;
use diagnostics::{DiagnosticSink, TracingSink};

pub use handler::function_handler;

/// User logic executed once per event.
pub trait FunctionHandler: Send + Sync {
    fn name(&self) -> &'static str;

    fn handle(
        &self,
        event: &InboundEvent,
        sink: &dyn DiagnosticSink,
    ) -> Result<OutboundResponse, AdapterError>;
}

pub struct InvocationAdapter<H, S = TracingSink> {
    handler: H,
    sink: S,
}

impl<H: FunctionHandler> InvocationAdapter<H, TracingSink> {
    pub fn new(handler: H) -> Self {
        Self::with_sink(handler, TracingSink)
    }
}

impl<H: FunctionHandler, S: DiagnosticSink> InvocationAdapter<H, S> {
    pub fn with_sink(handler: H, sink: S) -> Self {
        Self { handler, sink }
    }

    pub fn invoke(&self, event: &InboundEvent) -> OutboundResponse {
        info!(
            handler = self.handler.name(),
            path = %event.path,
            scheduled = event.is_schedule_trigger(),
            "Invoking function"
        );
        match self.handler.handle(event, &self.sink) {
            Ok(response) => response,
            Err(e) => self.error_response(&e),
        }
    }

    /// Same as [`invoke`](Self::invoke) but starts from the raw host payload.
    pub fn invoke_value(&self, payload: Value) -> OutboundResponse {
        match InboundEvent::from_value(payload) {
            Ok(event) => self.invoke(&event),
            Err(e) => self.error_response(&e),
        }
    }

    fn error_response(&self, e: &AdapterError) -> OutboundResponse {
        error!(handler = self.handler.name(), "Invocation failed: {}", e);
        OutboundResponse::error(e.status_code(), &e.to_string())
    }
}
