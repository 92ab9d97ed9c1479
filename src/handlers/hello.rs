use crate::adapter::FunctionHandler;
use crate::adapter::diagnostics::{Diagnostic, DiagnosticSink};
use crate::core::models::{InboundEvent, OutboundResponse};
use crate::errors::AdapterError;

pub const GREETING: &str = "Hello, world!";

/// Static-response template: ignores the event and greets.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloWorld;

impl FunctionHandler for HelloWorld {
    fn name(&self) -> &'static str {
        "hello-world"
    }

    fn handle(
        &self,
        _event: &InboundEvent,
        sink: &dyn DiagnosticSink,
    ) -> Result<OutboundResponse, AdapterError> {
        sink.emit(Diagnostic {
            handler: self.name(),
            message: "This message will be logged".to_string(),
        });
        Ok(OutboundResponse::text(200, GREETING))
    }
}
