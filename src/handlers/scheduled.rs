use crate::adapter::FunctionHandler;
use crate::adapter::diagnostics::{Diagnostic, DiagnosticSink};
use crate::adapter::time::DisplayZone;
use crate::core::models::{InboundEvent, OutboundResponse, ScheduleRequestBody};
use crate::errors::AdapterError;

/// Cron-triggered template: logs when the scheduler will fire next.
///
/// `next_run` is only reported, never acted on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduled {
    zone: DisplayZone,
}

impl Scheduled {
    #[must_use]
    pub fn new(zone: DisplayZone) -> Self {
        Self { zone }
    }
}

impl FunctionHandler for Scheduled {
    fn name(&self) -> &'static str {
        "scheduled"
    }

    fn handle(
        &self,
        event: &InboundEvent,
        sink: &dyn DiagnosticSink,
    ) -> Result<OutboundResponse, AdapterError> {
        let body = event.decoded_body()?;
        let schedule = ScheduleRequestBody::parse(&body)?;

        sink.emit(Diagnostic {
            handler: self.name(),
            message: format!("Next invocation at: {}", self.zone.render(&schedule.next_run)),
        });

        Ok(OutboundResponse::no_content())
    }
}
