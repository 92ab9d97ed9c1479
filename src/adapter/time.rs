//! Rendering of scheduler timestamps for operator-facing log lines.

use chrono::{DateTime, FixedOffset, Local};
use chrono_tz::Tz;

const RENDER_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";

/// Zone a `next_run` timestamp is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// Whatever the evaluating process considers local time.
    #[default]
    Local,
    Named(Tz),
}

impl DisplayZone {
    pub fn named(name: &str) -> Result<Self, String> {
        name.parse::<Tz>()
            .map(DisplayZone::Named)
            .map_err(|e| format!("unknown timezone `{}`: {}", name, e))
    }

    /// Converts `instant` into this zone, always with a numeric UTC offset.
    #[must_use]
    pub fn render(&self, instant: &DateTime<FixedOffset>) -> String {
        match self {
            DisplayZone::Local => instant
                .with_timezone(&Local)
                .format(RENDER_FORMAT)
                .to_string(),
            DisplayZone::Named(tz) => instant
                .with_timezone(tz)
                .format(RENDER_FORMAT)
                .to_string(),
        }
    }
}
