use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AdapterError;

/// User agent the platform scheduler sends with every scheduled invocation.
pub const SCHEDULER_USER_AGENT: &str = "Netlify Clockwork";

/// Header the platform scheduler sets to `schedule`.
pub const SCHEDULE_EVENT_HEADER: &str = "X-NF-Event";

/// One HTTP-proxy-shaped invocation event, as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_base64_encoded: bool,
}

impl InboundEvent {
    /// Decodes a raw host payload. `null` and non-object payloads are rejected.
    pub fn from_value(payload: serde_json::Value) -> Result<Self, AdapterError> {
        if payload.is_null() {
            return Err(AdapterError::MalformedInput(
                "invocation event is null".to_string(),
            ));
        }
        if !payload.is_object() {
            return Err(AdapterError::MalformedInput(
                "invocation event is not a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(payload)?)
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        if let Some(v) = self.headers.get(name) {
            return Some(v.as_str());
        }
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body text, base64-decoded first when the host flagged it as such.
    pub fn decoded_body(&self) -> Result<String, AdapterError> {
        if !self.is_base64_encoded {
            return Ok(self.body.clone());
        }
        let bytes = STANDARD.decode(self.body.trim())?;
        Ok(String::from_utf8(bytes)?)
    }

    #[must_use]
    pub fn is_schedule_trigger(&self) -> bool {
        let by_event = self
            .header(SCHEDULE_EVENT_HEADER)
            .is_some_and(|v| v.eq_ignore_ascii_case("schedule"));
        let by_agent = self
            .header("user-agent")
            .is_some_and(|v| v == SCHEDULER_USER_AGENT);
        by_event || by_agent
    }
}

/// Body the scheduler posts to a scheduled function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleRequestBody {
    #[serde(rename = "next_run")]
    pub next_run: DateTime<FixedOffset>,
}

impl ScheduleRequestBody {
    pub fn parse(body: &str) -> Result<Self, AdapterError> {
        if body.trim().is_empty() {
            return Err(AdapterError::MalformedInput(
                "schedule body is empty".to_string(),
            ));
        }
        let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
            AdapterError::MalformedInput(format!("invalid schedule body: {}", e))
        })?;
        // Serde also accepts structs written as sequences; the wire format is an object.
        if !value.is_object() {
            return Err(AdapterError::MalformedInput(
                "schedule body is not a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| {
            AdapterError::MalformedInput(format!("invalid schedule body: {}", e))
        })
    }
}

/// Normalized response handed back to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl OutboundResponse {
    #[must_use]
    pub fn text(status_code: u16, body: &str) -> Self {
        Self {
            status_code,
            headers: HashMap::from([("Content-Type".to_string(), "text/plain".to_string())]),
            body: body.to_string(),
            is_base64_encoded: false,
        }
    }

    #[must_use]
    pub fn no_content() -> Self {
        Self {
            status_code: 204,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn error(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            headers: HashMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            body: serde_json::json!({ "error": message }).to_string(),
            is_base64_encoded: false,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
