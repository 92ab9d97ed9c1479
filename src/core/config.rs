use std::env;

use crate::adapter::time::DisplayZone;
use crate::errors::AdapterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub display_zone: DisplayZone,
    pub log_format: LogFormat,
    pub function_name: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AdapterError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AdapterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let display_zone = match lookup("SCHEDULE_DISPLAY_TZ").filter(|v| !v.trim().is_empty()) {
            Some(name) => DisplayZone::named(name.trim())
                .map_err(|e| AdapterError::Config(format!("SCHEDULE_DISPLAY_TZ: {}", e)))?,
            None => DisplayZone::Local,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("" | "json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(AdapterError::Config(format!(
                    "LOG_FORMAT: expected `json` or `pretty`, got `{}`",
                    other
                )));
            }
        };

        Ok(Self {
            display_zone,
            log_format,
            function_name: lookup("AWS_LAMBDA_FUNCTION_NAME"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.display_zone, DisplayZone::Local);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.function_name.is_none());
    }

    #[test]
    fn reads_named_zone_and_pretty_logs() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SCHEDULE_DISPLAY_TZ", "Europe/Berlin"),
            ("LOG_FORMAT", "pretty"),
            ("AWS_LAMBDA_FUNCTION_NAME", "scheduled"),
        ]))
        .unwrap();
        assert_eq!(config.display_zone, DisplayZone::Named(chrono_tz::Europe::Berlin));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.function_name.as_deref(), Some("scheduled"));
    }

    #[test]
    fn rejects_unknown_zone_and_format() {
        let bad_zone = AppConfig::from_lookup(lookup_from(&[("SCHEDULE_DISPLAY_TZ", "Mars/Base")]));
        assert!(matches!(bad_zone, Err(AdapterError::Config(_))));

        let bad_format = AppConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")]));
        assert!(matches!(bad_format, Err(AdapterError::Config(_))));
    }
}
