use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AdapterError {
    /// HTTP status the adapter reports when this error ends an invocation.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            AdapterError::MalformedInput(_) => 400,
            AdapterError::Config(_) => 500,
        }
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(error: serde_json::Error) -> Self {
        AdapterError::MalformedInput(error.to_string())
    }
}

impl From<base64::DecodeError> for AdapterError {
    fn from(error: base64::DecodeError) -> Self {
        AdapterError::MalformedInput(format!("body is not valid base64: {}", error))
    }
}

impl From<std::string::FromUtf8Error> for AdapterError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        AdapterError::MalformedInput(format!("body is not valid UTF-8: {}", error))
    }
}
