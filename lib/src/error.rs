use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct DispatcherError {
    pub status_code: u16,
    pub cause: String,
    pub message: Option<String>,
}

impl DispatcherError {
    pub fn new(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            status_code: 500,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn with_status(
        status_code: u16,
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            status_code,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn describe(&self) -> String {
        format!("{} - Cause: {}", self.message.clone().unwrap_or("Unknown failure".to_string()), self.cause)
    }
}

impl std::error::Error for DispatcherError {}

impl fmt::Display for DispatcherError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}
