//! Remote API error taxonomy shared by the server proxy and the browser client.

/// Failure of one remote API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The remote rejected the credential (401 or 403).
    #[error("unauthorized: status {status}")]
    Unauthorized { status: u16 },

    /// Any other non-success status. `message` is the remote's `error` field.
    #[error("request failed: status {status}")]
    Status { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response by status and body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        if matches!(status, 401 | 403) {
            return Self::Unauthorized { status };
        }
        Self::Status { status, message: remote_message(body) }
    }

    /// `true` only for an explicit authorization-denied signal.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status } | Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Inline UI text: the remote's own message when it sent one, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

fn remote_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .or_else(|| value.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
