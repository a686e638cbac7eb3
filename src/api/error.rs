use std::fmt;

/// Classification of a failed request.
///
/// Anything that cannot be classified is `Generic`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No response was obtained (connection refused, DNS, reset, unreadable stream).
    Network,
    /// The server answered with a non-success status below 500.
    Client,
    /// The server answered with a status of 500 or above.
    Server,
    #[default]
    Generic,
}

impl ErrorKind {
    /// Classifies a non-success HTTP status. The 500 threshold is the only input.
    pub fn from_status(status: u16) -> Self {
        if status >= 500 {
            ErrorKind::Server
        } else {
            ErrorKind::Client
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::Client => "client",
            ErrorKind::Server => "server",
            ErrorKind::Generic => "generic",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A failed handler invocation, ready to be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ActionError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Generic, message)
    }

    /// Builds the error for a non-success status, picking the message by the
    /// same threshold that picks the kind.
    pub fn from_status(status: u16, messages: &StatusMessages) -> Self {
        let kind = ErrorKind::from_status(status);
        let detail = match kind {
            ErrorKind::Server => messages.server,
            _ => messages.client,
        };
        Self::new(kind, format!("Error {status}: {detail}"))
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind, self.message)
    }
}

impl std::error::Error for ActionError {}

/// Per-handler wording for status failures and for failures with no status.
#[derive(Debug, Clone, Copy)]
pub struct StatusMessages {
    pub server: &'static str,
    pub client: &'static str,
    pub transport: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGES: StatusMessages = StatusMessages {
        server: "Server error.",
        client: "Client error.",
        transport: "Unexpected error occurred.",
    };

    #[test]
    fn test_classification_is_threshold_500() {
        for status in [500, 501, 503, 599, 600] {
            assert_eq!(ErrorKind::from_status(status), ErrorKind::Server, "{status}");
        }
        for status in [100, 204, 301, 400, 404, 418, 429, 499] {
            assert_eq!(ErrorKind::from_status(status), ErrorKind::Client, "{status}");
        }
    }

    #[test]
    fn test_from_status_message_follows_kind() {
        let err = ActionError::from_status(404, &MESSAGES);
        assert_eq!(err.kind, ErrorKind::Client);
        assert_eq!(err.message, "Error 404: Client error.");

        let err = ActionError::from_status(503, &MESSAGES);
        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.message, "Error 503: Server error.");
    }

    #[test]
    fn test_default_kind_is_generic() {
        assert_eq!(ErrorKind::default(), ErrorKind::Generic);
    }

    #[test]
    fn test_display_includes_kind() {
        let err = ActionError::network("offline");
        assert_eq!(err.to_string(), "network error: offline");
    }
}
