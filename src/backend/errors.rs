use thiserror::Error;

/// Failure reported by a remote lead or contact service call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;

impl RemoteError {
    /// Message body suitable for showing to the user, without the error kind prefix.
    pub fn body_message(&self) -> &str {
        match self {
            RemoteError::Transport(message)
            | RemoteError::Server { message, .. }
            | RemoteError::Unexpected(message) => message,
        }
    }
}

impl From<csv::Error> for RemoteError {
    fn from(err: csv::Error) -> Self {
        RemoteError::Unexpected(format!("Failed to read leads: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_message_strips_kind() {
        let err = RemoteError::Server {
            status: 500,
            message: "Apex CPU time limit exceeded".into(),
        };

        assert_eq!(err.body_message(), "Apex CPU time limit exceeded");
        assert_eq!(
            err.to_string(),
            "Server error (500): Apex CPU time limit exceeded"
        );
    }
}
