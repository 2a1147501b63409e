use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Task content cannot be empty!")]
    EmptyContent,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("voice input is not supported in this environment")]
    SpeechUnavailable,

    #[error("speech recognition error: {0}")]
    Speech(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    pub fn speech(msg: impl Into<String>) -> Self {
        Self::Speech(msg.into())
    }

    // Backend errors look like {"error": "..."}; other bodies are kept as is.
    pub fn rejected(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: String,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.trim().to_string());
        Self::Rejected { status, message }
    }
}
