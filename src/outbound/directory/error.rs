use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("directory request failed")]
    Transport(#[from] reqwest::Error),

    #[error("directory answered {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },

    #[error("directory response could not be decoded")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl Error {
    /// The message the directory itself gave, if any.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
