use shared::error::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("campaign service returned {status} ({code:?}): {message}")]
    Remote {
        code: ErrorCode,
        status: u16,
        message: String,
    },
    #[error("campaign service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid campaign service url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationRequired
                | Self::Remote {
                    code: ErrorCode::Unauthorized | ErrorCode::Forbidden,
                    ..
                }
        )
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
