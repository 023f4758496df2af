use thiserror::Error;

/// Failures while acquiring an access token from the OAuth endpoint.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("GigaChat client id and secret are not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Token request rejected: {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Malformed token response: {0}")]
    MalformedResponse(String),
}

/// Failures while requesting a completion.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Access token unavailable: {0}")]
    TokenUnavailable(#[from] AuthError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed: {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AuthError::MalformedResponse(err.to_string())
        } else {
            AuthError::Network(err.to_string())
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::MalformedResponse(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
pub type ProviderResult<T> = Result<T, ProviderError>;
