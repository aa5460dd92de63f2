use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteAuthError {
    #[error("Invalid grant endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Grant request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Grant endpoint returned status {0}")]
    BackendStatus(u16),
}
