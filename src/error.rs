#[derive(Debug, thiserror::Error)]
pub enum SmokeError {
    #[error("broker unreachable at {0}")]
    Unreachable(String),

    #[error("AMQP error: {0}")]
    Amqp(#[from] lapin::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("invalid management URL {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("queue not found or API unreachable (HTTP {0})")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}

pub type SmokeResult<T> = Result<T, SmokeError>;
