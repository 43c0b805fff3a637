use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Credential source missing, unreadable or incomplete.
    #[error("invalid credentials: {0}")]
    Config(String),

    /// Segmented TXT content without a `label:payload` separator.
    #[error("invalid content format: {0}")]
    Format(String),

    /// Remote call failed; carries the provider detail as received.
    #[error("API request failed: {0}")]
    Api(String),

    /// Arguments that parse but do not form a valid command.
    #[error("{0}")]
    Usage(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
