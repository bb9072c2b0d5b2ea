use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpotlikeError {
    /// A required setting is absent from both the environment and the `.env` file.
    #[error("{0} must be set")]
    MissingConfig(&'static str),

    /// The token endpoint refused to issue an access token. Fatal for the run.
    #[error("cannot refresh access token ({status}): {body}")]
    Auth { status: u16, body: String },

    #[error("spotify api responded with {status}: {body}")]
    Api { status: u16, body: String },

    #[error("{0} is already in the playlist")]
    Duplicate(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl SpotlikeError {
    pub fn is_auth(&self) -> bool {
        matches!(self, SpotlikeError::Auth { .. })
    }

    /// Errors that stop the run before any API call could be made with a token.
    pub fn is_fatal(&self) -> bool {
        self.is_auth() || matches!(self, SpotlikeError::MissingConfig(_))
    }
}
