// Copyright (c) Microsoft. All rights reserved.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Spec option {index} failed for container {container_id:?}")]
    ApplyOpt {
        index: usize,
        container_id: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Could not load placement settings")]
    LoadSettings(#[source] config::ConfigError),

    #[error("Spec option reported an error")]
    Opt(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps a failure raised by a caller-provided spec option.
    pub fn opt<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Opt(err.into())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::LoadSettings(err)
    }
}
