use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("invalid input: {0}")]
    InvalidVocabulary(String),
    #[error(transparent)]
    Sampler(#[from] ts_sampler::SamplerError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
