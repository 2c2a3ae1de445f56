use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenomeError {
    #[error("invalid generation {0}: generations are numbered from 1")]
    InvalidGeneration(u32),
}

pub type Result<T> = std::result::Result<T, GenomeError>;
