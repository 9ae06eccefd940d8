//! Error types for the sqspan SNARK

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnarkError {
    #[error("malformed constraint system: {0}")]
    InvalidShape(String),

    #[error("assignment does not satisfy the constraint system")]
    UnsatisfiedWitness,
}

pub type Result<T> = std::result::Result<T, SnarkError>;
