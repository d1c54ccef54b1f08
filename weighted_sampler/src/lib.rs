use std::error::Error;
use std::fmt;

pub mod sampler;
pub mod mt_uniform;

pub use sampler::WeightedSampler;
pub use mt_uniform::MtUniform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Negative,
    NotNormalized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SamplerError {
    LengthMismatch { values: usize, probabilities: usize },
    InvalidProbability(InvalidReason),
}

impl SamplerError {
    // numeric diagnostic code reported alongside the message
    pub fn code(&self) -> i32 {
        match self {
            SamplerError::LengthMismatch { .. } => 1,
            SamplerError::InvalidProbability(InvalidReason::Negative) => 2,
            SamplerError::InvalidProbability(InvalidReason::NotNormalized) => 3,
        }
    }
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerError::LengthMismatch { values, probabilities } => write!(
                f,
                "values and probabilities should have the same length ({} values, {} probabilities)",
                values, probabilities
            ),
            SamplerError::InvalidProbability(InvalidReason::Negative) => {
                write!(f, "probabilities must be non negative")
            }
            SamplerError::InvalidProbability(InvalidReason::NotNormalized) => {
                write!(f, "probabilities should sum to 1")
            }
        }
    }
}

impl Error for SamplerError {}
