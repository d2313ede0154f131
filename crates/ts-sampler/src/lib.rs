//! `ts-sampler` - The token selection pipeline behind the sampling simulator.
//!
//! Each stage is a pure function over a small, fixed vocabulary:
//! - `ScoreScaler` divides raw scores by a temperature
//! - `DistributionBuilder` turns scaled scores into probabilities (softmax)
//! - `NucleusFilter` splits the distribution at a cumulative top-p frontier
//! - `CandidateSampler` draws one candidate using a caller-supplied RNG

pub mod error;
pub mod select;
pub mod softmax;
pub mod temperature;
pub mod token;
pub mod top_p;

// Re-export primary types at the crate root for convenience.
pub use error::{Result, SamplerError};
pub use select::CandidateSampler;
pub use softmax::DistributionBuilder;
pub use temperature::{ScoreScaler, MIN_TEMPERATURE};
pub use token::{Distribution, Partition, ScoredToken};
pub use top_p::NucleusFilter;
