//! SSP (Square Span Program) encoding of USCS instances
//!
//! A witness satisfies the system iff P(X)² − 1 is divisible by the
//! vanishing polynomial Z(X) of the constraint domain (DFGK14 §3).

mod instance;
mod reduction;
mod witness;

pub use instance::SspInstanceEvaluation;
pub use reduction::{instance_map_with_evaluation, witness_map};
pub use witness::SspWitness;
