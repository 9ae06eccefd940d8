//! The preprocessing zkSNARK for USCS instances
//!
//! Instantiates the square-span-program argument of DFGK14, following and
//! optimizing the approach of BCTV14. The proof is four group elements;
//! verification is three pairing-product equations over the public input.
//!
//! Four verifier variants arise from two choices:
//! - a plain verification key, or a preprocessed one ("online" verifier);
//! - "weak" input consistency (the public input may be shorter than the
//!   declared length and is implicitly padded with zeros) or "strong"
//!   input consistency (the lengths must match exactly).

mod generator;
mod keys;
mod proof;
mod prover;
mod verifier;

pub use generator::{generate_keypair, generate_keypair_with_config};
pub use keys::{Keypair, PreparedVerifyingKey, ProvingKey, VerifyingKey};
pub use proof::Proof;
pub use prover::{create_proof, create_proof_with_config};
pub use verifier::{
    online_verify_strong_ic, online_verify_weak_ic, prepare_verifying_key, verify_proof_strong_ic,
    verify_proof_weak_ic,
};

/// Runtime tuning options for the generator and prover.
///
/// `mixed_addition` normalizes key material to special (z = 1) form and
/// routes the prover's V-queries through mixed-addition buckets.
/// `parallelism` is the number of disjoint chunks each multi-scalar
/// multiplication is split into. Neither option affects results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnarkConfig {
    pub mixed_addition: bool,
    pub parallelism: usize,
}

impl Default for SnarkConfig {
    fn default() -> Self {
        Self {
            mixed_addition: false,
            parallelism: 1,
        }
    }
}
