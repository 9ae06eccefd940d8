//! # Sqspan: zkSNARKs for unitary-square constraint systems
//!
//! A preprocessing zkSNARK in which a satisfying assignment is one where
//! every constraint's linear form squares to 1. Instantiates the square
//! span programs of:
//!
//! "Square Span Programs with Applications to Succinct NIZK Arguments"
//! (Danezis, Fournet, Groth, Kohlweiss, ASIACRYPT 2014), following and
//! optimizing the approach of "Succinct Non-Interactive Zero Knowledge
//! for a von Neumann Architecture" (Ben-Sasson, Chiesa, Tromer, Virza,
//! USENIX Security 2014).
//!
//! ## Structure
//!
//! - `uscs`: Unitary-square constraint systems
//! - `ssp`: USCS→SSP reduction (instance evaluation and witness map)
//! - `snark`: Key generator, prover, and the four verifier variants
//! - `accumulation`: Incremental encoding of the public-input query
//! - `utils`: Multi-scalar multiplication
//!
//! ## Architecture
//!
//! The engine is generic over a pairing (`ark_ec::pairing::Pairing`):
//! ```ignore
//! let keypair = generate_keypair::<Bls12_381, _>(&cs, &mut rng)?;
//! let proof = create_proof(&keypair.pk, &x, &w, &mut rng)?;
//! assert!(verify_proof_strong_ic(&keypair.vk, &x, &proof));
//! ```
//! Proofs are three `G1` elements and one `G2` element; verification is
//! three pairing-product equations plus one multi-scalar multiplication
//! over the public input.

pub mod accumulation;
pub mod errors;
pub mod snark;
pub mod ssp;
pub mod uscs;
pub mod utils;

// Re-exports
pub use errors::{Result, SnarkError};

pub use accumulation::AccumulationVector;
pub use snark::{
    create_proof, create_proof_with_config, generate_keypair, generate_keypair_with_config,
    online_verify_strong_ic, online_verify_weak_ic, prepare_verifying_key, verify_proof_strong_ic,
    verify_proof_weak_ic, Keypair, PreparedVerifyingKey, Proof, ProvingKey, SnarkConfig,
    VerifyingKey,
};
pub use ssp::{instance_map_with_evaluation, witness_map, SspInstanceEvaluation, SspWitness};
pub use uscs::{AuxiliaryInput, PrimaryInput, Term, UscsConstraint, UscsConstraintSystem};

// =============================================================================
// Default-curve type aliases - Public API
// =============================================================================

/// The default production curve.
pub type DefaultPairing = ark_bls12_381::Bls12_381;

/// Keypair over BLS12-381
pub type Bls381Keypair = Keypair<DefaultPairing>;

/// Proving key over BLS12-381
pub type Bls381ProvingKey = ProvingKey<DefaultPairing>;

/// Verification key over BLS12-381
pub type Bls381VerifyingKey = VerifyingKey<DefaultPairing>;

/// Preprocessed verification key over BLS12-381
pub type Bls381PreparedVerifyingKey = PreparedVerifyingKey<DefaultPairing>;

/// Proof over BLS12-381
pub type Bls381Proof = Proof<DefaultPairing>;
