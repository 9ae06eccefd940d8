//! Proof generation
//!
//! Attests: "there exists y such that cs(x, y) is satisfied". The four
//! accumulators start from the dummy-slot contribution carrying the
//! blinding scalar d, then each adds one multi-scalar multiplication over
//! its query slice.

use ark_ec::pairing::Pairing;
use ark_ec::CurveGroup;
use ark_std::rand::RngCore;
use ark_std::{UniformRand, Zero};
use tracing::debug;

use super::keys::ProvingKey;
use super::proof::Proof;
use super::SnarkConfig;
use crate::errors::Result;
use crate::ssp::witness_map;
use crate::utils::msm::{multiexp, multiexp_mixed};

/// Prove with the default configuration.
pub fn create_proof<E: Pairing, R: RngCore>(
    pk: &ProvingKey<E>,
    primary: &[E::ScalarField],
    auxiliary: &[E::ScalarField],
    rng: &mut R,
) -> Result<Proof<E>> {
    create_proof_with_config(pk, primary, auxiliary, &SnarkConfig::default(), rng)
}

#[tracing::instrument(skip_all, fields(
    constraints = pk.cs.num_constraints(),
    inputs = primary.len(),
))]
pub fn create_proof_with_config<E: Pairing, R: RngCore>(
    pk: &ProvingKey<E>,
    primary: &[E::ScalarField],
    auxiliary: &[E::ScalarField],
    config: &SnarkConfig,
    rng: &mut R,
) -> Result<Proof<E>> {
    let d = E::ScalarField::rand(rng);
    let wit = witness_map(&pk.cs, primary, auxiliary, &d)?;

    let num_variables = wit.num_variables;
    let num_inputs = wit.num_inputs;
    let num_aux_slots = num_variables - num_inputs;

    debug_assert_eq!(pk.v_g1_query.len(), num_aux_slots + 1);
    debug_assert_eq!(pk.alpha_v_g1_query.len(), num_aux_slots + 1);
    debug_assert_eq!(pk.h_g1_query.len(), wit.degree + 1);
    debug_assert_eq!(pk.v_g2_query.len(), num_variables + 2);

    let chunks = config.parallelism.max(1);

    // dummy-slot contributions: each query's last slot encodes Z(t)
    let mut v_g1 = pk.v_g1_query[num_aux_slots] * wit.d;
    let mut alpha_v_g1 = pk.alpha_v_g1_query[num_aux_slots] * wit.d;
    let mut h_g1 = E::G1::zero();
    let mut v_g2 = pk.v_g2_query[0] + pk.v_g2_query[num_variables + 1] * wit.d;

    let aux_coefficients = &wit.coefficients_for_vs[num_inputs + 1..=num_variables];
    if config.mixed_addition {
        v_g1 += multiexp_mixed(&pk.v_g1_query[..num_aux_slots], aux_coefficients, chunks);
        alpha_v_g1 += multiexp_mixed(&pk.alpha_v_g1_query[..num_aux_slots], aux_coefficients, chunks);
    } else {
        v_g1 += multiexp(&pk.v_g1_query[..num_aux_slots], aux_coefficients, chunks);
        alpha_v_g1 += multiexp(&pk.alpha_v_g1_query[..num_aux_slots], aux_coefficients, chunks);
    }
    h_g1 += multiexp(&pk.h_g1_query, &wit.coefficients_for_h, chunks);
    v_g2 += multiexp(
        &pk.v_g2_query[1..=num_variables],
        &wit.coefficients_for_vs[1..=num_variables],
        chunks,
    );

    let proof = Proof {
        v_g1: v_g1.into_affine(),
        alpha_v_g1: alpha_v_g1.into_affine(),
        h_g1: h_g1.into_affine(),
        v_g2: v_g2.into_affine(),
    };
    debug!(proof_bits = proof.size_in_bits(), "proof generated");
    Ok(proof)
}
