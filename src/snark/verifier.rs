//! Proof verification
//!
//! Three pairing-product equations, each a product of Miller loops under
//! one final exponentiation:
//!   V:   e(V₁ + acc, G₂)  = e(G₁, V₂)        (both sides open P(t))
//!   SSP: e(V₁ + acc, V₂)  = e(H, Z)·e(G₁, G₂) (P² − 1 = H·Z)
//!   α:   e(V₁, ατ·G₂)     = e(αV₁, τ·G₂)      (knowledge of exponent)
//!
//! Every equation is evaluated even after an earlier one has failed, so
//! the running time does not depend on which check rejected.

use ark_ec::pairing::{MillerLoopOutput, Pairing};
use ark_ec::AffineRepr;
use ark_ff::{CyclotomicMultSubgroup, One};
use ark_std::Zero;

use super::keys::{PreparedVerifyingKey, VerifyingKey};
use super::proof::Proof;

/// Precompute the pairing inputs of a verification key.
pub fn prepare_verifying_key<E: Pairing>(vk: &VerifyingKey<E>) -> PreparedVerifyingKey<E> {
    let g1_one = E::G1Affine::generator();
    let g2_one = E::G2Affine::generator();

    PreparedVerifyingKey {
        g1_one_precomp: E::G1Prepared::from(g1_one),
        g2_one_precomp: E::G2Prepared::from(g2_one),
        tilde_g2_precomp: E::G2Prepared::from(vk.tilde_g2),
        alpha_tilde_g2_precomp: E::G2Prepared::from(vk.alpha_tilde_g2),
        z_g2_precomp: E::G2Prepared::from(vk.z_g2),
        pairing_of_g1_and_g2: E::pairing(g1_one, g2_one),
        encoded_ic_query: vk.encoded_ic_query.clone(),
    }
}

/// Weak input consistency against a preprocessed key: a public input
/// shorter than the declared length is implicitly padded with zeros.
#[tracing::instrument(skip_all, fields(inputs = primary.len()))]
pub fn online_verify_weak_ic<E: Pairing>(
    pvk: &PreparedVerifyingKey<E>,
    primary: &[E::ScalarField],
    proof: &Proof<E>,
) -> bool {
    let domain = pvk.encoded_ic_query.domain_size();
    if primary.len() > domain {
        return false;
    }

    let mut padded = primary.to_vec();
    padded.resize(domain, E::ScalarField::zero());
    let accumulated = pvk.encoded_ic_query.accumulate_chunk(&padded, 0);
    debug_assert!(accumulated.is_fully_accumulated());
    let acc = accumulated.first;

    let mut result = true;

    if !proof.is_well_formed() {
        result = false;
    }

    let v_g1_with_acc = E::G1Prepared::from(proof.v_g1 + acc);
    let v_g2 = E::G2Prepared::from(proof.v_g2);

    // V: e(V₁ + acc, G₂) · e(G₁, V₂)⁻¹ = 1
    let lhs = E::miller_loop(v_g1_with_acc.clone(), pvk.g2_one_precomp.clone());
    let rhs = E::miller_loop(pvk.g1_one_precomp.clone(), v_g2.clone());
    if !final_exp_is_one::<E>(lhs.0 * unitary_inverse::<E>(rhs.0)) {
        result = false;
    }

    // SSP: e(V₁ + acc, V₂)⁻¹ · e(H, Z) · e(G₁, G₂) = 1
    let h_g1 = E::G1Prepared::from(proof.h_g1);
    let p_squared = E::miller_loop(v_g1_with_acc, v_g2);
    let h_z = E::miller_loop(h_g1, pvk.z_g2_precomp.clone());
    let ssp_holds = match E::final_exponentiation(MillerLoopOutput(
        unitary_inverse::<E>(p_squared.0) * h_z.0,
    )) {
        Some(value) => (value + pvk.pairing_of_g1_and_g2).is_zero(),
        None => false,
    };
    if !ssp_holds {
        result = false;
    }

    // α: e(V₁, ατ·G₂) · e(αV₁, τ·G₂)⁻¹ = 1
    let v_g1 = E::G1Prepared::from(proof.v_g1);
    let alpha_v_g1 = E::G1Prepared::from(proof.alpha_v_g1);
    let lhs = E::miller_loop(v_g1, pvk.alpha_tilde_g2_precomp.clone());
    let rhs = E::miller_loop(alpha_v_g1, pvk.tilde_g2_precomp.clone());
    if !final_exp_is_one::<E>(lhs.0 * unitary_inverse::<E>(rhs.0)) {
        result = false;
    }

    result
}

/// Strong input consistency against a preprocessed key: the public input
/// length must match the declared length exactly.
#[tracing::instrument(skip_all, fields(inputs = primary.len()))]
pub fn online_verify_strong_ic<E: Pairing>(
    pvk: &PreparedVerifyingKey<E>,
    primary: &[E::ScalarField],
    proof: &Proof<E>,
) -> bool {
    pvk.encoded_ic_query.domain_size() == primary.len()
        && online_verify_weak_ic(pvk, primary, proof)
}

/// Weak input consistency against a plain verification key.
pub fn verify_proof_weak_ic<E: Pairing>(
    vk: &VerifyingKey<E>,
    primary: &[E::ScalarField],
    proof: &Proof<E>,
) -> bool {
    online_verify_weak_ic(&prepare_verifying_key(vk), primary, proof)
}

/// Strong input consistency against a plain verification key.
pub fn verify_proof_strong_ic<E: Pairing>(
    vk: &VerifyingKey<E>,
    primary: &[E::ScalarField],
    proof: &Proof<E>,
) -> bool {
    online_verify_strong_ic(&prepare_verifying_key(vk), primary, proof)
}

/// Conjugation in the degree-12 extension. A valid inverse only inside
/// the cyclotomic subgroup; applied to Miller-loop outputs the final
/// exponentiation collapses the non-cyclotomic part.
fn unitary_inverse<E: Pairing>(f: E::TargetField) -> E::TargetField {
    f.cyclotomic_inverse().unwrap_or(f)
}

fn final_exp_is_one<E: Pairing>(f: E::TargetField) -> bool {
    match E::final_exponentiation(MillerLoopOutput(f)) {
        Some(value) => value.0.is_one(),
        None => false,
    }
}
