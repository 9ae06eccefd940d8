//! Key generation
//!
//! Samples the trapdoor (t, α, τ), evaluates the SSP at t, and encodes
//! the evaluation tables as fixed-base exponentiations of the two group
//! generators. The trapdoor scalars never leave this function; only
//! their group-element encodings survive in the keys.

use ark_ec::pairing::Pairing;
use ark_ec::scalar_mul::fixed_base::FixedBase;
use ark_ec::{CurveGroup, Group};
use ark_ff::PrimeField;
use ark_std::rand::RngCore;
use ark_std::{UniformRand, Zero};
use tracing::debug;

use super::keys::{Keypair, ProvingKey, VerifyingKey};
use super::SnarkConfig;
use crate::accumulation::AccumulationVector;
use crate::errors::{Result, SnarkError};
use crate::ssp::instance_map_with_evaluation;
use crate::uscs::UscsConstraintSystem;

/// Produce a keypair for `cs` with the default configuration.
pub fn generate_keypair<E: Pairing, R: RngCore>(
    cs: &UscsConstraintSystem<E::ScalarField>,
    rng: &mut R,
) -> Result<Keypair<E>> {
    generate_keypair_with_config(cs, &SnarkConfig::default(), rng)
}

#[tracing::instrument(skip_all, fields(
    constraints = cs.num_constraints(),
    variables = cs.num_variables(),
    inputs = cs.num_inputs,
))]
pub fn generate_keypair_with_config<E: Pairing, R: RngCore>(
    cs: &UscsConstraintSystem<E::ScalarField>,
    config: &SnarkConfig,
    rng: &mut R,
) -> Result<Keypair<E>> {
    // the point at which the SSP is evaluated
    let t = E::ScalarField::rand(rng);
    let inst = instance_map_with_evaluation(cs, &t)?;

    // [V₀(t) … V_nv(t), Z(t)]: the trailing slot is the ZK dummy
    let vt_table = inst.vt;
    let ht_table = inst.ht;
    debug_assert_eq!(vt_table.len(), inst.num_variables + 2);
    debug_assert_eq!(ht_table.len(), inst.degree + 1);

    // constant slot + public inputs on one side, auxiliaries + dummy on
    // the other
    let (xt_table, vt_minus_xt) = vt_table.split_at(inst.num_inputs + 1);
    for (i, xt) in xt_table.iter().enumerate() {
        if xt.is_zero() {
            return Err(SnarkError::InvalidShape(format!(
                "input polynomial {i} vanishes at the evaluation point"
            )));
        }
    }

    let alpha = E::ScalarField::rand(rng);
    let tilde = E::ScalarField::rand(rng);

    let scalar_bits = E::ScalarField::MODULUS_BIT_SIZE as usize;
    let g1_exp_count = vt_table.len() + vt_minus_xt.len() + ht_table.len();
    let g2_exp_count = vt_minus_xt.len();

    let g1_window = FixedBase::get_mul_window_size(g1_exp_count);
    let g2_window = FixedBase::get_mul_window_size(g2_exp_count);

    let g1_generator = E::G1::generator();
    let g2_generator = E::G2::generator();
    let g1_table = FixedBase::get_window_table(scalar_bits, g1_window, g1_generator);
    let g2_table = FixedBase::get_window_table(scalar_bits, g2_window, g2_generator);

    let mut v_g1_query = FixedBase::msm::<E::G1>(scalar_bits, g1_window, &g1_table, vt_minus_xt);

    let alpha_vt_minus_xt: Vec<E::ScalarField> =
        vt_minus_xt.iter().map(|v| alpha * v).collect();
    let mut alpha_v_g1_query =
        FixedBase::msm::<E::G1>(scalar_bits, g1_window, &g1_table, &alpha_vt_minus_xt);

    let mut h_g1_query = FixedBase::msm::<E::G1>(scalar_bits, g1_window, &g1_table, &ht_table);
    let mut v_g2_query = FixedBase::msm::<E::G2>(scalar_bits, g2_window, &g2_table, &vt_table);

    if config.mixed_addition {
        batch_to_special(&mut v_g1_query);
        batch_to_special(&mut alpha_v_g1_query);
        batch_to_special(&mut h_g1_query);
        batch_to_special(&mut v_g2_query);
    }

    let encoded_ic_base = (g1_generator * xt_table[0]).into_affine();
    let encoded_ic_values = E::G1::normalize_batch(&FixedBase::msm::<E::G1>(
        scalar_bits,
        g1_window,
        &g1_table,
        &xt_table[1..],
    ));

    let vk = VerifyingKey {
        tilde_g2: (g2_generator * tilde).into_affine(),
        alpha_tilde_g2: (g2_generator * (alpha * tilde)).into_affine(),
        z_g2: (g2_generator * inst.zt).into_affine(),
        encoded_ic_query: AccumulationVector::new(encoded_ic_base, encoded_ic_values),
    };

    let pk = ProvingKey {
        v_g1_query,
        alpha_v_g1_query,
        h_g1_query,
        v_g2_query,
        cs: cs.clone(),
    };

    debug!(
        pk_g1 = pk.g1_size(),
        pk_g2 = pk.g2_size(),
        pk_bits = pk.size_in_bits(),
        vk_bits = vk.size_in_bits(),
        "keypair generated"
    );

    Ok(Keypair { pk, vk })
}

/// Normalize a query vector to special (z = 1) form in place.
fn batch_to_special<G: CurveGroup>(query: &mut Vec<G>) {
    *query = G::normalize_batch(query)
        .into_iter()
        .map(Into::into)
        .collect();
}
