//! USCS → SSP reduction
//!
//! The constraint rows are indexed by a radix-2 subgroup H of the scalar
//! field. Vᵢ(X) interpolates the i-th coefficient across constraints,
//! rows past the last constraint are padded with the dummy 1² = 1, and
//! Z(X) = X^|H| − 1 vanishes on H. Both maps follow the coset-evaluation
//! strategy of BCTV14.

use ark_ff::PrimeField;
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};

use super::{SspInstanceEvaluation, SspWitness};
use crate::errors::{Result, SnarkError};
use crate::uscs::UscsConstraintSystem;

/// Smallest radix-2 domain with room for every constraint row plus at
/// least one padding row.
fn constraint_domain<F: PrimeField>(
    cs: &UscsConstraintSystem<F>,
) -> Result<Radix2EvaluationDomain<F>> {
    if !cs.is_valid() {
        return Err(SnarkError::InvalidShape(
            "constraint system is empty or misshapen".into(),
        ));
    }
    Radix2EvaluationDomain::new(cs.num_constraints() + 1).ok_or_else(|| {
        SnarkError::InvalidShape(format!(
            "no radix-2 subgroup of size >= {} in the scalar field",
            cs.num_constraints() + 1
        ))
    })
}

/// Evaluate the SSP instance at the point `t`.
///
/// Runs one IFFT-equivalent pass (Lagrange coefficients at t) over the
/// domain, so O(|H| log |H|) field operations.
pub fn instance_map_with_evaluation<F: PrimeField>(
    cs: &UscsConstraintSystem<F>,
    t: &F,
) -> Result<SspInstanceEvaluation<F>> {
    let domain = constraint_domain(cs)?;
    let m = domain.size();

    let u = domain.evaluate_all_lagrange_coefficients(*t);
    let zt = domain.evaluate_vanishing_polynomial(*t);

    let mut vt = vec![F::zero(); cs.num_variables() + 2];
    for (k, constraint) in cs.constraints.iter().enumerate() {
        for term in &constraint.terms {
            vt[term.index] += u[k] * term.coeff;
        }
    }
    // rows past the constraints hold the dummy 1^2 = 1
    for lagrange in u.iter().take(m).skip(cs.num_constraints()) {
        vt[0] += lagrange;
    }
    vt[cs.num_variables() + 1] = zt;

    let mut ht = Vec::with_capacity(m + 1);
    let mut power = F::one();
    for _ in 0..=m {
        ht.push(power);
        power *= t;
    }

    Ok(SspInstanceEvaluation {
        num_variables: cs.num_variables(),
        degree: m,
        num_inputs: cs.num_inputs,
        vt,
        ht,
        zt,
    })
}

/// Compute the witness-side coefficients for the blinding scalar `d`.
///
/// With A(X) interpolating the constraint evaluations over H and
/// P(X) = A(X) + d·Z(X), returns the coefficients of
/// H(X) = (P(X)² − 1) / Z(X) = (A(X)² − 1)/Z(X) + 2d·A(X) + d²·Z(X).
/// The quadratic part divides exactly because the assignment satisfies
/// every row; it is evaluated on a coset of H, where Z is the nonzero
/// constant g^|H| − 1.
pub fn witness_map<F: PrimeField>(
    cs: &UscsConstraintSystem<F>,
    primary: &[F],
    auxiliary: &[F],
    d: &F,
) -> Result<SspWitness<F>> {
    let domain = constraint_domain(cs)?;
    let m = domain.size();

    let assignment = cs.full_assignment(primary, auxiliary)?;
    if !cs.is_satisfied(primary, auxiliary)? {
        return Err(SnarkError::UnsatisfiedWitness);
    }

    let mut evals = vec![F::one(); m];
    for (row, constraint) in evals.iter_mut().zip(&cs.constraints) {
        *row = constraint.evaluate(&assignment);
    }
    let a_coeffs = domain.ifft(&evals);

    // 2d·A(X) + d²·Z(X), with Z(X) = X^m − 1
    let mut coefficients_for_h = vec![F::zero(); m + 1];
    for (h, a) in coefficients_for_h.iter_mut().zip(&a_coeffs) {
        *h = a.double() * d;
    }
    let d_squared = d.square();
    coefficients_for_h[m] += d_squared;
    coefficients_for_h[0] -= d_squared;

    // (A(X)² − 1)/Z(X) on the coset g·H, where Z is constant
    let coset = domain.get_coset(F::GENERATOR).ok_or_else(|| {
        SnarkError::InvalidShape("no multiplicative coset for the constraint domain".into())
    })?;
    let z_on_coset_inv = domain
        .evaluate_vanishing_polynomial(F::GENERATOR)
        .inverse()
        .ok_or_else(|| SnarkError::InvalidShape("vanishing polynomial degenerate on coset".into()))?;

    let mut quotient = coset.fft(&a_coeffs);
    for value in quotient.iter_mut() {
        *value = (value.square() - F::one()) * z_on_coset_inv;
    }
    let quotient = coset.ifft(&quotient);
    for (h, q) in coefficients_for_h.iter_mut().zip(&quotient) {
        *h += q;
    }

    let mut coefficients_for_vs = Vec::with_capacity(cs.num_variables() + 1);
    coefficients_for_vs.push(F::one());
    coefficients_for_vs.extend(assignment);

    Ok(SspWitness {
        num_variables: cs.num_variables(),
        degree: m,
        num_inputs: cs.num_inputs,
        d: *d,
        coefficients_for_vs,
        coefficients_for_h,
    })
}
