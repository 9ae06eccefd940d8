//! USCS constraint system and satisfaction checking
//!
//! Checks: ⟨cᵢ, (1, x, w)⟩² = 1 for every constraint cᵢ

use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use super::UscsConstraint;
use crate::errors::SnarkError;
use crate::errors::Result as SnarkResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct UscsConstraintSystem<F: Field> {
    pub num_inputs: usize,
    pub num_auxiliary: usize,
    pub constraints: Vec<UscsConstraint<F>>,
}

impl<F: Field> UscsConstraintSystem<F> {
    pub fn new(num_inputs: usize, num_auxiliary: usize) -> Self {
        Self {
            num_inputs,
            num_auxiliary,
            constraints: Vec::new(),
        }
    }

    /// Total variable count, excluding the implicit constant 1.
    pub fn num_variables(&self) -> usize {
        self.num_inputs + self.num_auxiliary
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Append a constraint. Panics if a term references a variable the
    /// system does not have.
    pub fn add_constraint(&mut self, constraint: UscsConstraint<F>) {
        assert!(
            constraint.max_index() <= self.num_variables(),
            "constraint references variable out of range"
        );
        self.constraints.push(constraint);
    }

    /// Structural well-formedness: at least one constraint, input count
    /// within the variable count, every term index in range.
    pub fn is_valid(&self) -> bool {
        !self.constraints.is_empty()
            && self.num_inputs <= self.num_variables()
            && self
                .constraints
                .iter()
                .all(|c| c.max_index() <= self.num_variables())
    }

    /// Concatenate (x ‖ w) after checking the lengths against the declared
    /// shape.
    pub fn full_assignment(&self, primary: &[F], auxiliary: &[F]) -> SnarkResult<Vec<F>> {
        if primary.len() != self.num_inputs {
            return Err(SnarkError::InvalidShape(format!(
                "primary input length mismatch: expected {}, got {}",
                self.num_inputs,
                primary.len()
            )));
        }
        if auxiliary.len() != self.num_auxiliary {
            return Err(SnarkError::InvalidShape(format!(
                "auxiliary input length mismatch: expected {}, got {}",
                self.num_auxiliary,
                auxiliary.len()
            )));
        }
        let mut assignment = Vec::with_capacity(self.num_variables());
        assignment.extend_from_slice(primary);
        assignment.extend_from_slice(auxiliary);
        Ok(assignment)
    }

    /// Check that every linear form squares to one under (x ‖ w).
    pub fn is_satisfied(&self, primary: &[F], auxiliary: &[F]) -> SnarkResult<bool> {
        let assignment = self.full_assignment(primary, auxiliary)?;
        for constraint in &self.constraints {
            if constraint.evaluate(&assignment).square() != F::one() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;
    use ark_ff::One;

    // x₁ must be ±1: single constraint ⟨(0, 1), (1, x₁)⟩² = 1
    fn sign_system() -> UscsConstraintSystem<Fr> {
        let mut cs = UscsConstraintSystem::new(1, 0);
        let mut c = UscsConstraint::default();
        c.push(1, Fr::one());
        cs.add_constraint(c);
        cs
    }

    #[test]
    fn sign_satisfied_by_one_and_minus_one() {
        let cs = sign_system();
        assert!(cs.is_satisfied(&[Fr::one()], &[]).unwrap());
        assert!(cs.is_satisfied(&[-Fr::one()], &[]).unwrap());
    }

    #[test]
    fn sign_unsatisfied_by_two() {
        let cs = sign_system();
        assert!(!cs.is_satisfied(&[Fr::from(2u64)], &[]).unwrap());
    }

    #[test]
    fn mixed_form_with_constant() {
        // 1 + x₁ − w₁, satisfied by x₁ = 1, w₁ = 1 (evaluates to 1)
        // and by x₁ = −1, w₁ = 1 (evaluates to −1)
        let mut cs = UscsConstraintSystem::new(1, 1);
        let mut c = UscsConstraint::default();
        c.push(0, Fr::one());
        c.push(1, Fr::one());
        c.push(2, -Fr::one());
        cs.add_constraint(c);

        assert!(cs.is_satisfied(&[Fr::one()], &[Fr::one()]).unwrap());
        assert!(cs.is_satisfied(&[-Fr::one()], &[Fr::one()]).unwrap());
        assert!(!cs.is_satisfied(&[Fr::from(3u64)], &[Fr::one()]).unwrap());
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let cs = sign_system();
        assert!(cs.is_satisfied(&[], &[]).is_err());
        assert!(cs.is_satisfied(&[Fr::one(), Fr::one()], &[]).is_err());
    }

    #[test]
    fn validity_checks() {
        let cs = sign_system();
        assert!(cs.is_valid());

        let empty = UscsConstraintSystem::<Fr>::new(1, 0);
        assert!(!empty.is_valid());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_term_panics() {
        let mut cs = UscsConstraintSystem::<Fr>::new(1, 0);
        let mut c = UscsConstraint::default();
        c.push(2, Fr::one());
        cs.add_constraint(c);
    }
}
