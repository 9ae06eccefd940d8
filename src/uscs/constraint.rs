//! A single unitary-square constraint: a sparse linear form over (1, x, w)

use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// One term of a linear form. Index 0 addresses the implicit constant 1;
/// indices 1..=num_variables address the assignment (x ‖ w).
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Term<F: Field> {
    pub index: usize,
    pub coeff: F,
}

impl<F: Field> Term<F> {
    pub fn new(index: usize, coeff: F) -> Self {
        Self { index, coeff }
    }
}

/// A sparse linear form c; the constraint is ⟨c, (1, x, w)⟩² = 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct UscsConstraint<F: Field> {
    pub terms: Vec<Term<F>>,
}

impl<F: Field> UscsConstraint<F> {
    pub fn new(terms: Vec<Term<F>>) -> Self {
        Self { terms }
    }

    /// Add a term to the form.
    pub fn push(&mut self, index: usize, coeff: F) {
        self.terms.push(Term::new(index, coeff));
    }

    /// Evaluate ⟨c, (1, assignment)⟩. `assignment` is (x ‖ w), so variable i
    /// lives at assignment[i - 1].
    pub fn evaluate(&self, assignment: &[F]) -> F {
        let mut acc = F::zero();
        for term in &self.terms {
            if term.index == 0 {
                acc += term.coeff;
            } else {
                acc += term.coeff * assignment[term.index - 1];
            }
        }
        acc
    }

    /// Largest variable index referenced by the form (0 if only the constant).
    pub fn max_index(&self) -> usize {
        self.terms.iter().map(|t| t.index).max().unwrap_or(0)
    }
}
