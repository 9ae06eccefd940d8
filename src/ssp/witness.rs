//! Witness-side SSP coefficients

use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// Coefficients a prover feeds into the encoded queries.
///
/// `coefficients_for_vs` has length `num_variables + 1`; index 0 is the
/// constant slot (always 1), index i the value of variable i.
/// `coefficients_for_h` are the monomial coefficients of
/// H(X) = (P(X)² − 1) / Z(X), length `degree + 1`.
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct SspWitness<F: Field> {
    pub num_variables: usize,
    pub degree: usize,
    pub num_inputs: usize,
    pub d: F,
    pub coefficients_for_vs: Vec<F>,
    pub coefficients_for_h: Vec<F>,
}

impl<F: Field> SspWitness<F> {
    pub fn is_well_formed(&self) -> bool {
        self.num_inputs <= self.num_variables
            && self.coefficients_for_vs.len() == self.num_variables + 1
            && self.coefficients_for_h.len() == self.degree + 1
    }
}
