//! Instance-side SSP evaluation at a fixed field point

use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// The SSP instance evaluated at a point t.
///
/// `vt[i] = Vᵢ(t)` for i in 0..=num_variables, with the trailing dummy slot
/// `vt[num_variables + 1] = Z(t)` used by the zero-knowledge randomizer.
/// `ht[k] = tᵏ` for k in 0..=degree, and `zt = Z(t)`.
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct SspInstanceEvaluation<F: Field> {
    pub num_variables: usize,
    pub degree: usize,
    pub num_inputs: usize,
    pub vt: Vec<F>,
    pub ht: Vec<F>,
    pub zt: F,
}

impl<F: Field> SspInstanceEvaluation<F> {
    /// Shape invariants of a well-formed evaluation.
    pub fn is_well_formed(&self) -> bool {
        self.num_inputs <= self.num_variables
            && self.vt.len() == self.num_variables + 2
            && self.ht.len() == self.degree + 1
    }
}
