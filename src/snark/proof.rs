//! The four-element proof

use ark_ec::pairing::Pairing;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Valid};

/// A proof: three G1 elements and one G2 element, in affine form.
///
/// Proofs are only produced by the prover or by deserialization; there is
/// deliberately no default value, so a proof that was never filled in
/// cannot masquerade as a real one.
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<E: Pairing> {
    pub v_g1: E::G1Affine,
    pub alpha_v_g1: E::G1Affine,
    pub h_g1: E::G1Affine,
    pub v_g2: E::G2Affine,
}

impl<E: Pairing> Proof<E> {
    pub fn g1_size(&self) -> usize {
        3
    }

    pub fn g2_size(&self) -> usize {
        1
    }

    pub fn size_in_bits(&self) -> usize {
        (self.v_g1.compressed_size()
            + self.alpha_v_g1.compressed_size()
            + self.h_g1.compressed_size()
            + self.v_g2.compressed_size())
            * 8
    }

    /// Curve membership and prime-order subgroup checks on all four points.
    pub fn is_well_formed(&self) -> bool {
        self.v_g1.check().is_ok()
            && self.alpha_v_g1.check().is_ok()
            && self.h_g1.check().is_ok()
            && self.v_g2.check().is_ok()
    }
}
