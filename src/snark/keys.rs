//! Key material: proving key, verification key, preprocessed verification key

use ark_ec::pairing::{Pairing, PairingOutput};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::accumulation::AccumulationVector;
use crate::uscs::UscsConstraintSystem;

/// A proving key.
///
/// `v_g1_query` and `alpha_v_g1_query` cover the auxiliary variables plus
/// the trailing dummy slot only; `v_g2_query` covers every slot, inputs
/// included. The asymmetry is what lets the verifier reconstruct the
/// input share from the verification key alone.
#[derive(Debug, Clone, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ProvingKey<E: Pairing> {
    pub v_g1_query: Vec<E::G1>,
    pub alpha_v_g1_query: Vec<E::G1>,
    pub h_g1_query: Vec<E::G1>,
    pub v_g2_query: Vec<E::G2>,
    pub cs: UscsConstraintSystem<E::ScalarField>,
}

impl<E: Pairing> ProvingKey<E> {
    pub fn g1_size(&self) -> usize {
        self.v_g1_query.len() + self.alpha_v_g1_query.len() + self.h_g1_query.len()
    }

    pub fn g2_size(&self) -> usize {
        self.v_g2_query.len()
    }

    pub fn size_in_bits(&self) -> usize {
        let g1: usize = self.v_g1_query.iter().map(CanonicalSerialize::compressed_size).sum::<usize>()
            + self.alpha_v_g1_query.iter().map(CanonicalSerialize::compressed_size).sum::<usize>()
            + self.h_g1_query.iter().map(CanonicalSerialize::compressed_size).sum::<usize>();
        let g2: usize = self.v_g2_query.iter().map(CanonicalSerialize::compressed_size).sum();
        (g1 + g2) * 8
    }
}

/// A verification key: three G2 elements plus the encoded input-consistency
/// query.
#[derive(Debug, Clone, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerifyingKey<E: Pairing> {
    pub tilde_g2: E::G2Affine,
    pub alpha_tilde_g2: E::G2Affine,
    pub z_g2: E::G2Affine,
    pub encoded_ic_query: AccumulationVector<E::G1Affine>,
}

impl<E: Pairing> VerifyingKey<E> {
    pub fn g1_size(&self) -> usize {
        self.encoded_ic_query.domain_size() + 1
    }

    pub fn g2_size(&self) -> usize {
        3
    }

    pub fn size_in_bits(&self) -> usize {
        self.encoded_ic_query.size_in_bits()
            + (self.tilde_g2.compressed_size()
                + self.alpha_tilde_g2.compressed_size()
                + self.z_g2.compressed_size())
                * 8
    }
}

/// A verification key with the pairing precomputations applied, plus the
/// cached pairing of the two generators.
#[derive(Debug, Clone, CanonicalSerialize, CanonicalDeserialize)]
pub struct PreparedVerifyingKey<E: Pairing> {
    pub g1_one_precomp: E::G1Prepared,
    pub g2_one_precomp: E::G2Prepared,
    pub tilde_g2_precomp: E::G2Prepared,
    pub alpha_tilde_g2_precomp: E::G2Prepared,
    pub z_g2_precomp: E::G2Prepared,
    pub pairing_of_g1_and_g2: PairingOutput<E>,
    pub encoded_ic_query: AccumulationVector<E::G1Affine>,
}

// Prepared points carry no equality of their own; compare canonical bytes.
impl<E: Pairing> PartialEq for PreparedVerifyingKey<E> {
    fn eq(&self, other: &Self) -> bool {
        let serialize = |pvk: &Self| {
            let mut bytes = Vec::new();
            pvk.serialize_compressed(&mut bytes).map(|_| bytes)
        };
        match (serialize(self), serialize(other)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

/// A proving key and its verification key.
#[derive(Debug, Clone, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Keypair<E: Pairing> {
    pub pk: ProvingKey<E>,
    pub vk: VerifyingKey<E>,
}
