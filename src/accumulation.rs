//! Accumulation vector over a group
//!
//! Represents v₀·G + Σᵢ vᵢ·Gᵢ with a base element plus the tail of
//! positions not yet folded in. Chunks of scalars are folded in order;
//! once the frontier has crossed the whole domain only the base remains.
//! The dense layout suits contiguous public-input indices, which is what
//! the key generator emits.

use ark_ec::AffineRepr;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct AccumulationVector<G: AffineRepr> {
    pub first: G,
    pub rest: Vec<G>,
    accumulated: usize,
}

impl<G: AffineRepr> AccumulationVector<G> {
    pub fn new(first: G, rest: Vec<G>) -> Self {
        Self {
            first,
            rest,
            accumulated: 0,
        }
    }

    /// Number of sparse positions the vector represents, folded or not.
    pub fn domain_size(&self) -> usize {
        self.accumulated + self.rest.len()
    }

    pub fn is_fully_accumulated(&self) -> bool {
        self.rest.is_empty()
    }

    /// Serialized size of the remaining representation.
    pub fn size_in_bits(&self) -> usize {
        (self.first.compressed_size() + self.rest.iter().map(G::compressed_size).sum::<usize>()) * 8
    }

    /// Fold `scalars` into the base. `offset` must equal the current
    /// frontier; chunks arrive in order and may not overlap. Panics on a
    /// frontier mismatch or a chunk that overruns the domain.
    pub fn accumulate_chunk(&self, scalars: &[G::ScalarField], offset: usize) -> Self {
        assert_eq!(offset, self.accumulated, "chunk offset must match frontier");
        assert!(scalars.len() <= self.rest.len(), "chunk overruns the domain");

        let mut folded = self.first.into_group();
        for (scalar, base) in scalars.iter().zip(&self.rest) {
            folded += *base * scalar;
        }

        Self {
            first: folded.into(),
            rest: self.rest[scalars.len()..].to_vec(),
            accumulated: self.accumulated + scalars.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Affine, G1Projective};
    use ark_ec::CurveGroup;
    use ark_std::{test_rng, UniformRand, Zero};

    fn random_vector(n: usize) -> AccumulationVector<G1Affine> {
        let mut rng = test_rng();
        let first = G1Projective::rand(&mut rng).into_affine();
        let rest = (0..n)
            .map(|_| G1Projective::rand(&mut rng).into_affine())
            .collect();
        AccumulationVector::new(first, rest)
    }

    #[test]
    fn full_chunk_accumulates_everything() {
        let acc = random_vector(4);
        let mut rng = test_rng();
        let scalars: Vec<Fr> = (0..4).map(|_| Fr::rand(&mut rng)).collect();

        let folded = acc.accumulate_chunk(&scalars, 0);
        assert!(folded.is_fully_accumulated());
        assert_eq!(folded.domain_size(), 4);

        let mut expected = acc.first.into_group();
        for (s, g) in scalars.iter().zip(&acc.rest) {
            expected += *g * s;
        }
        assert_eq!(folded.first, expected.into_affine());
    }

    #[test]
    fn chunked_equals_whole() {
        let acc = random_vector(6);
        let mut rng = test_rng();
        let scalars: Vec<Fr> = (0..6).map(|_| Fr::rand(&mut rng)).collect();

        let whole = acc.accumulate_chunk(&scalars, 0);
        let halves = acc
            .accumulate_chunk(&scalars[..3], 0)
            .accumulate_chunk(&scalars[3..], 3);

        assert_eq!(whole.first, halves.first);
        assert!(halves.is_fully_accumulated());
    }

    #[test]
    fn zero_scalars_leave_base_unchanged() {
        let acc = random_vector(3);
        let folded = acc.accumulate_chunk(&[Fr::zero(), Fr::zero(), Fr::zero()], 0);
        assert_eq!(folded.first, acc.first);
        assert!(folded.is_fully_accumulated());
    }

    #[test]
    #[should_panic(expected = "frontier")]
    fn out_of_order_chunk_panics() {
        let acc = random_vector(3);
        acc.accumulate_chunk(&[Fr::zero()], 1);
    }

    #[test]
    fn partial_chunk_keeps_tail() {
        let acc = random_vector(5);
        let mut rng = test_rng();
        let scalars: Vec<Fr> = (0..2).map(|_| Fr::rand(&mut rng)).collect();

        let folded = acc.accumulate_chunk(&scalars, 0);
        assert!(!folded.is_fully_accumulated());
        assert_eq!(folded.domain_size(), 5);
        assert_eq!(folded.rest.len(), 3);
    }
}
