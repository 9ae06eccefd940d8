//! Multi-scalar multiplication using Pippenger's bucket method
//!
//! Computes Σ scalarᵢ·Pᵢ. The caller picks the chunk count: the input
//! ranges are split into that many disjoint sub-ranges, partial sums are
//! computed in parallel, and the partials are reduced at the end. Group
//! addition is associative, so the result is independent of the chunk
//! count.
//!
//! Two accumulation paths: plain projective buckets (`multiexp`), and
//! mixed addition over batch-normalized points (`multiexp_mixed`), which
//! trades one batch inversion for cheaper bucket additions.

use ark_ec::CurveGroup;
use ark_ff::{BigInteger, PrimeField};
use ark_std::Zero;
use rayon::prelude::*;

/// Below this many terms the bucket machinery costs more than it saves.
const NAIVE_THRESHOLD: usize = 32;

/// Σ scalars[i] · bases[i] with projective bucket accumulation.
pub fn multiexp<G: CurveGroup>(bases: &[G], scalars: &[G::ScalarField], chunks: usize) -> G {
    assert_eq!(bases.len(), scalars.len(), "multiexp length mismatch");
    split_into_chunks(bases, scalars, chunks, msm_projective)
}

/// Σ scalars[i] · bases[i] with mixed-addition bucket accumulation.
pub fn multiexp_mixed<G: CurveGroup>(bases: &[G], scalars: &[G::ScalarField], chunks: usize) -> G {
    assert_eq!(bases.len(), scalars.len(), "multiexp length mismatch");
    split_into_chunks(bases, scalars, chunks, |b, s| {
        msm_mixed::<G>(&G::normalize_batch(b), s)
    })
}

fn split_into_chunks<G: CurveGroup>(
    bases: &[G],
    scalars: &[G::ScalarField],
    chunks: usize,
    msm_one_chunk: impl Fn(&[G], &[G::ScalarField]) -> G + Send + Sync,
) -> G {
    if bases.is_empty() {
        return G::zero();
    }
    let chunks = chunks.clamp(1, bases.len());
    if chunks == 1 {
        return msm_one_chunk(bases, scalars);
    }

    let chunk_len = (bases.len() + chunks - 1) / chunks;
    bases
        .par_chunks(chunk_len)
        .zip(scalars.par_chunks(chunk_len))
        .map(|(b, s)| msm_one_chunk(b, s))
        .reduce(G::zero, |a, b| a + b)
}

fn msm_projective<G: CurveGroup>(bases: &[G], scalars: &[G::ScalarField]) -> G {
    if bases.len() < NAIVE_THRESHOLD {
        return msm_naive(bases, scalars);
    }

    let c = window_size(bases.len());
    let scalar_bits = G::ScalarField::MODULUS_BIT_SIZE as usize;
    let num_windows = (scalar_bits + c - 1) / c;

    let mut result = G::zero();
    for window_idx in (0..num_windows).rev() {
        for _ in 0..c {
            result.double_in_place();
        }
        let mut buckets = vec![G::zero(); 1 << c];
        for (base, scalar) in bases.iter().zip(scalars) {
            let idx = window_bits(scalar, window_idx, c);
            if idx > 0 {
                buckets[idx] += base;
            }
        }
        result += combine_buckets(&buckets);
    }
    result
}

fn msm_mixed<G: CurveGroup>(bases: &[G::Affine], scalars: &[G::ScalarField]) -> G {
    if bases.len() < NAIVE_THRESHOLD {
        return bases
            .iter()
            .zip(scalars)
            .map(|(b, s)| *b * s)
            .fold(G::zero(), |acc, p| acc + p);
    }

    let c = window_size(bases.len());
    let scalar_bits = G::ScalarField::MODULUS_BIT_SIZE as usize;
    let num_windows = (scalar_bits + c - 1) / c;

    let mut result = G::zero();
    for window_idx in (0..num_windows).rev() {
        for _ in 0..c {
            result.double_in_place();
        }
        let mut buckets = vec![G::zero(); 1 << c];
        for (base, scalar) in bases.iter().zip(scalars) {
            let idx = window_bits(scalar, window_idx, c);
            if idx > 0 {
                buckets[idx] += *base;
            }
        }
        result += combine_buckets(&buckets);
    }
    result
}

fn msm_naive<G: CurveGroup>(bases: &[G], scalars: &[G::ScalarField]) -> G {
    bases
        .iter()
        .zip(scalars)
        .map(|(b, s)| *b * s)
        .fold(G::zero(), |acc, p| acc + p)
}

/// Extract window `window_idx` of `c` bits from the little-endian scalar.
fn window_bits<F: PrimeField>(scalar: &F, window_idx: usize, c: usize) -> usize {
    let bytes = scalar.into_bigint().to_bytes_le();
    let start_bit = window_idx * c;

    let mut result = 0usize;
    for i in 0..c {
        let bit_pos = start_bit + i;
        let byte_idx = bit_pos / 8;
        if byte_idx < bytes.len() {
            let bit = (bytes[byte_idx] >> (bit_pos % 8)) & 1;
            result |= (bit as usize) << i;
        }
    }
    result
}

/// Σ i·buckets[i] by the running-sum trick, skipping bucket 0.
fn combine_buckets<G: CurveGroup>(buckets: &[G]) -> G {
    let mut running_sum = G::zero();
    let mut result = G::zero();
    for bucket in buckets.iter().skip(1).rev() {
        running_sum += bucket;
        result += running_sum;
    }
    result
}

/// Bucket window width for an input of n terms, roughly log₂(n), capped
/// to keep the bucket vector small.
fn window_size(n: usize) -> usize {
    match n {
        0..=31 => 1,
        32..=127 => 2,
        128..=511 => 3,
        512..=2047 => 4,
        2048..=8191 => 5,
        8192..=32767 => 6,
        32768..=131071 => 7,
        _ => 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Projective, G2Projective};
    use ark_std::{test_rng, UniformRand};

    fn random_input(n: usize) -> (Vec<G1Projective>, Vec<Fr>) {
        let mut rng = test_rng();
        let bases = (0..n).map(|_| G1Projective::rand(&mut rng)).collect();
        let scalars = (0..n).map(|_| Fr::rand(&mut rng)).collect();
        (bases, scalars)
    }

    #[test]
    fn empty_input() {
        let result = multiexp::<G1Projective>(&[], &[], 1);
        assert_eq!(result, G1Projective::zero());
    }

    #[test]
    fn matches_naive() {
        let (bases, scalars) = random_input(200);
        let expected = msm_naive(&bases, &scalars);
        assert_eq!(multiexp(&bases, &scalars, 1), expected);
        assert_eq!(multiexp_mixed(&bases, &scalars, 1), expected);
    }

    #[test]
    fn chunk_count_does_not_change_the_result() {
        let (bases, scalars) = random_input(300);
        let reference = multiexp(&bases, &scalars, 1);
        for chunks in [2, 3, 4, 7, 300, 1000] {
            assert_eq!(multiexp(&bases, &scalars, chunks), reference);
            assert_eq!(multiexp_mixed(&bases, &scalars, chunks), reference);
        }
    }

    #[test]
    fn linearity() {
        let (bases, scalars_a) = random_input(64);
        let mut rng = test_rng();
        let scalars_b: Vec<Fr> = (0..64).map(|_| Fr::rand(&mut rng)).collect();

        let summed: Vec<Fr> = scalars_a
            .iter()
            .zip(&scalars_b)
            .map(|(a, b)| *a + b)
            .collect();

        let lhs = multiexp(&bases, &summed, 2);
        let rhs = multiexp(&bases, &scalars_a, 2) + multiexp(&bases, &scalars_b, 2);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn works_over_g2() {
        let mut rng = test_rng();
        let bases: Vec<G2Projective> = (0..50).map(|_| G2Projective::rand(&mut rng)).collect();
        let scalars: Vec<Fr> = (0..50).map(|_| Fr::rand(&mut rng)).collect();

        let expected = msm_naive(&bases, &scalars);
        assert_eq!(multiexp(&bases, &scalars, 3), expected);
    }

    #[test]
    fn window_bits_of_small_scalar() {
        let scalar = Fr::from(0b1011_0101u64);
        assert_eq!(window_bits(&scalar, 0, 4), 0b0101);
        assert_eq!(window_bits(&scalar, 1, 4), 0b1011);
        assert_eq!(window_bits(&scalar, 2, 4), 0);
    }

    #[test]
    fn combine_buckets_weighted_sum() {
        let mut rng = test_rng();
        let buckets: Vec<G1Projective> = (0..8).map(|_| G1Projective::rand(&mut rng)).collect();
        let result = combine_buckets(&buckets);

        let mut expected = G1Projective::zero();
        for (i, bucket) in buckets.iter().enumerate().skip(1) {
            expected += *bucket * Fr::from(i as u64);
        }
        assert_eq!(result, expected);
    }
}
