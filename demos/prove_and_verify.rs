//! Generate and verify a proof for a small unitary-square system
//!
//! The circuit fixes every variable to ±1 and ties the two public inputs
//! to the witness variable through a mixed row, then runs the full
//! generator → prover → verifier pipeline over BLS12-381.

use ark_bls12_381::{Bls12_381, Fr};
use ark_ff::One;
use ark_serialize::CanonicalSerialize;
use rand::thread_rng;

use sqspan::{
    create_proof, generate_keypair, online_verify_strong_ic, prepare_verifying_key,
    verify_proof_weak_ic, UscsConstraint, UscsConstraintSystem,
};

fn print_hex(label: &str, bytes: &[u8], max_display: usize) {
    let display_len = bytes.len().min(max_display);
    let hex: String = bytes[..display_len]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect();
    if bytes.len() > max_display {
        println!("{label}: {hex}… ({} bytes)", bytes.len());
    } else {
        println!("{label}: {hex} ({} bytes)", bytes.len());
    }
}

fn main() {
    // x₁, w₁ ∈ {±1}; x₂ ∈ {0, −2} via the form 1 + x₂; and the mixed
    // row x₁ + w₁ − 1. Satisfied by x = (1, 0), w = (1), so the weak-IC
    // verifier can drop the trailing zero input.
    let mut cs = UscsConstraintSystem::<Fr>::new(2, 1);
    for index in [1usize, 3] {
        let mut c = UscsConstraint::default();
        c.push(index, Fr::one());
        cs.add_constraint(c);
    }
    let mut shifted = UscsConstraint::default();
    shifted.push(0, Fr::one());
    shifted.push(2, Fr::one());
    cs.add_constraint(shifted);
    let mut mixed = UscsConstraint::default();
    mixed.push(1, Fr::one());
    mixed.push(3, Fr::one());
    mixed.push(0, -Fr::one());
    cs.add_constraint(mixed);

    let primary = vec![Fr::one(), Fr::from(0u64)];
    let auxiliary = vec![Fr::one()];
    assert!(cs.is_satisfied(&primary, &auxiliary).expect("shape"));

    let mut rng = thread_rng();
    let keypair = generate_keypair::<Bls12_381, _>(&cs, &mut rng).expect("keypair");
    println!(
        "keys: pk {} G1 + {} G2 elements ({} bits), vk {} bits",
        keypair.pk.g1_size(),
        keypair.pk.g2_size(),
        keypair.pk.size_in_bits(),
        keypair.vk.size_in_bits(),
    );

    let proof = create_proof(&keypair.pk, &primary, &auxiliary, &mut rng).expect("proof");
    println!(
        "proof: {} G1 + {} G2 elements ({} bits)",
        proof.g1_size(),
        proof.g2_size(),
        proof.size_in_bits(),
    );

    let mut proof_bytes = Vec::new();
    proof.serialize_compressed(&mut proof_bytes).expect("serialize");
    print_hex("proof (compressed)", &proof_bytes, 32);

    let pvk = prepare_verifying_key(&keypair.vk);
    println!(
        "strong IC: {}",
        online_verify_strong_ic(&pvk, &primary, &proof)
    );
    println!(
        "weak IC, truncated input: {}",
        verify_proof_weak_ic(&keypair.vk, &primary[..1], &proof)
    );
}
