use ark_bls12_381::{Bls12_381, Fr};
use ark_ff::One;
use ark_std::test_rng;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sqspan::{
    create_proof_with_config, generate_keypair, online_verify_strong_ic, prepare_verifying_key,
    SnarkConfig, UscsConstraint, UscsConstraintSystem,
};

/// Circuit with two inputs and `num_aux` auxiliaries, all forced to ±1,
/// plus chain rows tying consecutive auxiliaries together.
fn chain_circuit(num_aux: usize) -> (UscsConstraintSystem<Fr>, Vec<Fr>, Vec<Fr>) {
    let mut cs = UscsConstraintSystem::new(2, num_aux);
    for index in 1..=2 + num_aux {
        let mut c = UscsConstraint::default();
        c.push(index, Fr::one());
        cs.add_constraint(c);
    }
    for index in 3..2 + num_aux {
        let mut c = UscsConstraint::default();
        c.push(index, Fr::one());
        c.push(index + 1, Fr::one());
        c.push(0, -Fr::one());
        cs.add_constraint(c);
    }
    (cs, vec![Fr::one(); 2], vec![Fr::one(); num_aux])
}

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");
    group.sample_size(10);
    let mut rng = test_rng();

    for log_size in [6, 8, 10].iter() {
        let num_aux = (1usize << log_size) - 2;
        let (cs, _, _) = chain_circuit(num_aux);

        group.throughput(Throughput::Elements(cs.num_constraints() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n=2^{}", log_size)),
            &num_aux,
            |b, _| {
                b.iter(|| black_box(generate_keypair::<Bls12_381, _>(black_box(&cs), &mut rng)));
            },
        );
    }
    group.finish();
}

fn bench_prover(c: &mut Criterion) {
    let mut group = c.benchmark_group("prover");
    group.sample_size(10);
    let mut rng = test_rng();

    for log_size in [6, 8, 10].iter() {
        let num_aux = (1usize << log_size) - 2;
        let (cs, primary, auxiliary) = chain_circuit(num_aux);
        let keypair = generate_keypair::<Bls12_381, _>(&cs, &mut rng).unwrap();

        for parallelism in [1usize, 4] {
            let config = SnarkConfig { mixed_addition: true, parallelism };
            group.throughput(Throughput::Elements(cs.num_constraints() as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n=2^{log_size}/chunks={parallelism}")),
                &config,
                |b, config| {
                    b.iter(|| {
                        black_box(create_proof_with_config(
                            black_box(&keypair.pk),
                            &primary,
                            &auxiliary,
                            config,
                            &mut rng,
                        ))
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_verifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("verifier");
    let mut rng = test_rng();

    for log_size in [6, 10].iter() {
        let num_aux = (1usize << log_size) - 2;
        let (cs, primary, auxiliary) = chain_circuit(num_aux);
        let keypair = generate_keypair::<Bls12_381, _>(&cs, &mut rng).unwrap();
        let proof = create_proof_with_config(
            &keypair.pk,
            &primary,
            &auxiliary,
            &SnarkConfig::default(),
            &mut rng,
        )
        .unwrap();
        let pvk = prepare_verifying_key(&keypair.vk);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n=2^{}", log_size)),
            &proof,
            |b, proof| {
                b.iter(|| {
                    black_box(online_verify_strong_ic(
                        black_box(&pvk),
                        black_box(&primary),
                        proof,
                    ))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generator, bench_prover, bench_verifier);
criterion_main!(benches);
