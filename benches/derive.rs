use criterion::{black_box, criterion_group, criterion_main, Criterion};

use libp2p_peerid::identity::Seed;
use libp2p_peerid::peer_id::PeerId;

fn derive_from_base64_bench(c: &mut Criterion) {
    let seed = "MDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDE=";

    c.bench_function("derive_peer_id_base64", |b| {
        b.iter(|| libp2p_peerid::derive_peer_id(black_box(seed)).unwrap())
    });
}

fn derive_from_seed_bench(c: &mut Criterion) {
    let seed = Seed::from_bytes([7u8; 32]);

    c.bench_function("peer_id_from_seed", |b| {
        b.iter(|| PeerId::from_seed(black_box(&seed)))
    });
}

criterion_group!(benches, derive_from_base64_bench, derive_from_seed_bench);
criterion_main!(benches);
