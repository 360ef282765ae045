//! Snapshot vs replay digest strategies.
//!
//! Snapshot copies the hashing context on every digest; replay re-hashes the
//! whole buffered message. The gap widens with message size.
//!
//! Run with:
//! ```bash
//! cargo bench --bench digest_strategy
//! ```

#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ntlm_crypt::{
    CipherMode, DesBackend, DesEngine, DigestStrategy, HashAlgorithm, Hasher, MessageHasher,
};
use std::hint::black_box;

/// Digest after every chunk, the access pattern NTLM message integrity uses.
fn bench_interleaved_digests(c: &mut Criterion) {
    let mut group = c.benchmark_group("interleaved_digests");
    let chunk = [0x5a_u8; 256];

    for chunks in [4_usize, 64] {
        for strategy in [DigestStrategy::Snapshot, DigestStrategy::Replay] {
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), chunks),
                &chunks,
                |b, &chunks| {
                    b.iter(|| {
                        let mut hasher = Hasher::with_strategy(HashAlgorithm::Md5, None, strategy)
                            .expect("unkeyed md5 hasher");
                        for _ in 0..chunks {
                            hasher.update(black_box(&chunk));
                            black_box(hasher.digest());
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

/// Single-block DES encryption per backend.
fn bench_des_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("des_block");
    let key = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd];

    for backend in [DesBackend::RustCrypto, DesBackend::Legacy] {
        let engine = DesEngine::new(backend);
        group.bench_function(backend.to_string(), |b| {
            b.iter(|| {
                engine
                    .encrypt(
                        black_box(&key),
                        black_box(b"KGS!@#$%"),
                        CipherMode::Ecb,
                        &[],
                    )
                    .expect("valid DES key")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_interleaved_digests, bench_des_backends);
criterion_main!(benches);
