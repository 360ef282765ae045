#![allow(clippy::expect_used, clippy::unwrap_used)]
//! NTLM known-answer tests
//!
//! Values from the [MS-NLMP] 4.2.2 examples (user "User", domain "Domain",
//! password "Password", server challenge 0123456789abcdef).

use ntlm_crypt::{
    CipherMode, CryptConfig, DesBackend, DesEngine, DigestStrategy, HasherFactory, MessageHasher,
};
use pretty_assertions::assert_eq;

const SERVER_CHALLENGE: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn utf16le(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

fn ntowf_v1(factory: &HasherFactory, password: &str) -> Vec<u8> {
    factory
        .build("md4")
        .unwrap()
        .update(&utf16le(password))
        .digest()
}

/// DESL(): three DES encryptions of the challenge under 7-byte slices of the key
fn desl(engine: &DesEngine, key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut padded = key.to_vec();
    padded.resize(21, 0);
    padded
        .chunks(7)
        .flat_map(|part| engine.encrypt(part, data, CipherMode::Ecb, &[]).unwrap())
        .collect()
}

#[test]
fn nt_hash() {
    for strategy in [DigestStrategy::Snapshot, DigestStrategy::Replay] {
        let factory = HasherFactory::new(&CryptConfig::new().with_digest_strategy(strategy));
        assert_eq!(
            hex::encode(ntowf_v1(&factory, "Password")),
            "a4f49c406510bdcab6824ee7c30fd852"
        );
    }
}

#[test]
fn ntlmv2_hash() {
    let factory = HasherFactory::default();
    let nt_hash = ntowf_v1(&factory, "Password");

    let mut hmac = factory.build_keyed("md5", &nt_hash).unwrap();
    // Uppercase user name followed by the domain, fed in two pieces
    hmac.update(&utf16le("USER"));
    let partial = hmac.digest();
    hmac.update(&utf16le("Domain"));

    assert_ne!(partial, hmac.digest());
    assert_eq!(
        hex::encode(hmac.digest()),
        "0c868a403bfd7a93a3001ef22ef02e3f"
    );
}

#[test]
fn ntlmv1_response() {
    init_tracing();
    let nt_hash = ntowf_v1(&HasherFactory::default(), "Password");

    for backend in [DesBackend::RustCrypto, DesBackend::Legacy] {
        let engine = DesEngine::new(backend);
        assert_eq!(
            hex::encode(desl(&engine, &nt_hash, &SERVER_CHALLENGE)),
            "67c43011f30298a2ad35ece64f16331c44bdbed927841f94"
        );
    }
}
