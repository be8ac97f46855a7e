//! Conformance against RFC 8448 section 3, "Simple 1-RTT Handshake"
//! (SHA-256 / X25519 / `TLS_AES_128_GCM_SHA256`).

use hex_literal::hex;
use tls13_key_schedule::{derive_traffic_keys, Finished, HashAlg, KeySchedule};

const ECDHE: [u8; 32] =
    hex!("8bd4054fb55b9d63fdfbacf9f04b9f0d35e6d63f537563efd46272900f89492d");

// Transcript hash over ClientHello..ServerHello from the RFC 8448 appendix.
const TRANSCRIPT_AFTER_SERVER_HELLO: [u8; 32] =
    hex!("860c06edc07858ee8e78f0e7428c58edd6b43f2ca3e6e95f02ed063cf0e1cad8");

// Early Secret and the "derived" intermediate (E2E-1, E2E-2) are not exposed by the public API,
// only traffic secrets are; those two are covered byte-exactly by the key schedule's own
// `#[cfg(test)]` module.

#[test]
fn handshake_traffic_secrets_match_rfc8448() {
    let mut ks = KeySchedule::new(HashAlg::Sha256);
    ks.derive_early().unwrap();
    let secrets = ks
        .derive_handshake(&ECDHE, &TRANSCRIPT_AFTER_SERVER_HELLO)
        .unwrap();

    assert_eq!(
        secrets.client.as_bytes(),
        hex!("b3eddb126e067f35a780b3abf45e2d8f3b1a950738f52e9600746a0e27a55a21")
    );
    assert_eq!(
        secrets.server.as_bytes(),
        hex!("b67b7d690cc16c4e75e54213cb2d37b4e9c912bcded9105d42befd59d391ad38")
    );
}

#[test]
fn server_write_key_and_iv_match_rfc8448() {
    let mut ks = KeySchedule::new(HashAlg::Sha256);
    ks.derive_early().unwrap();
    let secrets = ks
        .derive_handshake(&ECDHE, &TRANSCRIPT_AFTER_SERVER_HELLO)
        .unwrap();

    let keys = derive_traffic_keys(HashAlg::Sha256, secrets.server.as_bytes(), 16, 12).unwrap();
    assert_eq!(keys.key, hex!("3fce516009c21727d0f2e4e86ee403bc"));
    assert_eq!(keys.iv, hex!("5d313eb2671276ee13000b30"));
}

#[test]
fn server_finished_round_trips_against_server_handshake_traffic_secret() {
    let mut ks = KeySchedule::new(HashAlg::Sha256);
    ks.derive_early().unwrap();
    let secrets = ks
        .derive_handshake(&ECDHE, &TRANSCRIPT_AFTER_SERVER_HELLO)
        .unwrap();

    // handshake context through server CertificateVerify; any fixed transcript works to exercise
    // mac/verify symmetry since the reference vector is not reproduced here.
    let handshake_context = [0x11u8; 32];

    let key = Finished::key(HashAlg::Sha256, secrets.server.as_bytes()).unwrap();
    let verify_data = Finished::mac(HashAlg::Sha256, &key, &handshake_context).unwrap();
    assert_eq!(verify_data.len(), 32);
    assert!(Finished::verify(HashAlg::Sha256, &key, &handshake_context, &verify_data).is_ok());

    let mut tampered = verify_data.clone();
    tampered[31] ^= 0x80;
    assert!(Finished::verify(HashAlg::Sha256, &key, &handshake_context, &tampered).is_err());
}

#[test]
fn application_traffic_secrets_are_hlen_and_distinct() {
    let mut ks = KeySchedule::new(HashAlg::Sha256);
    ks.derive_early().unwrap();
    ks.derive_handshake(&ECDHE, &TRANSCRIPT_AFTER_SERVER_HELLO)
        .unwrap();

    let transcript_after_server_finished = [0x22u8; 32];
    let app = ks
        .derive_application(&transcript_after_server_finished)
        .unwrap();

    assert_eq!(app.client.as_bytes().len(), 32);
    assert_eq!(app.server.as_bytes().len(), 32);
    assert_ne!(app.client.as_bytes(), app.server.as_bytes());
}

#[test]
fn sha384_cipher_suite_produces_48_byte_secrets() {
    let mut ks = KeySchedule::new(HashAlg::Sha384);
    ks.derive_early().unwrap();
    let secrets = ks.derive_handshake(&ECDHE, &[0u8; 48]).unwrap();
    assert_eq!(secrets.client.as_bytes().len(), 48);
    assert_eq!(secrets.server.as_bytes().len(), 48);
}
