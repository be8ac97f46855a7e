#![no_main]
use libfuzzer_sys::fuzz_target;
use tls13_key_schedule::{derive_traffic_keys, Finished, HashAlg, KeySchedule, TranscriptHash};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let hash = if data[0] & 1 == 0 {
        HashAlg::Sha256
    } else {
        HashAlg::Sha384
    };
    let rest = &data[1..];

    // Arbitrary interleaving of update/snapshot must never panic, and a snapshot must never
    // disturb the running digest.
    let mut transcript = TranscriptHash::new(hash);
    for chunk in rest.chunks(7) {
        transcript.update(chunk);
        let a = transcript.snapshot();
        let b = transcript.snapshot();
        assert_eq!(a, b);
    }

    // Exercise HkdfLabel construction (through derive_handshake/derive_traffic_keys/Finished::key)
    // with arbitrary ECDHE/transcript/verify_data bytes. `WrongStage` never triggers here since
    // calls are made in order; every other error is a legitimate rejection, not a bug, but none of
    // this may ever panic regardless of input length.
    let mut ks = KeySchedule::new(hash);
    ks.derive_early().unwrap();
    if let Ok(secrets) = ks.derive_handshake(rest, &transcript.snapshot()) {
        let _ = derive_traffic_keys(hash, secrets.server.as_bytes(), 16, 12);

        if let Ok(key) = Finished::key(hash, secrets.server.as_bytes()) {
            let verify_data = Finished::mac(hash, &key, &transcript.snapshot()).unwrap();
            let _ = Finished::verify(hash, &key, &transcript.snapshot(), rest);
            let _ = Finished::verify(hash, &key, &transcript.snapshot(), &verify_data);
        }

        let _ = ks.derive_application(&transcript.snapshot());
    }
});
