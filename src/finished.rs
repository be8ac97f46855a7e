//! Finished message computation and constant-time verification.
//!
//! # References
//!
//! * [RFC 8446 Section 4.4.4](https://datatracker.ietf.org/doc/html/rfc8446#section-4.4.4)

use crate::fmt::{error, warn_log as warn};
use crate::hash::HashAlg;
use crate::label::hkdf_expand_label;
use crate::secret::FinishedKey;
use crate::{Error, Vec};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384};
use subtle::ConstantTimeEq;

/// Computes and verifies Finished messages.
///
/// This is a namespace for free functions, not a value; a `Finished` holds no state of its own.
pub struct Finished;

impl Finished {
    /// `finished_key = HKDF-Expand-Label(BaseKey, "finished", "", Hash.length)`.
    ///
    /// `BaseKey` is the relevant handshake traffic secret: the side sending its own Finished
    /// uses its own handshake traffic secret, and verifies the peer's Finished with the peer's.
    pub fn key(hash: HashAlg, base_key: &[u8]) -> Result<FinishedKey, Error> {
        let mut out = vec![0u8; hash.hlen()];
        hkdf_expand_label(hash, base_key, b"finished", &[], &mut out)?;
        Ok(FinishedKey::new(out))
    }

    /// `verify_data = HMAC(finished_key, Transcript-Hash(handshake_context))`.
    ///
    /// `transcript_snapshot` is the transcript hash over the relevant handshake context (see
    /// module docs); the caller takes this snapshot itself, this function never touches the
    /// running transcript state.
    pub fn mac(
        hash: HashAlg,
        finished_key: &FinishedKey,
        transcript_snapshot: &[u8],
    ) -> Result<Vec<u8>, Error> {
        match hash {
            HashAlg::Sha256 => {
                let mut mac = Hmac::<Sha256>::new_from_slice(finished_key.as_bytes())
                    .map_err(|_| {
                        error!("finished: HMAC-SHA256 rejected the finished_key length");
                        Error::HmacFailure
                    })?;
                mac.update(transcript_snapshot);
                Ok(mac.finalize().into_bytes().to_vec())
            }
            HashAlg::Sha384 => {
                let mut mac = Hmac::<Sha384>::new_from_slice(finished_key.as_bytes())
                    .map_err(|_| {
                        error!("finished: HMAC-SHA384 rejected the finished_key length");
                        Error::HmacFailure
                    })?;
                mac.update(transcript_snapshot);
                Ok(mac.finalize().into_bytes().to_vec())
            }
        }
    }

    /// Recompute `verify_data` from `transcript_snapshot` and compare it to `wire` in constant
    /// time.
    ///
    /// Recipients of Finished messages MUST verify that the contents are correct; on mismatch the
    /// caller should terminate the connection with a `decrypt_error` alert (see
    /// [`crate::FatalAlert`]).
    pub fn verify(
        hash: HashAlg,
        finished_key: &FinishedKey,
        transcript_snapshot: &[u8],
        wire: &[u8],
    ) -> Result<(), Error> {
        let expected = Self::mac(hash, finished_key, transcript_snapshot)?;

        // lengths of both sides are public (Hlen), so branching on length alone leaks nothing
        // that the hash algorithm hasn't already revealed.
        if expected.len() != wire.len() {
            warn!("finished: verify_data length mismatch");
            return Err(Error::BadFinished);
        }

        if bool::from(expected.as_slice().ct_eq(wire)) {
            Ok(())
        } else {
            warn!("finished: verify_data did not match");
            Err(Error::BadFinished)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // RFC 8448 section 3, SHA-256.
    const SERVER_HS_TRAFFIC_SECRET: [u8; 32] =
        hex!("b67b7d690cc16c4e75e54213cb2d37b4e9c912bcded9105d42befd59d391ad38");

    #[test]
    fn mac_then_verify_round_trips() {
        let key = Finished::key(HashAlg::Sha256, &SERVER_HS_TRAFFIC_SECRET).unwrap();
        let transcript = [0xAAu8; 32];
        let verify_data = Finished::mac(HashAlg::Sha256, &key, &transcript).unwrap();
        assert!(Finished::verify(HashAlg::Sha256, &key, &transcript, &verify_data).is_ok());
    }

    #[test]
    fn verify_rejects_tampered_verify_data() {
        let key = Finished::key(HashAlg::Sha256, &SERVER_HS_TRAFFIC_SECRET).unwrap();
        let transcript = [0xAAu8; 32];
        let mut verify_data = Finished::mac(HashAlg::Sha256, &key, &transcript).unwrap();
        verify_data[0] ^= 0x01;
        assert_eq!(
            Finished::verify(HashAlg::Sha256, &key, &transcript, &verify_data),
            Err(Error::BadFinished)
        );
    }

    #[test]
    fn verify_rejects_wrong_length() {
        let key = Finished::key(HashAlg::Sha256, &SERVER_HS_TRAFFIC_SECRET).unwrap();
        let transcript = [0xAAu8; 32];
        assert_eq!(
            Finished::verify(HashAlg::Sha256, &key, &transcript, &[0u8; 31]),
            Err(Error::BadFinished)
        );
    }

    #[test]
    fn finished_key_is_hlen_bytes() {
        assert_eq!(
            Finished::key(HashAlg::Sha256, &SERVER_HS_TRAFFIC_SECRET)
                .unwrap()
                .as_bytes()
                .len(),
            32
        );
    }
}
