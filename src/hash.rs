//! The hash algorithm negotiated by the cipher suite, and the handful of values it fixes.
//!
//! # References
//!
//! * [RFC 8446 Section 7.1](https://datatracker.ietf.org/doc/html/rfc8446#section-7.1)

use sha2::{Digest, Sha256, Sha384};

/// The HMAC hash negotiated for a cipher suite.
///
/// Fixes `Hlen`, the length in bytes of every secret, traffic secret, and Finished key this
/// crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HashAlg {
    /// SHA-256, `Hlen = 32`.
    Sha256,
    /// SHA-384, `Hlen = 48`.
    Sha384,
}

impl HashAlg {
    /// `Hlen`: the output length of the negotiated hash, in bytes.
    pub const fn hlen(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
        }
    }

    /// `Hash("")`, produced by snapshotting a freshly initialized hash rather than hardcoded, so
    /// a transposition typo in a literal constant can never silently diverge from the real
    /// algorithm.
    pub fn empty_hash(self) -> crate::Vec<u8> {
        match self {
            Self::Sha256 => Sha256::new().finalize().to_vec(),
            Self::Sha384 => Sha384::new().finalize().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hlen_matches_rfc() {
        assert_eq!(HashAlg::Sha256.hlen(), 32);
        assert_eq!(HashAlg::Sha384.hlen(), 48);
    }

    #[test]
    fn empty_hash_matches_known_constant() {
        // e3b0c442...b855 is the well known SHA-256 empty-string digest.
        let got = HashAlg::Sha256.empty_hash();
        assert_eq!(got[0], 0xe3);
        assert_eq!(got[31], 0x55);
        assert_eq!(got.len(), 32);
        assert_eq!(HashAlg::Sha384.empty_hash().len(), 48);
    }
}
