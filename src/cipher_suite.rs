//! TLS 1.3 cipher suites, and the hash/key/IV lengths they fix for the key schedule.
//!
//! # References
//!
//! * [RFC 8446 Appendix B.4](https://datatracker.ietf.org/doc/html/rfc8446#appendix-b.4)
//! * [RFC 8446 Section 9.1](https://datatracker.ietf.org/doc/html/rfc8446#section-9.1)

use crate::hash::HashAlg;

/// A TLS 1.3 cipher suite.
///
/// Only the hash and AEAD lengths this crate's key schedule and traffic-key derivation need are
/// exposed; negotiating a suite and parsing its wire value belong to the ClientHello/ServerHello
/// parsers, which live outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum CipherSuite {
    /// AES-128-GCM with SHA-256, the suite exercised by the RFC 8448 test vectors.
    TLS_AES_128_GCM_SHA256,
    /// AES-256-GCM with SHA-384.
    TLS_AES_256_GCM_SHA384,
    /// ChaCha20-Poly1305 with SHA-256.
    TLS_CHACHA20_POLY1305_SHA256,
}

impl CipherSuite {
    /// The HMAC hash this suite's key schedule and transcript hash run on.
    pub const fn hash(self) -> HashAlg {
        match self {
            Self::TLS_AES_128_GCM_SHA256 => HashAlg::Sha256,
            Self::TLS_AES_256_GCM_SHA384 => HashAlg::Sha384,
            Self::TLS_CHACHA20_POLY1305_SHA256 => HashAlg::Sha256,
        }
    }

    /// AEAD key length in bytes, `[sender]_write_key`'s length.
    pub const fn key_len(self) -> usize {
        match self {
            Self::TLS_AES_128_GCM_SHA256 => 16,
            Self::TLS_AES_256_GCM_SHA384 => 32,
            Self::TLS_CHACHA20_POLY1305_SHA256 => 32,
        }
    }

    /// AEAD IV length in bytes, `[sender]_write_iv`'s length. Fixed at 12 for every TLS 1.3 AEAD
    /// registered in RFC 8446 section 5.3.
    pub const fn iv_len(self) -> usize {
        12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha384_suite_has_48_byte_hash() {
        assert_eq!(
            CipherSuite::TLS_AES_256_GCM_SHA384.hash().hlen(),
            HashAlg::Sha384.hlen()
        );
    }

    #[test]
    fn key_len_matches_every_suite() {
        assert_eq!(CipherSuite::TLS_AES_128_GCM_SHA256.key_len(), 16);
        assert_eq!(CipherSuite::TLS_AES_256_GCM_SHA384.key_len(), 32);
        assert_eq!(CipherSuite::TLS_CHACHA20_POLY1305_SHA256.key_len(), 32);
    }
}
