//! Incremental transcript hash with non-disturbing snapshots.
//!
//! # References
//!
//! * [RFC 8446 Section 4.4.1](https://datatracker.ietf.org/doc/html/rfc8446#section-4.4.1)

use crate::fmt::trace;
use crate::hash::HashAlg;
use crate::Vec;
use sha2::{Digest, Sha256, Sha384};

enum Inner {
    Sha256(Sha256),
    Sha384(Sha384),
}

/// Many of the cryptographic computations in TLS 1.3 use a transcript hash: the hash of the
/// concatenation of every handshake message sent so far (including the handshake header, never
/// the record layer header).
///
/// Messages are fed in with [`update`](Self::update) one at a time as they are sent or received.
/// [`snapshot`](Self::snapshot) reads the current digest without disturbing it, so the same
/// running state can be snapshotted before and after a message that needs both (for example the
/// ServerHello, whose arrival both reads the handshake-secret transcript and extends it).
pub struct TranscriptHash {
    inner: Inner,
}

impl TranscriptHash {
    /// Start a new transcript hash for the given cipher suite's hash algorithm.
    pub fn new(hash: HashAlg) -> Self {
        let inner = match hash {
            HashAlg::Sha256 => Inner::Sha256(Sha256::new()),
            HashAlg::Sha384 => Inner::Sha384(Sha384::new()),
        };
        Self { inner }
    }

    /// The hash algorithm this transcript is running.
    pub fn hash_alg(&self) -> HashAlg {
        match self.inner {
            Inner::Sha256(_) => HashAlg::Sha256,
            Inner::Sha384(_) => HashAlg::Sha384,
        }
    }

    /// Feed a handshake message (header included, record layer header excluded) into the
    /// transcript.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            Inner::Sha256(h) => h.update(data),
            Inner::Sha384(h) => h.update(data),
        }
    }

    /// Read the current transcript hash without consuming the running state, so later calls to
    /// [`update`](Self::update) continue from where this left off.
    pub fn snapshot(&self) -> Vec<u8> {
        match &self.inner {
            Inner::Sha256(h) => h.clone().finalize().to_vec(),
            Inner::Sha384(h) => h.clone().finalize().to_vec(),
        }
    }

    /// Consume the transcript hash, for callers that want an explicit teardown point rather than
    /// relying on scope exit.
    ///
    /// The running digest is not secret, so there is nothing to zeroize here; this exists for
    /// symmetry with [`update`](Self::update) and [`snapshot`](Self::snapshot).
    pub fn destroy(self) {}

    /// Reset the transcript to start hashing a fresh message sequence, for a HelloRetryRequest.
    ///
    /// # References
    ///
    /// * [RFC 8446 Section 4.4.1](https://datatracker.ietf.org/doc/html/rfc8446#section-4.4.1)
    ///
    /// When a HelloRetryRequest is sent, the transcript is synthesized from a
    /// `message_hash` handshake message wrapping the hash of the original ClientHello, rather
    /// than the literal ClientHello bytes. Computing that `message_hash` wrapper is the record
    /// layer's responsibility; this only resets the running digest so the caller can feed it the
    /// synthesized message followed by HelloRetryRequest onward.
    pub fn reset_for_hrr(&mut self) {
        trace!("transcript: reset for HelloRetryRequest");
        self.inner = match self.inner {
            Inner::Sha256(_) => Inner::Sha256(Sha256::new()),
            Inner::Sha384(_) => Inner::Sha384(Sha384::new()),
        };
    }
}
