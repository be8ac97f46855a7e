//! Zeroizing wrappers around key-schedule secrets.
//!
//! Secrets are heap-allocated, to support both `Hlen = 32` and `Hlen = 48` from the same code
//! path, so they need an explicit zeroize instead of relying on stack unwinding to scrub them.

use crate::Vec;
use zeroize::Zeroizing;

/// A secret produced at one stage of the key schedule (Early Secret, Handshake Secret, Master
/// Secret, or one of the intermediate "derived" PRKs).
///
/// Zeroized on drop.
#[derive(Clone)]
pub struct Secret(Zeroizing<Vec<u8>>);

impl Secret {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// The raw secret bytes, exactly `Hlen` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A `client_..._traffic_secret` or `server_..._traffic_secret`, used to derive record protection
/// keys and, after an update, the next generation of itself.
///
/// Zeroized on drop.
#[derive(Clone)]
pub struct TrafficSecret(Zeroizing<Vec<u8>>);

impl TrafficSecret {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// The raw secret bytes, exactly `Hlen` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A Finished message's `finished_key`, used once to compute or verify a single `verify_data`.
///
/// Zeroized on drop.
pub struct FinishedKey(Zeroizing<Vec<u8>>);

impl FinishedKey {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// The raw key bytes, exactly `Hlen` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_exposes_its_bytes() {
        let s = Secret::new(vec![1, 2, 3]);
        assert_eq!(s.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn traffic_secret_clone_is_independent() {
        let a = TrafficSecret::new(vec![9; 32]);
        let b = a.clone();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }
}
