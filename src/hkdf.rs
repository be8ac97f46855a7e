//! HKDF-Extract and HKDF-Expand over a pluggable HMAC hash.
//!
//! # References
//!
//! * [RFC 5869](https://datatracker.ietf.org/doc/html/rfc5869)

use crate::hash::HashAlg;
use crate::{Error, Vec};
use hkdf::Hkdf;
use sha2::{Sha256, Sha384};

/// `HKDF-Extract(salt, IKM) -> PRK`.
///
/// A zero-length `salt` is treated as `Hlen` zero bytes, per RFC 5869 section 2.2 (the `hkdf`
/// crate does this internally when `salt` is `None`/empty).
pub(crate) fn extract(hash: HashAlg, salt: &[u8], ikm: &[u8]) -> Vec<u8> {
    let salt = if salt.is_empty() { None } else { Some(salt) };
    match hash {
        HashAlg::Sha256 => Hkdf::<Sha256>::extract(salt, ikm).0.to_vec(),
        HashAlg::Sha384 => Hkdf::<Sha384>::extract(salt, ikm).0.to_vec(),
    }
}

/// `HKDF-Expand(PRK, info, L) -> OKM`.
///
/// `L` is `out.len()`. Returns [`Error::InvalidLength`] if `L > 255 * Hlen` or `prk.len() !=
/// Hlen`, surfacing the `hkdf` crate's own `InvalidLength`/`InvalidPrkLength` failures as a
/// recoverable `Result` rather than panicking.
pub(crate) fn expand(hash: HashAlg, prk: &[u8], info: &[u8], out: &mut [u8]) -> Result<(), Error> {
    match hash {
        HashAlg::Sha256 => {
            let hkdf = Hkdf::<Sha256>::from_prk(prk).map_err(|_| Error::InvalidLength)?;
            hkdf.expand(info, out).map_err(|_| Error::InvalidLength)
        }
        HashAlg::Sha384 => {
            let hkdf = Hkdf::<Sha384>::from_prk(prk).map_err(|_| Error::InvalidLength)?;
            hkdf.expand(info, out).map_err(|_| Error::InvalidLength)
        }
    }
}
