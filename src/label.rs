//! TLS 1.3 `HKDF-Expand-Label` and `Derive-Secret`.
//!
//! # References
//!
//! * [RFC 8446 Section 7.1](https://datatracker.ietf.org/doc/html/rfc8446#section-7.1)

use crate::hash::HashAlg;
use crate::hkdf;
use crate::{Error, Vec};

const LABEL_PREFIX: &[u8] = b"tls13 ";

/// Serializes the RFC 8446 section 7.1 `HkdfLabel` structure:
///
/// ```text
/// struct {
///     uint16 length = Length;
///     opaque label<7..255> = "tls13 " + Label;
///     opaque context<0..255> = Context;
/// } HkdfLabel;
/// ```
fn hkdf_label(length: u16, label: &[u8], context: &[u8]) -> Result<Vec<u8>, Error> {
    let label_len = LABEL_PREFIX.len() + label.len();
    if !(7..=255).contains(&label_len) || context.len() > 255 {
        return Err(Error::InvalidLength);
    }

    let mut out = Vec::with_capacity(2 + 1 + label_len + 1 + context.len());
    out.extend_from_slice(&length.to_be_bytes());
    out.push(label_len as u8);
    out.extend_from_slice(LABEL_PREFIX);
    out.extend_from_slice(label);
    out.push(context.len() as u8);
    out.extend_from_slice(context);
    Ok(out)
}

/// `HKDF-Expand-Label(Secret, Label, Context, Length) = HKDF-Expand(Secret, HkdfLabel, Length)`.
///
/// `secret` must be exactly `hash.hlen()` bytes (it is always a PRK produced by this crate's own
/// `HKDF-Extract`, never caller-supplied, so this is an invariant rather than an input to
/// validate defensively).
pub(crate) fn hkdf_expand_label(
    hash: HashAlg,
    secret: &[u8],
    label: &[u8],
    context: &[u8],
    out: &mut [u8],
) -> Result<(), Error> {
    let length = u16::try_from(out.len()).map_err(|_| Error::InvalidLength)?;
    let info = hkdf_label(length, label, context)?;
    hkdf::expand(hash, secret, &info, out)
}

/// `Derive-Secret(Secret, Label, Messages) = HKDF-Expand-Label(Secret, Label,
/// Transcript-Hash(Messages), Hash.length)`.
pub(crate) fn derive_secret(
    hash: HashAlg,
    secret: &[u8],
    label: &[u8],
    transcript_hash: &[u8],
) -> Result<Vec<u8>, Error> {
    let mut out = vec![0u8; hash.hlen()];
    hkdf_expand_label(hash, secret, label, transcript_hash, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hkdf_label_matches_rfc8446_struct() {
        // length=32, label="tls13 derived" (13 bytes), context="" (0 bytes)
        let got = hkdf_label(32, b"derived", b"").unwrap();
        let mut want = vec![0x00, 0x20, 0x0d];
        want.extend_from_slice(b"tls13 derived");
        want.push(0x00);
        assert_eq!(got, want);
    }

    #[test]
    fn rejects_oversized_context() {
        let context = vec![0u8; 256];
        assert_eq!(
            hkdf_label(32, b"derived", &context),
            Err(Error::InvalidLength)
        );
    }

    #[test]
    fn rejects_label_too_long() {
        let label = vec![0u8; 250];
        assert_eq!(hkdf_label(32, &label, b""), Err(Error::InvalidLength));
    }
}
