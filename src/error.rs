//! Error kinds surfaced by this crate.
//!
//! # References
//!
//! * [RFC 8446 Section 6](https://datatracker.ietf.org/doc/html/rfc8446#section-6)

use thiserror::Error;

/// Errors produced by the key schedule, HKDF primitive, and Finished engine.
///
/// None of these are recoverable locally: after any error the only valid operation on the
/// connection is teardown (see [`crate::alert::FatalAlert`] for the alert a caller should send).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// A caller-supplied buffer had the wrong length, or an `HKDF-Expand` length exceeded
    /// `255 * Hlen`.
    #[error("invalid length")]
    InvalidLength,
    /// A stage transition was requested out of order.
    #[error("key schedule stage transition requested out of order")]
    WrongStage,
    /// A lower-level HMAC primitive rejected its inputs (e.g. a key length it does not accept).
    #[error("HMAC primitive failure")]
    HmacFailure,
    /// Constant-time comparison of a Finished `verify_data` failed.
    #[error("Finished verify_data mismatch")]
    BadFinished,
}
