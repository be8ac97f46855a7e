//! The subset of RFC 8446 alerts this core ever has occasion to raise.
//!
//! Record-layer alert delivery (actually sending the two-byte alert message) is an external
//! collaborator; this module only answers "which alert" for a given [`Error`](crate::Error).

use crate::Error;

/// Alert description for a fatal alert raised by this core.
///
/// # References
///
/// * [RFC 8446 Section 6.2](https://datatracker.ietf.org/doc/html/rfc8446#section-6.2)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FatalAlert {
    /// A handshake (not record layer) cryptographic operation failed, including being unable to
    /// correctly verify a Finished message.
    DecryptError = 51,
    /// An internal error unrelated to the peer or the correctness of the protocol.
    InternalError = 80,
}

impl From<FatalAlert> for u8 {
    #[inline]
    fn from(alert: FatalAlert) -> Self {
        alert as u8
    }
}

impl From<Error> for FatalAlert {
    /// `BadFinished` maps to `decrypt_error`; every other kind is internal.
    fn from(err: Error) -> Self {
        match err {
            Error::BadFinished => Self::DecryptError,
            Error::InvalidLength | Error::WrongStage | Error::HmacFailure => Self::InternalError,
        }
    }
}
