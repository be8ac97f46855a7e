//! TLS 1.3 key schedule, transcript hashing, and Finished verification.
//!
//! This crate implements the secret-derivation chain of [RFC 8446 Section
//! 7.1](https://datatracker.ietf.org/doc/html/rfc8446#section-7.1) (Early
//! Secret through Master Secret, `HKDF-Expand-Label`, `Derive-Secret`), an
//! incremental transcript hash with non-disturbing snapshots, and Finished
//! message computation/verification per [Section
//! 4.4.4](https://datatracker.ietf.org/doc/html/rfc8446#section-4.4.4).
//!
//! It does not parse handshake messages, negotiate a cipher suite, perform a
//! key exchange, or touch a socket; callers own the record layer and hand
//! this crate the bytes it needs (shared secrets, transcript messages,
//! `verify_data`) and get back secrets and traffic keys.
//!
//! # Feature Flags
//!
//! * `std` (default): use `std::vec::Vec`. Implies `alloc`.
//! * `alloc`: use `alloc::vec::Vec` for `no_std` targets. One of `std` or
//!   `alloc` is required.
//! * `defmt`: derive `defmt::Format` on public types and log through
//!   `defmt`.
//! * `log`: log through the `log` crate.
#![cfg_attr(docsrs, feature(doc_cfg), feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
#[macro_use]
extern crate alloc;

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("tls13-key-schedule requires the `std` or `alloc` feature");

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

mod alert;
mod cipher_suite;
mod error;
mod finished;
mod hash;
mod hkdf;
mod key_schedule;
mod label;
mod secret;
mod transcript;

#[cfg(feature = "std")]
pub(crate) use std::vec::Vec;
#[cfg(all(feature = "alloc", not(feature = "std")))]
pub(crate) use alloc::vec::Vec;

pub use alert::FatalAlert;
pub use cipher_suite::CipherSuite;
pub use error::Error;
pub use finished::Finished;
pub use hash::HashAlg;
pub use key_schedule::{
    derive_traffic_keys, ApplicationTrafficSecrets, HandshakeTrafficSecrets, KeySchedule, Stage,
    TrafficKeys,
};
pub use transcript::TranscriptHash;
pub use secret::{FinishedKey, Secret, TrafficSecret};
