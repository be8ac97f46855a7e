//! Logging macro shim.
//!
//! Mirrors the dual `defmt`/`log` facade used across the sibling crates in this workspace, so
//! this crate stays usable from `no_std` firmware as well as hosted binaries. Exactly one of
//! `defmt` or `log` should be enabled; with neither, the macros compile away to nothing.

#![allow(unused_macros, unused_imports)]

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($($arg:tt)*) => { defmt::trace!($($arg)*) };
}
#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}
#[cfg(feature = "defmt")]
macro_rules! warn_log {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}
#[cfg(feature = "defmt")]
macro_rules! error {
    ($($arg:tt)*) => { defmt::error!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}
#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! warn_log {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}
#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! error {
    ($($arg:tt)*) => { log::error!($($arg)*) };
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn_log {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! error {
    ($($arg:tt)*) => {};
}

pub(crate) use debug;
pub(crate) use error;
pub(crate) use trace;
pub(crate) use warn_log;
