//! TLS 1.3 key schedule state machine.
//!
//! # References
//!
//! * [RFC 8446 Section 7.1](https://datatracker.ietf.org/doc/html/rfc8446#section-7.1)

use crate::fmt::debug;
use crate::hash::HashAlg;
use crate::hkdf;
use crate::label::derive_secret as derive_secret_label;
use crate::label::hkdf_expand_label;
use crate::secret::{Secret, TrafficSecret};
use crate::{Error, Vec};

/// Stage of the key schedule.
///
/// Advances monotonically: `Initial -> Early -> Handshake -> Application`. There are no backward
/// edges; attempting to advance out of order returns [`Error::WrongStage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// No secret has been derived yet.
    Initial,
    /// `Early Secret` has been derived.
    Early,
    /// `Handshake Secret` has been derived; `client`/`server_handshake_traffic_secret` are
    /// available.
    Handshake,
    /// `Master Secret` has been derived; `client`/`server_application_traffic_secret` are
    /// available.
    Application,
}

/// The two handshake traffic secrets produced by [`KeySchedule::derive_handshake`].
pub struct HandshakeTrafficSecrets {
    /// `client_handshake_traffic_secret`.
    pub client: TrafficSecret,
    /// `server_handshake_traffic_secret`.
    pub server: TrafficSecret,
}

/// The two application traffic secrets produced by [`KeySchedule::derive_application`].
pub struct ApplicationTrafficSecrets {
    /// `client_application_traffic_secret`.
    pub client: TrafficSecret,
    /// `server_application_traffic_secret`.
    pub server: TrafficSecret,
}

/// A record-protection key and IV derived from a traffic secret.
///
/// # References
///
/// * [RFC 8446 Section 7.3](https://datatracker.ietf.org/doc/html/rfc8446#section-7.3)
pub struct TrafficKeys {
    /// `[sender]_write_key`.
    pub key: Vec<u8>,
    /// `[sender]_write_iv`.
    pub iv: Vec<u8>,
}

/// Owns the rolling `(extract_secret, derive_secret)` pair and advances through the stages of
/// [RFC 8446 section 7.1](https://datatracker.ietf.org/doc/html/rfc8446#section-7.1).
///
/// Binder keys, early traffic secrets, and the exporter/resumption master secrets are not
/// derived; this schedule only produces what a non-PSK, non-0-RTT 1-RTT handshake needs.
pub struct KeySchedule {
    hash: HashAlg,
    stage: Stage,
    extract_secret: Secret,
    derive_secret: Secret,
}

impl KeySchedule {
    /// Create a key schedule for the given cipher suite hash, in [`Stage::Initial`].
    pub fn new(hash: HashAlg) -> Self {
        let zero = vec![0u8; hash.hlen()];
        Self {
            hash,
            stage: Stage::Initial,
            extract_secret: Secret::new(zero.clone()),
            derive_secret: Secret::new(zero),
        }
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn require_stage(&self, expected: Stage) -> Result<(), Error> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(Error::WrongStage)
        }
    }

    /// Derive `Early Secret` from a zero-length PSK.
    ///
    /// # References
    ///
    /// * [RFC 8446 Section 7.1](https://datatracker.ietf.org/doc/html/rfc8446#section-7.1)
    ///
    /// Requires [`Stage::Initial`]. PSK-based early traffic and binder keys are not derived here;
    /// this schedule does not support resumption or external PSKs.
    pub fn derive_early(&mut self) -> Result<(), Error> {
        self.require_stage(Stage::Initial)?;

        let zero = vec![0u8; self.hash.hlen()];
        let early_secret = hkdf::extract(self.hash, &zero, &zero);
        let derived = derive_secret_label(self.hash, &early_secret, b"derived", &self.hash.empty_hash())?;

        self.extract_secret = Secret::new(early_secret);
        self.derive_secret = Secret::new(derived);
        self.stage = Stage::Early;
        debug!("key schedule: derived Early Secret");
        Ok(())
    }

    /// Derive `Handshake Secret` and the two handshake traffic secrets.
    ///
    /// Requires [`Stage::Early`]. `ecdhe` is the (EC)DHE shared secret from the negotiated key
    /// exchange. `transcript_snapshot` must be the transcript hash over ClientHello..ServerHello.
    pub fn derive_handshake(
        &mut self,
        ecdhe: &[u8],
        transcript_snapshot: &[u8],
    ) -> Result<HandshakeTrafficSecrets, Error> {
        self.require_stage(Stage::Early)?;

        let handshake_secret = hkdf::extract(self.hash, self.derive_secret.as_bytes(), ecdhe);
        let client =
            derive_secret_label(self.hash, &handshake_secret, b"c hs traffic", transcript_snapshot)?;
        let server =
            derive_secret_label(self.hash, &handshake_secret, b"s hs traffic", transcript_snapshot)?;
        let derived = derive_secret_label(self.hash, &handshake_secret, b"derived", &self.hash.empty_hash())?;

        self.extract_secret = Secret::new(handshake_secret);
        self.derive_secret = Secret::new(derived);
        self.stage = Stage::Handshake;
        debug!("key schedule: derived Handshake Secret");

        Ok(HandshakeTrafficSecrets {
            client: TrafficSecret::new(client),
            server: TrafficSecret::new(server),
        })
    }

    /// Derive `Master Secret` and the two application traffic secrets.
    ///
    /// Requires [`Stage::Handshake`]. `transcript_snapshot` must be the transcript hash over
    /// ClientHello..server Finished.
    pub fn derive_application(
        &mut self,
        transcript_snapshot: &[u8],
    ) -> Result<ApplicationTrafficSecrets, Error> {
        self.require_stage(Stage::Handshake)?;

        let zero = vec![0u8; self.hash.hlen()];
        let master_secret = hkdf::extract(self.hash, self.derive_secret.as_bytes(), &zero);
        let client =
            derive_secret_label(self.hash, &master_secret, b"c ap traffic", transcript_snapshot)?;
        let server =
            derive_secret_label(self.hash, &master_secret, b"s ap traffic", transcript_snapshot)?;

        self.extract_secret = Secret::new(master_secret);
        self.stage = Stage::Application;
        debug!("key schedule: derived Master Secret");

        Ok(ApplicationTrafficSecrets {
            client: TrafficSecret::new(client),
            server: TrafficSecret::new(server),
        })
    }
}

/// Derive a record-protection key and IV from a traffic secret.
///
/// # References
///
/// * [RFC 8446 Section 7.3](https://datatracker.ietf.org/doc/html/rfc8446#section-7.3)
///
/// A pure projection: holds no state, does not touch the key schedule.
pub fn derive_traffic_keys(
    hash: HashAlg,
    traffic_secret: &[u8],
    key_len: usize,
    iv_len: usize,
) -> Result<TrafficKeys, Error> {
    let mut key = vec![0u8; key_len];
    hkdf_expand_label(hash, traffic_secret, b"key", &[], &mut key)?;
    let mut iv = vec![0u8; iv_len];
    hkdf_expand_label(hash, traffic_secret, b"iv", &[], &mut iv)?;
    Ok(TrafficKeys { key, iv })
}
