//! SRP server session.
//!
//! Drives the server half of the handshake in two strictly ordered steps:
//!
//! 1. [`step1`](SrpServerSession::step1) consumes the stored registration
//!    data (identity, salt, verifier) and produces the public value B for
//!    the challenge.
//! 2. [`step2`](SrpServerSession::step2) validates the client's public value
//!    A and evidence message M1, and on success finalizes the shared key and
//!    returns the server evidence message M2.
//!
//! An evidence mismatch is the authentication-failure path: it reports only
//! a generic bad-credentials error so a probing client learns nothing about
//! which quantity diverged.

use std::time::Duration;

use digest::Digest;
use num_bigint::BigUint;
use num_traits::Zero;
use subtle::ConstantTimeEq;

use crate::config::SrpConfig;
use crate::errors::{Result, SrpError};
use crate::session::SrpSession;

enum ServerStage {
    Init,
    Step1 {
        identity: String,
        salt: BigUint,
        verifier: BigUint,
        b: BigUint,
        b_pub: BigUint,
    },
    Step2,
}

/// Server half of an SRP-6a handshake. One instance per login attempt.
pub struct SrpServerSession<D: Digest + 'static> {
    session: SrpSession<D>,
    stage: ServerStage,
}

impl<D: Digest + 'static> SrpServerSession<D> {
    /// New server session with the default timeout.
    pub fn new(config: SrpConfig<D>) -> Self {
        Self {
            session: SrpSession::new(config),
            stage: ServerStage::Init,
        }
    }

    /// New server session expiring after `timeout`.
    pub fn with_timeout(config: SrpConfig<D>, timeout: Duration) -> Self {
        Self {
            session: SrpSession::with_timeout(config, timeout),
            stage: ServerStage::Init,
        }
    }

    /// Consume the stored registration data and produce the server public
    /// value B for the challenge.
    pub fn step1(
        &mut self,
        identity: &str,
        salt: &BigUint,
        verifier: &BigUint,
    ) -> Result<BigUint> {
        if !matches!(self.stage, ServerStage::Init) {
            return Err(SrpError::WrongState {
                step: "step1",
                expected: "init",
            });
        }
        let routines = self.session.config().routines();
        if (verifier % routines.parameters().n()).is_zero() {
            return Err(SrpError::IllegalParameter { name: "v" });
        }
        let b = routines.generate_private_value();
        let b_pub = routines.compute_server_public_value(verifier, &b);
        self.stage = ServerStage::Step1 {
            identity: identity.to_owned(),
            salt: salt.clone(),
            verifier: verifier.clone(),
            b,
            b_pub: b_pub.clone(),
        };
        Ok(b_pub)
    }

    /// Validate the client credentials and produce the server evidence
    /// message M2.
    ///
    /// `A ≡ 0 (mod N)` is rejected before any computation. An evidence
    /// mismatch fails with [`SrpError::BadClientCredentials`] and leaves the
    /// session terminal; the caller must restart the handshake with a fresh
    /// session.
    pub fn step2(&mut self, a_pub: &BigUint, m1: &BigUint) -> Result<BigUint> {
        let (identity, salt, verifier, b, b_pub) = match &self.stage {
            ServerStage::Step1 {
                identity,
                salt,
                verifier,
                b,
                b_pub,
            } => (identity, salt, verifier, b, b_pub),
            _ => {
                return Err(SrpError::WrongState {
                    step: "step2",
                    expected: "step1",
                })
            }
        };
        let routines = self.session.config().routines();
        if (a_pub % routines.parameters().n()).is_zero() {
            return Err(SrpError::IllegalParameter { name: "A" });
        }

        let u = routines.compute_u(a_pub, b_pub)?;
        let premaster = routines.compute_server_premaster_secret(verifier, &u, b, a_pub)?;
        let expected_m1 = routines.compute_client_evidence(identity, salt, a_pub, b_pub, &premaster);
        let ok = expected_m1
            .to_bytes_be()
            .ct_eq(&m1.to_bytes_be())
            .unwrap_u8()
            == 1;
        if !ok {
            self.stage = ServerStage::Step2;
            return Err(SrpError::BadClientCredentials);
        }

        let m2 = routines.compute_server_evidence(a_pub, m1, &premaster);
        self.stage = ServerStage::Step2;
        self.session.set_shared_key(premaster)?;
        Ok(m2)
    }

    /// The shared secret S agreed in this run.
    pub fn shared_key(&self) -> Result<&BigUint> {
        self.session.shared_key()
    }

    /// `H(PAD(S))`.
    pub fn hashed_shared_key(&self) -> Result<BigUint> {
        self.session.hashed_shared_key()
    }

    /// The underlying session state (expiry surface, config).
    pub fn session(&self) -> &SrpSession<D> {
        &self.session
    }
}
