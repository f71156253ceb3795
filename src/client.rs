//! SRP client session.
//!
//! Drives the client half of the handshake in three strictly ordered steps:
//!
//! 1. [`step1`](SrpClientSession::step1) binds the identity and password and
//!    draws the private ephemeral value `a`.
//! 2. [`step2`](SrpClientSession::step2) consumes the server's salt and
//!    public value B and produces the [`ClientCredentials`] (A, M1) to send
//!    back.
//! 3. [`step3`](SrpClientSession::step3) checks the server's evidence
//!    message M2 and finalizes the shared key.
//!
//! Calling a step from any other state fails and the session must be
//! discarded; there is no rewind. See the crate docs for a complete
//! client/server exchange.

use std::mem;
use std::time::Duration;

use digest::Digest;
use num_bigint::BigUint;
use num_traits::Zero;
use subtle::ConstantTimeEq;

use crate::config::SrpConfig;
use crate::errors::{Result, SrpError};
use crate::session::SrpSession;

/// Values the client transmits after processing the server challenge: its
/// public value A and the evidence message M1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    /// Client public value A.
    pub a_pub: BigUint,
    /// Client evidence message M1.
    pub m1: BigUint,
}

enum ClientStage {
    Init,
    Step1 {
        identity: String,
        password: Vec<u8>,
        a: BigUint,
    },
    Step2 {
        a_pub: BigUint,
        m1: BigUint,
        premaster: BigUint,
    },
    Step3,
}

/// Client half of an SRP-6a handshake. One instance per login attempt.
pub struct SrpClientSession<D: Digest + 'static> {
    session: SrpSession<D>,
    stage: ClientStage,
}

impl<D: Digest + 'static> SrpClientSession<D> {
    /// New client session with the default timeout.
    pub fn new(config: SrpConfig<D>) -> Self {
        Self {
            session: SrpSession::new(config),
            stage: ClientStage::Init,
        }
    }

    /// New client session expiring after `timeout`.
    pub fn with_timeout(config: SrpConfig<D>, timeout: Duration) -> Self {
        Self {
            session: SrpSession::with_timeout(config, timeout),
            stage: ClientStage::Init,
        }
    }

    /// Bind the user identity and password and draw the private ephemeral
    /// value.
    pub fn step1(&mut self, identity: &str, password: &[u8]) -> Result<()> {
        if !matches!(self.stage, ClientStage::Init) {
            return Err(SrpError::WrongState {
                step: "step1",
                expected: "init",
            });
        }
        let a = self.session.config().routines().generate_private_value();
        self.stage = ClientStage::Step1 {
            identity: identity.to_owned(),
            password: password.to_vec(),
            a,
        };
        Ok(())
    }

    /// Consume the server's salt and public value B and produce the
    /// credentials to transmit.
    ///
    /// `B ≡ 0 (mod N)` is rejected before any further computation: a
    /// degenerate server public value lets an attacker predict the session
    /// key. The password is dropped here; no later step needs it.
    pub fn step2(&mut self, salt: &BigUint, b_pub: &BigUint) -> Result<ClientCredentials> {
        let (identity, password, a) = match &self.stage {
            ClientStage::Step1 {
                identity,
                password,
                a,
            } => (identity, password, a),
            _ => {
                return Err(SrpError::WrongState {
                    step: "step2",
                    expected: "step1",
                })
            }
        };
        let routines = self.session.config().routines();
        if (b_pub % routines.parameters().n()).is_zero() {
            return Err(SrpError::IllegalParameter { name: "B" });
        }

        let a_pub = routines.compute_client_public_value(a);
        let x = routines.compute_x(identity, salt, password);
        let u = routines.compute_u(&a_pub, b_pub)?;
        let premaster = routines.compute_client_premaster_secret(&x, &u, a, b_pub)?;
        let m1 = routines.compute_client_evidence(identity, salt, &a_pub, b_pub, &premaster);

        let credentials = ClientCredentials {
            a_pub: a_pub.clone(),
            m1: m1.clone(),
        };
        self.stage = ClientStage::Step2 {
            a_pub,
            m1,
            premaster,
        };
        Ok(credentials)
    }

    /// Verify the server evidence message M2 and finalize the shared key.
    ///
    /// A mismatch means the peer does not hold the verifier, or the two
    /// sides' parameters disagree; the session is terminal either way and a
    /// fresh one is needed to retry.
    pub fn step3(&mut self, m2: &BigUint) -> Result<()> {
        match mem::replace(&mut self.stage, ClientStage::Step3) {
            ClientStage::Step2 {
                a_pub,
                m1,
                premaster,
            } => {
                let routines = self.session.config().routines();
                let expected = routines.compute_server_evidence(&a_pub, &m1, &premaster);
                let ok = expected
                    .to_bytes_be()
                    .ct_eq(&m2.to_bytes_be())
                    .unwrap_u8()
                    == 1;
                if !ok {
                    return Err(SrpError::BadServerCredentials);
                }
                self.session.set_shared_key(premaster)
            }
            other => {
                self.stage = other;
                Err(SrpError::WrongState {
                    step: "step3",
                    expected: "step2",
                })
            }
        }
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
