//! State common to both sides of a single key-agreement run.

use std::time::{Duration, SystemTime};

use digest::Digest;
use num_bigint::BigUint;

use crate::config::SrpConfig;
use crate::errors::{Result, SrpError};

/// Lifetime attached to a session when no explicit timeout is given.
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(300);

/// Per-handshake state shared by the client and server sessions: the
/// write-once shared-secret slot and the advisory expiry instant.
///
/// The expiry instant is metadata for an external eviction sweep. The
/// session never deletes itself, and nothing here is synchronized: one
/// instance belongs to exactly one in-flight handshake.
pub struct SrpSession<D: Digest + 'static> {
    config: SrpConfig<D>,
    shared_key: Option<BigUint>,
    expires_at: SystemTime,
}

impl<D: Digest + 'static> SrpSession<D> {
    /// New session expiring after [`DEFAULT_SESSION_TIMEOUT`].
    pub fn new(config: SrpConfig<D>) -> Self {
        Self::with_timeout(config, DEFAULT_SESSION_TIMEOUT)
    }

    /// New session expiring after `timeout`.
    pub fn with_timeout(config: SrpConfig<D>, timeout: Duration) -> Self {
        Self {
            config,
            shared_key: None,
            expires_at: SystemTime::now() + timeout,
        }
    }

    /// The configuration this session computes with.
    pub fn config(&self) -> &SrpConfig<D> {
        &self.config
    }

    /// Record the computed shared secret S. Fails on a second write.
    pub fn set_shared_key(&mut self, s: BigUint) -> Result<()> {
        if self.shared_key.is_some() {
            return Err(SrpError::SharedKeyAlreadySet);
        }
        self.shared_key = Some(s);
        Ok(())
    }

    /// The shared secret S. Fails until it has been computed.
    pub fn shared_key(&self) -> Result<&BigUint> {
        self.shared_key.as_ref().ok_or(SrpError::SharedKeyNotSet)
    }

    /// `H(PAD(S))`, derived on demand from the shared secret.
    pub fn hashed_shared_key(&self) -> Result<BigUint> {
        let s = self.shared_key()?;
        Ok(self.config.routines().compute_session_key(s))
    }

    /// Instant after which an external registry should consider this
    /// session abandoned.
    pub fn expires_at(&self) -> SystemTime {
        self.expires_at
    }

    /// Whether the expiry instant has passed.
    pub fn is_expired(&self) -> bool {
        SystemTime::now() > self.expires_at
    }
}
