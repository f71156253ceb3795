//! Registration helpers turning credentials into a (salt, verifier) pair.
//!
//! Registration happens over a protected channel before any handshake: the
//! client derives the pair and the server persists it against the identity.
//! The verifier never reveals the password.

use digest::Digest;
use num_bigint::BigUint;

use crate::config::SrpConfig;

/// Salt and verifier produced at registration time, persisted by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierAndSalt {
    /// Random per-identity salt s.
    pub salt: BigUint,
    /// Password verifier v.
    pub verifier: BigUint,
}

/// Generate a fresh `salt_length`-byte salt and derive the verifier for the
/// given credentials.
pub fn create_verifier_and_salt<D: Digest + 'static>(
    config: &SrpConfig<D>,
    identity: &str,
    password: &[u8],
    salt_length: usize,
) -> VerifierAndSalt {
    let salt = config.routines().generate_random_salt(salt_length);
    let verifier = create_verifier(config, identity, &salt, password);
    VerifierAndSalt { salt, verifier }
}

/// Derive the verifier for a caller-supplied salt.
///
/// Pure given its inputs; used to re-derive a verifier from a known salt and
/// to reproduce registration vectors.
pub fn create_verifier<D: Digest + 'static>(
    config: &SrpConfig<D>,
    identity: &str,
    salt: &BigUint,
    password: &[u8],
) -> BigUint {
    let routines = config.routines();
    let x = routines.compute_x(identity, salt, password);
    routines.compute_verifier(&x)
}
