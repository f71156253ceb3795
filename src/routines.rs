//! The SRP-6a computations as a pluggable routine set.
//!
//! Every intermediate value of the protocol is produced by a method on
//! [`SrpRoutines`], all of which have default bodies implementing the
//! standard SRP-6a formulas for the bound [`SrpParameters`]. Sessions and the
//! registration helpers depend only on this trait, so a deployment can swap
//! in its own routine set by composition.
//!
//! The load-bearing override points are [`generate_private_value`] and
//! [`generate_random_salt`]: interoperability tests replace the fresh random
//! ephemeral with a fixed value to reproduce known vectors. Overriding the
//! generated values outside of testing defeats forward secrecy.
//!
//! [`generate_private_value`]: SrpRoutines::generate_private_value
//! [`generate_random_salt`]: SrpRoutines::generate_random_salt

use digest::Digest;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::{Result, SrpError};
use crate::params::{SrpParameters, UPadding};
use crate::utils::{hash, hash_padded};

/// The full set of SRP-6a computations.
///
/// All byte encodings fed to the digest are big-endian and trimmed of
/// leading zeros unless a formula calls for the fixed-width `PAD(...)` form.
pub trait SrpRoutines<D: Digest>: Send + Sync {
    /// Parameters this routine set is bound to.
    fn parameters(&self) -> &SrpParameters<D>;

    /// Fresh random salt of `byte_length` bytes.
    fn generate_random_salt(&self, byte_length: usize) -> BigUint {
        let mut buf = vec![0u8; byte_length];
        OsRng.fill_bytes(&mut buf);
        BigUint::from_bytes_be(&buf)
    }

    /// Fresh private ephemeral value, reduced mod N and never zero.
    ///
    /// The client draws `a` and the server draws `b` from this routine.
    fn generate_private_value(&self) -> BigUint {
        let n = self.parameters().n();
        let mut buf = vec![0u8; self.parameters().padded_length()];
        loop {
            OsRng.fill_bytes(&mut buf);
            let value = BigUint::from_bytes_be(&buf) % n;
            if !value.is_zero() {
                return value;
            }
        }
    }

    /// Inner hash of the `x` computation: `H(I ":" P)` when the parameters
    /// put the username in `x`, `H(P)` otherwise.
    fn compute_identity_hash(&self, identity: &str, password: &[u8]) -> Vec<u8> {
        if self.parameters().username_in_x() {
            hash::<D>(&[identity.as_bytes(), b":", password])
        } else {
            hash::<D>(&[password])
        }
    }

    /// `x = H(s | H(I ":" P))`, with the inner hash per
    /// [`compute_identity_hash`](Self::compute_identity_hash).
    fn compute_x(&self, identity: &str, salt: &BigUint, password: &[u8]) -> BigUint {
        let salt_bytes = salt.to_bytes_be();
        let inner = self.compute_identity_hash(identity, password);
        BigUint::from_bytes_be(&hash::<D>(&[&salt_bytes, &inner]))
    }

    /// `v = g^x mod N`.
    fn compute_verifier(&self, x: &BigUint) -> BigUint {
        let p = self.parameters();
        p.g().modpow(x, p.n())
    }

    /// `k = H(PAD(N) | PAD(g))`.
    fn compute_multiplier(&self) -> BigUint {
        let p = self.parameters();
        let digest = hash_padded::<D>(
            p.padded_length(),
            &[&p.n().to_bytes_be(), &p.g().to_bytes_be()],
        );
        BigUint::from_bytes_be(&digest)
    }

    /// `A = g^a mod N`.
    fn compute_client_public_value(&self, a: &BigUint) -> BigUint {
        let p = self.parameters();
        p.g().modpow(a, p.n())
    }

    /// `B = (k*v + g^b) mod N`.
    fn compute_server_public_value(&self, verifier: &BigUint, b: &BigUint) -> BigUint {
        let p = self.parameters();
        let k = self.compute_multiplier();
        (k * verifier + p.g().modpow(b, p.n())) % p.n()
    }

    /// Scrambling parameter `u = H(A | B)`, padded or trimmed per the
    /// parameters' [`UPadding`] mode.
    ///
    /// A zero digest is rejected: `u = 0` would collapse the session key.
    fn compute_u(&self, a_pub: &BigUint, b_pub: &BigUint) -> Result<BigUint> {
        let p = self.parameters();
        let a_bytes = a_pub.to_bytes_be();
        let b_bytes = b_pub.to_bytes_be();
        let digest = match p.u_padding() {
            UPadding::Padded => hash_padded::<D>(p.padded_length(), &[&a_bytes, &b_bytes]),
            UPadding::Unpadded => hash::<D>(&[&a_bytes, &b_bytes]),
        };
        let u = BigUint::from_bytes_be(&digest);
        if u.is_zero() {
            return Err(SrpError::IllegalParameter { name: "u" });
        }
        Ok(u)
    }

    /// Client evidence message `M1 = H(A | B | S)`.
    ///
    /// The identity and salt are part of the signature so that overriding
    /// routine sets can implement the RFC 2945 composition, which hashes
    /// them as well; the default formula does not use them.
    fn compute_client_evidence(
        &self,
        _identity: &str,
        _salt: &BigUint,
        a_pub: &BigUint,
        b_pub: &BigUint,
        s: &BigUint,
    ) -> BigUint {
        let digest = hash::<D>(&[
            &a_pub.to_bytes_be(),
            &b_pub.to_bytes_be(),
            &s.to_bytes_be(),
        ]);
        BigUint::from_bytes_be(&digest)
    }

    /// Server evidence message `M2 = H(A | M1 | S)`.
    fn compute_server_evidence(&self, a_pub: &BigUint, m1: &BigUint, s: &BigUint) -> BigUint {
        let digest = hash::<D>(&[
            &a_pub.to_bytes_be(),
            &m1.to_bytes_be(),
            &s.to_bytes_be(),
        ]);
        BigUint::from_bytes_be(&digest)
    }

    /// `H(PAD(S))`: the raw shared secret normalized into the final session
    /// key form.
    fn compute_session_key(&self, s: &BigUint) -> BigUint {
        let p = self.parameters();
        let digest = hash_padded::<D>(p.padded_length(), &[&s.to_bytes_be()]);
        BigUint::from_bytes_be(&digest)
    }

    /// Client-side premaster secret `S = (B - k*g^x)^(a + u*x) mod N`.
    ///
    /// The subtraction is lifted by +N so the base stays a valid residue
    /// before exponentiation. Rejects `B ≡ 0 (mod N)`.
    fn compute_client_premaster_secret(
        &self,
        x: &BigUint,
        u: &BigUint,
        a: &BigUint,
        b_pub: &BigUint,
    ) -> Result<BigUint> {
        let p = self.parameters();
        let n = p.n();
        let b_reduced = b_pub % n;
        if b_reduced.is_zero() {
            return Err(SrpError::IllegalParameter { name: "B" });
        }
        let k = self.compute_multiplier();
        let k_g_x = (k * p.g().modpow(x, n)) % n;
        let base = (b_reduced + n - k_g_x) % n;
        let exponent = a + u * x;
        Ok(base.modpow(&exponent, n))
    }

    /// Server-side premaster secret `S = (A * v^u)^b mod N`.
    ///
    /// Rejects `A ≡ 0 (mod N)`.
    fn compute_server_premaster_secret(
        &self,
        verifier: &BigUint,
        u: &BigUint,
        b: &BigUint,
        a_pub: &BigUint,
    ) -> Result<BigUint> {
        let p = self.parameters();
        let n = p.n();
        if (a_pub % n).is_zero() {
            return Err(SrpError::IllegalParameter { name: "A" });
        }
        let base = (a_pub * verifier.modpow(u, n)) % n;
        Ok(base.modpow(b, n))
    }
}

/// The stock routine set used when a config does not supply its own.
pub struct DefaultRoutines<D: Digest> {
    parameters: SrpParameters<D>,
}

impl<D: Digest> DefaultRoutines<D> {
    /// Bind the default routines to `parameters`.
    pub fn new(parameters: SrpParameters<D>) -> Self {
        Self { parameters }
    }
}

impl<D: Digest> SrpRoutines<D> for DefaultRoutines<D> {
    fn parameters(&self) -> &SrpParameters<D> {
        &self.parameters
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use num_traits::Zero;
    use sha2::Sha256;

    use super::{DefaultRoutines, SrpRoutines};
    use crate::groups::G_2048;
    use crate::params::SrpParameters;

    fn routines() -> DefaultRoutines<Sha256> {
        DefaultRoutines::new(SrpParameters::new(&G_2048))
    }

    #[test]
    fn private_values_are_reduced_and_nonzero() {
        let r = routines();
        for _ in 0..8 {
            let value = r.generate_private_value();
            assert!(!value.is_zero());
            assert!(&value < r.parameters().n());
        }
    }

    #[test]
    fn salt_has_requested_width() {
        let r = routines();
        let salt = r.generate_random_salt(16);
        assert!(salt.bits() <= 128);
    }

    #[test]
    fn premaster_rejects_degenerate_public_values() {
        let r = routines();
        let one = BigUint::from(1u32);
        assert!(r
            .compute_client_premaster_secret(&one, &one, &one, &BigUint::zero())
            .is_err());
        assert!(r
            .compute_server_premaster_secret(&one, &one, &one, &(r.parameters().n() * 2u32))
            .is_err());
    }
}
