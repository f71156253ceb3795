//! Parameters shared between the two sides of a handshake.

use core::fmt;
use core::marker::PhantomData;

use digest::Digest;
use num_bigint::BigUint;

/// Group used for SRP computations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SrpGroup {
    /// A large safe prime (`N = 2q + 1`, where `q` is prime).
    pub n: BigUint,
    /// A generator modulo N.
    pub g: BigUint,
}

impl SrpGroup {
    /// Initialize a new group from the given integers.
    pub fn new(n: BigUint, g: BigUint) -> Self {
        Self { n, g }
    }

    /// Byte length of the canonical fixed-width encoding of values mod N.
    pub fn padded_length(&self) -> usize {
        (self.n.bits() as usize + 7) / 8
    }
}

/// Hashing mode for the scrambling parameter `u`.
///
/// Deployed SRP-6a implementations disagree on whether A and B are
/// left-padded to the modulus width before being hashed into `u`. Client and
/// server MUST agree on the mode: a mismatch silently yields different
/// session keys on the two sides, with no protocol-level detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UPadding {
    /// `u = H(PAD(A) | PAD(B))`, as RFC 5054 specifies.
    Padded,
    /// `u = H(A | B)` over the trimmed encodings.
    Unpadded,
}

/// Immutable parameter set binding a group to a digest and to the hashing
/// conventions both sides agreed on.
///
/// Safe to share across concurrent sessions; nothing is mutated after
/// construction.
pub struct SrpParameters<D: Digest> {
    group: &'static SrpGroup,
    u_padding: UPadding,
    username_in_x: bool,
    d: PhantomData<fn() -> D>,
}

impl<D: Digest> SrpParameters<D> {
    /// Parameters with the default conventions: unpadded `u` hashing and the
    /// username left out of `x`.
    pub fn new(group: &'static SrpGroup) -> Self {
        Self::with_options(group, UPadding::Unpadded, false)
    }

    /// Parameters with explicit `u`-padding and `x`-composition choices.
    ///
    /// `username_in_x` selects `x = H(s | H(I ":" P))` (RFC 2945) over the
    /// default `x = H(s | H(P))`. Like the padding mode, it must match the
    /// interoperating peer.
    pub fn with_options(
        group: &'static SrpGroup,
        u_padding: UPadding,
        username_in_x: bool,
    ) -> Self {
        Self {
            group,
            u_padding,
            username_in_x,
            d: PhantomData,
        }
    }

    /// The shared group.
    pub fn group(&self) -> &'static SrpGroup {
        self.group
    }

    /// Prime modulus N.
    pub fn n(&self) -> &'static BigUint {
        &self.group.n
    }

    /// Generator g.
    pub fn g(&self) -> &'static BigUint {
        &self.group.g
    }

    /// Hashing mode for the scrambling parameter.
    pub fn u_padding(&self) -> UPadding {
        self.u_padding
    }

    /// Whether the identity participates in the `x` computation.
    pub fn username_in_x(&self) -> bool {
        self.username_in_x
    }

    /// Byte length integers are left-padded to before hashing.
    pub fn padded_length(&self) -> usize {
        self.group.padded_length()
    }
}

impl<D: Digest> Clone for SrpParameters<D> {
    fn clone(&self) -> Self {
        Self {
            group: self.group,
            u_padding: self.u_padding,
            username_in_x: self.username_in_x,
            d: PhantomData,
        }
    }
}

impl<D: Digest> fmt::Debug for SrpParameters<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SrpParameters")
            .field("n_bits", &self.group.n.bits())
            .field("g", &self.group.g)
            .field("u_padding", &self.u_padding)
            .field("username_in_x", &self.username_in_x)
            .finish()
    }
}
