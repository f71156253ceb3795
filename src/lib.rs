//! An implementation of the [Secure Remote Password][1] protocol (SRP-6a
//! variant): a zero-knowledge password-authenticated key exchange.
//!
//! The client holds a password, the server holds only a verifier derived
//! from it at registration time. A handshake mutually authenticates the two
//! sides and leaves both with the same shared secret, without the password
//! ever crossing the wire.
//!
//! # Usage
//!
//! Both sides agree on an [`SrpConfig`]: a published group from [`groups`],
//! a digest, and the hashing conventions in [`SrpParameters`]. The config is
//! built once and cloned into every session.
//!
//! Registration produces the pair the server stores:
//!
//! ```rust
//! use sha2::Sha512;
//! use srp6a::groups::G_2048;
//! use srp6a::{create_verifier_and_salt, SrpConfig, SrpParameters, VerifierAndSalt};
//!
//! let config = SrpConfig::<Sha512>::new(SrpParameters::new(&G_2048));
//! let VerifierAndSalt { salt, verifier } =
//!     create_verifier_and_salt(&config, "alice", b"password123", 16);
//! // persist (identity, salt, verifier) server-side
//! ```
//!
//! A handshake then ferries four values between one [`SrpClientSession`] and
//! one [`SrpServerSession`], each stepped in strict order:
//!
//! ```rust
//! # use sha2::Sha512;
//! # use srp6a::groups::G_2048;
//! # use srp6a::{create_verifier_and_salt, SrpConfig, SrpParameters, VerifierAndSalt};
//! use srp6a::{SrpClientSession, SrpServerSession};
//!
//! # fn main() -> Result<(), srp6a::SrpError> {
//! # let config = SrpConfig::<Sha512>::new(SrpParameters::new(&G_2048));
//! # let VerifierAndSalt { salt, verifier } =
//! #     create_verifier_and_salt(&config, "alice", b"password123", 16);
//! let mut server = SrpServerSession::new(config.clone());
//! let b_pub = server.step1("alice", &salt, &verifier)?;
//!
//! let mut client = SrpClientSession::new(config.clone());
//! client.step1("alice", b"password123")?;
//! let credentials = client.step2(&salt, &b_pub)?;
//!
//! let m2 = server.step2(&credentials.a_pub, &credentials.m1)?;
//! client.step3(&m2)?;
//!
//! assert_eq!(client.shared_key()?, server.shared_key()?);
//! # Ok(())
//! # }
//! ```
//!
//! The transport of those values (salt and B one way, A and M1 back, M2 to
//! finish) is the application's concern; fixed-width big-endian encoding is
//! recommended on the wire and required wherever a value is hashed.
//!
//! # Interoperability
//!
//! Two conventions differ across deployed SRP-6a implementations and must
//! match the peer exactly: whether A and B are left-padded before hashing
//! the scrambling parameter ([`UPadding`]) and whether the username enters
//! the `x` computation (`username_in_x` on [`SrpParameters`]). A mismatch is
//! not detected by the protocol; the two sides simply derive different keys
//! and authentication fails. All computations are overridable through the
//! [`SrpRoutines`] trait for test doubles and deterministic vectors.
//!
//! Sessions are single-use: one instance per handshake, stepped from a
//! single logical flow, discarded on any error or once terminal.
//!
//! [1]: http://srp.stanford.edu/
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod client;
pub mod config;
pub mod errors;
pub mod groups;
pub mod params;
pub mod routines;
pub mod server;
pub mod session;
pub mod utils;
pub mod verifier;

pub use client::{ClientCredentials, SrpClientSession};
pub use config::SrpConfig;
pub use errors::{Result, SrpError};
pub use params::{SrpGroup, SrpParameters, UPadding};
pub use routines::{DefaultRoutines, SrpRoutines};
pub use server::SrpServerSession;
pub use session::{SrpSession, DEFAULT_SESSION_TIMEOUT};
pub use verifier::{create_verifier, create_verifier_and_salt, VerifierAndSalt};
