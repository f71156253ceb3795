//! Error types.

use core::fmt;

/// Protocol failures surfaced by the SRP sessions and routines.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SrpError {
    /// A value that must be a positive residue mod N was zero or out of range.
    IllegalParameter {
        /// Parameter name.
        name: &'static str,
    },
    /// A step method was invoked from the wrong session state.
    WrongState {
        /// The step that was invoked.
        step: &'static str,
        /// The state the session must be in for that step.
        expected: &'static str,
    },
    /// The client evidence message did not match the server's own computation.
    BadClientCredentials,
    /// The server evidence message did not match the client's own computation.
    BadServerCredentials,
    /// The shared key was written a second time.
    SharedKeyAlreadySet,
    /// The shared key was read before being computed.
    SharedKeyNotSet,
}

impl fmt::Display for SrpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalParameter { name } => {
                write!(f, "illegal_parameter: bad '{name}' value")
            }
            Self::WrongState { step, expected } => write!(f, "{step} not from {expected}"),
            Self::BadClientCredentials => write!(f, "bad client credentials"),
            Self::BadServerCredentials => {
                write!(f, "bad server credentials: server evidence message mismatch")
            }
            Self::SharedKeyAlreadySet => write!(f, "shared key is already set"),
            Self::SharedKeyNotSet => write!(f, "shared key is not set"),
        }
    }
}

impl std::error::Error for SrpError {}

/// Result type.
pub type Result<T> = core::result::Result<T, SrpError>;
