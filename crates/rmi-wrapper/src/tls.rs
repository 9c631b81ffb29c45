//! Transport encryption heuristic
//!
//! Judges from the client socket factory's concrete class whether calls to
//! a remote object go over TLS. No connection is opened.

use jrmp::SocketFactory;
use std::fmt;

/// Outcome of the TLS heuristic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TlsStatus {
    /// Standard TLS client socket factory
    Tls,
    /// Standard default factory, or no factory on a live object
    Plaintext,
    /// Custom factory or nothing to go on
    Unknown,
}

impl TlsStatus {
    /// Classify a client socket factory.
    ///
    /// A missing factory means the default plaintext factory only when a live
    /// remote object is present; without one it stays `Unknown`.
    pub fn assess(client_factory: Option<&SocketFactory>, object_present: bool) -> Self {
        match client_factory {
            Some(csf) if csf.is_standard_tls() => Self::Tls,
            Some(csf) if csf.is_standard_default() => Self::Plaintext,
            Some(_) => Self::Unknown,
            None if object_present => Self::Plaintext,
            None => Self::Unknown,
        }
    }

    /// Numeric form used by older reports: 1, -1 or 0
    pub fn legacy_code(&self) -> i32 {
        match self {
            Self::Tls => 1,
            Self::Plaintext => -1,
            Self::Unknown => 0,
        }
    }
}

impl fmt::Display for TlsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Tls => "TLS",
            Self::Plaintext => "PLAINTEXT",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}
