//! Wrapper error types

use jrmp::{IntrospectionError, RefKind};
use thiserror::Error;

/// Result type for wrapper operations
pub type Result<T> = std::result::Result<T, WrapperError>;

/// Errors raised while building wrappers or dispatching through proxies
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapperError {
    /// Live reference could not be introspected
    #[error(transparent)]
    Introspection(#[from] IntrospectionError),

    /// Reference kind cannot be wrapped as a unicast reference
    #[error("unsupported remote reference: {0}")]
    UnsupportedRef(RefKind),

    /// Proxy requested for an interface that is not remote-callable
    #[error("invalid interface: {0} is not a remote interface")]
    InvalidInterface(String),

    /// Method is not part of the proxied interface
    #[error("method {method} is not part of interface {interface}")]
    UnknownMethod { interface: String, method: String },

    /// Call transport failed
    #[error("transport error: {0}")]
    Transport(String),
}
