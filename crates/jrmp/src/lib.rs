//! JRMP remote reference types
//!
//! Wire level vocabulary for the references carried by Java RMI stubs:
//!
//! ```text
//! RemoteRef ─┬─ UnicastRef / UnicastRef2 ── LiveRef
//!            │                               ├─ TCPEndpoint (host, port, [csf])
//!            │                               ├─ ObjID (objNum, UID)
//!            │                               └─ isResultStream
//!            └─ ActivatableRef (opaque)
//! ```
//!
//! # Modules
//!
//! - [`identifiers`]: `ObjId` and `Uid`, including the well-known ids
//! - [`endpoint`]: TCP endpoints and socket factory descriptors
//! - [`refs`]: reference kinds and their wire framing
//! - [`introspect`]: the only reader of a unicast reference's live data
//! - [`utf`]: Java modified UTF-8 strings

pub mod endpoint;
pub mod identifiers;
pub mod introspect;
pub mod refs;
pub mod utf;

mod error;

pub use endpoint::{factory_class, SocketFactory, TcpEndpoint};
pub use error::{JrmpError, Result};
pub use identifiers::{ObjId, Uid};
pub use introspect::{FieldFault, IntrospectionError, LiveRefParts, RefField};
pub use refs::{ActivatableRef, RefKind, RemoteRef, UnicastRef};

/// Default port of the RMI registry
pub const DEFAULT_REGISTRY_PORT: u16 = 1099;
