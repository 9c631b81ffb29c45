//! Remote reference kinds
//!
//! On the wire a remote stub carries its reference as the reference class
//! name followed by that class's externalized data. Two kinds matter to
//! enumeration: unicast references, which point at one exported object on a
//! TCP endpoint, and activatable references, which go through an activator
//! first and are not handled here.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::fmt;

use crate::endpoint::{endpoint_format, SocketFactory, TcpEndpoint};
use crate::error::{JrmpError, Result};
use crate::identifiers::ObjId;
use crate::utf::{read_utf, write_utf};

/// Reference class names as written on the wire
pub mod ref_class {
    /// Unicast reference, legacy host/port endpoint layout
    pub const UNICAST_REF: &str = "UnicastRef";
    /// Unicast reference with an endpoint format byte
    pub const UNICAST_REF2: &str = "UnicastRef2";
    /// Activatable reference
    pub const ACTIVATABLE_REF: &str = "ActivatableRef";
}

/// Kind of remote reference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// `UnicastRef`
    Unicast,
    /// `UnicastRef2`
    Unicast2,
    /// `ActivatableRef`
    Activatable,
}

impl RefKind {
    /// Parse a wire reference class name
    pub fn from_class_name(name: &str) -> Result<Self> {
        match name {
            ref_class::UNICAST_REF => Ok(Self::Unicast),
            ref_class::UNICAST_REF2 => Ok(Self::Unicast2),
            ref_class::ACTIVATABLE_REF => Ok(Self::Activatable),
            other => Err(JrmpError::UnknownRefType(other.to_string())),
        }
    }

    /// Wire reference class name
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Unicast => ref_class::UNICAST_REF,
            Self::Unicast2 => ref_class::UNICAST_REF2,
            Self::Activatable => ref_class::ACTIVATABLE_REF,
        }
    }

    /// Whether this kind points directly at an exported object
    pub fn is_unicast(&self) -> bool {
        matches!(self, Self::Unicast | Self::Unicast2)
    }
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Unicast remote reference
///
/// Opaque on purpose: the live reference (endpoint, object id, socket
/// factories) is kept in its externalized form and only
/// [`introspect::extract`](crate::introspect::extract) reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnicastRef {
    kind: RefKind,
    pub(crate) live_ref: Bytes,
    pub(crate) server_factory: Option<SocketFactory>,
}

impl UnicastRef {
    /// Build a reference to `obj_id` exported on `endpoint`.
    ///
    /// Uses the `UnicastRef2` layout iff a client socket factory is given,
    /// which is what an exporter does when writing its stub.
    pub fn new(
        endpoint: &TcpEndpoint,
        obj_id: ObjId,
        client_factory: Option<&SocketFactory>,
    ) -> Result<Self> {
        let mut buf = BytesMut::new();
        let kind = match client_factory {
            Some(csf) => {
                buf.put_u8(endpoint_format::FORMAT_HOST_PORT_FACTORY);
                endpoint.encode_host_port(&mut buf)?;
                write_utf(&mut buf, csf.class_name())?;
                RefKind::Unicast2
            }
            None => {
                endpoint.encode_host_port(&mut buf)?;
                RefKind::Unicast
            }
        };
        obj_id.encode(&mut buf);
        // isResultStream
        buf.put_u8(0);

        Ok(Self {
            kind,
            live_ref: buf.freeze(),
            server_factory: None,
        })
    }

    /// Attach the server socket factory of a locally exported object.
    /// Never present on references read off the wire.
    pub fn with_server_factory(mut self, factory: SocketFactory) -> Self {
        self.server_factory = Some(factory);
        self
    }

    /// `Unicast` or `Unicast2`
    pub fn kind(&self) -> RefKind {
        self.kind
    }

    /// Encode externalized data (without the class name)
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.live_ref);
    }
}

/// Activatable remote reference
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivatableRef {
    /// Externalized activation id and inner reference, undecoded
    pub data: Bytes,
}

/// Any remote reference a stub may carry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteRef {
    /// Unicast reference (`UnicastRef` or `UnicastRef2`)
    Unicast(UnicastRef),
    /// Activatable reference
    Activatable(ActivatableRef),
}

impl RemoteRef {
    /// Reference kind
    pub fn kind(&self) -> RefKind {
        match self {
            Self::Unicast(u) => u.kind(),
            Self::Activatable(_) => RefKind::Activatable,
        }
    }

    /// The unicast reference, if this is one
    pub fn as_unicast(&self) -> Option<&UnicastRef> {
        match self {
            Self::Unicast(u) => Some(u),
            Self::Activatable(_) => None,
        }
    }

    /// Encode class name followed by externalized data
    pub fn encode<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        write_utf(buf, self.kind().class_name())?;
        match self {
            Self::Unicast(u) => u.encode(buf),
            Self::Activatable(a) => buf.put_slice(&a.data),
        }
        Ok(())
    }

    /// Decode class name and take the remaining buffer as externalized data.
    ///
    /// The live reference is not validated here; that happens when it is
    /// introspected.
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self> {
        let class_name = read_utf(buf)?;
        let kind = RefKind::from_class_name(&class_name)?;
        let data = buf.copy_to_bytes(buf.remaining());

        Ok(match kind {
            RefKind::Activatable => Self::Activatable(ActivatableRef { data }),
            kind => Self::Unicast(UnicastRef {
                kind,
                live_ref: data,
                server_factory: None,
            }),
        })
    }
}

impl From<UnicastRef> for RemoteRef {
    fn from(reference: UnicastRef) -> Self {
        Self::Unicast(reference)
    }
}
