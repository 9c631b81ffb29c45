//! Live reference introspection
//!
//! A [`UnicastRef`] does not expose its endpoint or socket factories. This
//! module is the single place allowed to look inside it, and it extracts
//! exactly four things: the object id, the endpoint, and the client and
//! server socket factories. Any structural problem fails the whole
//! extraction with one [`IntrospectionError`].

use bytes::Buf;
use std::fmt;
use thiserror::Error;

use crate::endpoint::{endpoint_format, SocketFactory, TcpEndpoint};
use crate::error::JrmpError;
use crate::identifiers::ObjId;
use crate::refs::{RefKind, UnicastRef};
use crate::utf::read_utf;

/// Identity and transport data of a live reference
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveRefParts {
    /// Remote object id
    pub obj_id: ObjId,
    /// Exporter's TCP endpoint
    pub endpoint: TcpEndpoint,
    /// Client socket factory, `None` meaning the default factory
    pub client_factory: Option<SocketFactory>,
    /// Server socket factory
    pub server_factory: Option<SocketFactory>,
}

/// Live reference field that could not be read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefField {
    EndpointFormat,
    Host,
    Port,
    ClientSocketFactory,
    ObjId,
    ResultStream,
}

impl fmt::Display for RefField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EndpointFormat => "endpoint format",
            Self::Host => "endpoint host",
            Self::Port => "endpoint port",
            Self::ClientSocketFactory => "client socket factory",
            Self::ObjId => "object id",
            Self::ResultStream => "result stream flag",
        };
        f.write_str(name)
    }
}

/// Why a field could not be read
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldFault {
    /// Data ended before the field
    Missing,
    /// Field present but of a shape the reference kind does not allow
    UnexpectedType(String),
    /// Field data could not be decoded
    Malformed(JrmpError),
}

impl fmt::Display for FieldFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("missing"),
            Self::UnexpectedType(detail) => write!(f, "unexpected type: {}", detail),
            Self::Malformed(e) => write!(f, "malformed: {}", e),
        }
    }
}

/// Failure to extract a live reference
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot read {field} of {kind}: {fault}")]
pub struct IntrospectionError {
    /// Reference kind being introspected
    pub kind: RefKind,
    /// Field that failed
    pub field: RefField,
    /// What went wrong
    pub fault: FieldFault,
}

/// Extract object id, endpoint and socket factories from `reference`
pub fn extract(reference: &UnicastRef) -> Result<LiveRefParts, IntrospectionError> {
    let mut reader = FieldReader {
        kind: reference.kind(),
        buf: reference.live_ref.clone(),
    };

    let format = match reader.kind {
        RefKind::Unicast2 => reader.field(RefField::EndpointFormat, |b| {
            Ok(b.has_remaining().then(|| b.get_u8()))
        })?,
        _ => endpoint_format::FORMAT_HOST_PORT,
    };
    let has_factory = match format {
        endpoint_format::FORMAT_HOST_PORT => false,
        endpoint_format::FORMAT_HOST_PORT_FACTORY => true,
        other => {
            return Err(reader.fault(
                RefField::EndpointFormat,
                FieldFault::UnexpectedType(format!("unknown endpoint format {}", other)),
            ))
        }
    };

    let host = reader.field(RefField::Host, |b| read_utf(b).map(Some))?;
    let port = reader.field(RefField::Port, |b| {
        Ok((b.remaining() >= 4).then(|| b.get_i32()))
    })?;
    let port = u16::try_from(port).map_err(|_| {
        reader.fault(
            RefField::Port,
            FieldFault::UnexpectedType(format!("{} is not a TCP port", port)),
        )
    })?;

    let client_factory = if has_factory {
        let class_name =
            reader.field(RefField::ClientSocketFactory, |b| read_utf(b).map(Some))?;
        Some(SocketFactory::new(class_name))
    } else {
        None
    };

    let obj_id = reader.field(RefField::ObjId, |b| ObjId::decode(b).map(Some))?;
    let flag = reader.field(RefField::ResultStream, |b| {
        Ok(b.has_remaining().then(|| b.get_u8()))
    })?;
    if flag > 1 {
        return Err(reader.fault(
            RefField::ResultStream,
            FieldFault::UnexpectedType(format!("0x{:02x} is not a boolean", flag)),
        ));
    }

    Ok(LiveRefParts {
        obj_id,
        endpoint: TcpEndpoint::new(host, port),
        client_factory,
        server_factory: reference.server_factory.clone(),
    })
}

struct FieldReader {
    kind: RefKind,
    buf: bytes::Bytes,
}

impl FieldReader {
    /// Read one field; `Ok(None)` and underflow both mean the field is missing
    fn field<T>(
        &mut self,
        field: RefField,
        read: impl FnOnce(&mut bytes::Bytes) -> crate::Result<Option<T>>,
    ) -> Result<T, IntrospectionError> {
        match read(&mut self.buf) {
            Ok(Some(value)) => Ok(value),
            Ok(None) | Err(JrmpError::BufferUnderflow { .. }) => {
                Err(self.fault(field, FieldFault::Missing))
            }
            Err(e) => Err(self.fault(field, FieldFault::Malformed(e))),
        }
    }

    fn fault(&self, field: RefField, fault: FieldFault) -> IntrospectionError {
        IntrospectionError {
            kind: self.kind,
            field,
            fault,
        }
    }
}
