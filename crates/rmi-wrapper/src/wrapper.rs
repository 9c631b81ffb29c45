//! Unicast reference wrapper
//!
//! `UnicastWrapper` pulls the object id, endpoint and socket factories out of
//! a unicast reference once, at construction, and exposes them together with
//! the binding name and the implementation type of the wrapped object.

use jrmp::introspect;
use jrmp::{ObjId, SocketFactory, TcpEndpoint, UnicastRef};

use crate::error::{Result, WrapperError};
use crate::object::RemoteObject;
use crate::proxy::{RemoteInterface, RemoteProxy};
use crate::tls::TlsStatus;

/// Wrapper around a remote object backed by a unicast reference
#[derive(Clone, Debug)]
pub struct UnicastWrapper {
    bound_name: Option<String>,
    remote_object: Option<RemoteObject>,
    type_name: String,
    reference: UnicastRef,

    obj_id: ObjId,
    endpoint: TcpEndpoint,
    csf: Option<SocketFactory>,
    ssf: Option<SocketFactory>,

    pub(crate) duplicates: Vec<UnicastWrapper>,
}

impl UnicastWrapper {
    /// Wrap a remote object obtained under `bound_name`.
    ///
    /// Fails with `UnsupportedRef` for activatable references and with
    /// `Introspection` if the live reference cannot be read.
    pub fn new(remote_object: RemoteObject, bound_name: Option<String>) -> Result<Self> {
        let reference = remote_object
            .unicast_ref()
            .cloned()
            .ok_or_else(|| WrapperError::UnsupportedRef(remote_object.ref_kind()))?;
        let type_name = remote_object.type_name().to_string();

        Self::build(bound_name, Some(remote_object), type_name, reference)
    }

    /// Build a proxy implementing `interface` on `reference` and wrap it.
    /// The result has no bound name.
    pub fn from_ref(reference: UnicastRef, interface: &RemoteInterface) -> Result<Self> {
        let proxy = RemoteProxy::new(reference, interface.clone())?;
        Self::new(RemoteObject::Proxy(proxy), None)
    }

    /// Wrap a bare reference that has no live object behind it
    pub fn detached(reference: UnicastRef, type_name: impl Into<String>) -> Result<Self> {
        Self::build(None, None, type_name.into(), reference)
    }

    fn build(
        bound_name: Option<String>,
        remote_object: Option<RemoteObject>,
        type_name: String,
        reference: UnicastRef,
    ) -> Result<Self> {
        let parts = introspect::extract(&reference)?;

        Ok(Self {
            bound_name,
            remote_object,
            type_name,
            reference,
            obj_id: parts.obj_id,
            endpoint: parts.endpoint,
            csf: parts.client_factory,
            ssf: parts.server_factory,
            duplicates: Vec::new(),
        })
    }

    /// Name the object was looked up under
    pub fn bound_name(&self) -> Option<&str> {
        self.bound_name.as_deref()
    }

    /// Wrapped remote object, absent for detached wrappers
    pub fn remote_object(&self) -> Option<&RemoteObject> {
        self.remote_object.as_ref()
    }

    /// Implementation type used for duplicate grouping
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Underlying reference
    pub fn reference(&self) -> &UnicastRef {
        &self.reference
    }

    /// Remote object id
    pub fn obj_id(&self) -> ObjId {
        self.obj_id
    }

    /// Exporter's TCP endpoint
    pub fn endpoint(&self) -> &TcpEndpoint {
        &self.endpoint
    }

    /// Endpoint host name
    pub fn host(&self) -> &str {
        &self.endpoint.host
    }

    /// Endpoint port
    pub fn port(&self) -> u16 {
        self.endpoint.port
    }

    /// `host:port`
    pub fn target(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }

    /// Client socket factory, `None` for the default factory
    pub fn client_socket_factory(&self) -> Option<&SocketFactory> {
        self.csf.as_ref()
    }

    /// Server socket factory, only known for locally exported objects
    pub fn server_socket_factory(&self) -> Option<&SocketFactory> {
        self.ssf.as_ref()
    }

    /// Whether calls to the object are likely TLS protected
    pub fn tls_protection(&self) -> TlsStatus {
        TlsStatus::assess(self.csf.as_ref(), self.remote_object.is_some())
    }

    /// Other wrappers exposing the same implementation type
    pub fn duplicates(&self) -> &[UnicastWrapper] {
        &self.duplicates
    }

    /// Whether any duplicates were attached
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// Bound names of the duplicates in insertion order; `None` for
    /// duplicates that have no name
    pub fn duplicate_bound_names(&self) -> Vec<Option<&str>> {
        self.duplicates.iter().map(UnicastWrapper::bound_name).collect()
    }

    pub(crate) fn add_duplicate(&mut self, other: UnicastWrapper) {
        self.duplicates.push(other);
    }
}
