//! Remote object handles
//!
//! What the lookup collaborator hands over: either a stub obtained from a
//! naming service lookup, or a proxy synthesized around a raw reference.

use jrmp::{RefKind, RemoteRef, UnicastRef};

use crate::proxy::RemoteProxy;

/// Stub returned by a naming service lookup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteStub {
    class_name: String,
    interfaces: Vec<String>,
    reference: RemoteRef,
}

impl RemoteStub {
    /// Create a stub of `class_name` implementing `interfaces`
    pub fn new(
        class_name: impl Into<String>,
        interfaces: Vec<String>,
        reference: impl Into<RemoteRef>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            interfaces,
            reference: reference.into(),
        }
    }

    /// Concrete class of the stub
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Interfaces the stub implements, in declaration order
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    /// Reference the stub carries
    pub fn reference(&self) -> &RemoteRef {
        &self.reference
    }

    /// Whether the stub class is a generated dynamic proxy class
    pub fn is_dynamic_proxy(&self) -> bool {
        let simple = self
            .class_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.class_name);
        simple.starts_with("$Proxy")
    }
}

/// Handle to a remote object
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteObject {
    /// Looked-up stub
    Stub(RemoteStub),
    /// Proxy built around a raw reference
    Proxy(RemoteProxy),
}

impl RemoteObject {
    /// Type used to decide whether two bindings expose the same implementation.
    ///
    /// Dynamic proxy classes are named after the interface they implement,
    /// since their generated class names differ per VM.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Stub(stub) if stub.is_dynamic_proxy() => stub
                .interfaces
                .first()
                .map(String::as_str)
                .unwrap_or(&stub.class_name),
            Self::Stub(stub) => &stub.class_name,
            Self::Proxy(proxy) => proxy.interface().name(),
        }
    }

    /// Kind of reference behind the object
    pub fn ref_kind(&self) -> RefKind {
        match self {
            Self::Stub(stub) => stub.reference.kind(),
            Self::Proxy(proxy) => proxy.reference().kind(),
        }
    }

    /// Unicast reference behind the object, if it has one
    pub fn unicast_ref(&self) -> Option<&UnicastRef> {
        match self {
            Self::Stub(stub) => stub.reference.as_unicast(),
            Self::Proxy(proxy) => Some(proxy.reference()),
        }
    }
}

impl From<RemoteStub> for RemoteObject {
    fn from(stub: RemoteStub) -> Self {
        Self::Stub(stub)
    }
}

impl From<RemoteProxy> for RemoteObject {
    fn from(proxy: RemoteProxy) -> Self {
        Self::Proxy(proxy)
    }
}
