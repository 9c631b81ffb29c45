//! Dispatch adapter for synthetic remote proxies
//!
//! A [`RemoteProxy`] pairs a unicast reference with the method set of one
//! remote interface. Every call made through it becomes
//! "invoke method M with these arguments on reference R", handed to an
//! [`Invoker`] that owns the actual call transport.

use bytes::Bytes;
use jrmp::UnicastRef;
use std::fmt;

use crate::error::{Result, WrapperError};

/// Name of the marker interface remote-callable interfaces extend
pub const REMOTE_MARKER: &str = "java.rmi.Remote";

/// One method of a remote interface
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RemoteMethod {
    /// Method name
    pub name: String,
    /// JVM method descriptor, e.g. `(Ljava/lang/String;)Ljava/rmi/Remote;`
    pub descriptor: String,
}

impl RemoteMethod {
    /// Create a new method
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }
}

impl fmt::Display for RemoteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.descriptor)
    }
}

/// Interface a proxy can be built for
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteInterface {
    name: String,
    remote: bool,
    methods: Vec<RemoteMethod>,
}

impl RemoteInterface {
    /// Interface that extends `java.rmi.Remote`
    pub fn remote(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remote: true,
            methods: Vec::new(),
        }
    }

    /// Interface that is not remote-callable
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remote: false,
            methods: Vec::new(),
        }
    }

    /// Add a method to the interface
    pub fn with_method(mut self, name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        self.methods.push(RemoteMethod::new(name, descriptor));
        self
    }

    /// Fully qualified interface name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the interface is remote-callable
    pub fn is_remote(&self) -> bool {
        self.remote || self.name == REMOTE_MARKER
    }

    /// Declared methods
    pub fn methods(&self) -> &[RemoteMethod] {
        &self.methods
    }

    /// First method with the given name
    pub fn method(&self, name: &str) -> Option<&RemoteMethod> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Call transport used by proxies
pub trait Invoker {
    /// Invoke `method` with marshalled `args` on the object behind `reference`
    fn invoke(&self, reference: &UnicastRef, method: &RemoteMethod, args: Bytes) -> Result<Bytes>;
}

/// Synthetic proxy forwarding interface calls through a unicast reference
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteProxy {
    interface: RemoteInterface,
    reference: UnicastRef,
}

impl RemoteProxy {
    /// Create a proxy implementing `interface` on top of `reference`.
    ///
    /// Fails with `InvalidInterface` if the interface is not remote-callable.
    pub fn new(reference: UnicastRef, interface: RemoteInterface) -> Result<Self> {
        if !interface.is_remote() {
            return Err(WrapperError::InvalidInterface(interface.name));
        }
        Ok(Self {
            interface,
            reference,
        })
    }

    /// Proxied interface
    pub fn interface(&self) -> &RemoteInterface {
        &self.interface
    }

    /// Reference calls are forwarded to
    pub fn reference(&self) -> &UnicastRef {
        &self.reference
    }

    /// Invoke the first method called `name`
    pub fn invoke(&self, invoker: &dyn Invoker, name: &str, args: Bytes) -> Result<Bytes> {
        let method = self
            .interface
            .method(name)
            .ok_or_else(|| self.unknown_method(name))?;
        invoker.invoke(&self.reference, method, args)
    }

    /// Invoke an exact method, which must belong to the interface
    pub fn invoke_method(
        &self,
        invoker: &dyn Invoker,
        method: &RemoteMethod,
        args: Bytes,
    ) -> Result<Bytes> {
        if !self.interface.methods.contains(method) {
            return Err(self.unknown_method(&method.to_string()));
        }
        invoker.invoke(&self.reference, method, args)
    }

    fn unknown_method(&self, method: &str) -> WrapperError {
        WrapperError::UnknownMethod {
            interface: self.interface.name.clone(),
            method: method.to_string(),
        }
    }
}
