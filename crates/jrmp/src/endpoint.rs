//! TCP endpoints and socket factory descriptors
//!
//! A live reference names the transport address of its exporter as a
//! `TcpEndpoint`. Exporters may also attach a client socket factory that
//! decides how the connection is built, most notably whether TLS is used.

use bytes::BufMut;
use std::fmt;

use crate::error::Result;
use crate::utf::write_utf;

/// Endpoint wire formats (sun.rmi.transport.tcp.TCPEndpoint)
pub mod endpoint_format {
    /// Host and port only
    pub const FORMAT_HOST_PORT: u8 = 0;
    /// Host, port and an embedded client socket factory
    pub const FORMAT_HOST_PORT_FACTORY: u8 = 1;
}

/// Well-known socket factory class names
pub mod factory_class {
    /// Standard TLS client socket factory
    pub const SSL_CLIENT: &str = "javax.rmi.ssl.SslRMIClientSocketFactory";
    /// Standard (plaintext) default socket factory
    pub const RMI_DEFAULT: &str = "java.rmi.server.RMISocketFactory";
}

/// TCP transport address of a remote object's exporter
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TcpEndpoint {
    /// Host name or address as announced by the exporter
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl TcpEndpoint {
    /// Create a new endpoint
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Host name
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port number
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Write `host:UTF, port:i32`
    pub(crate) fn encode_host_port<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        write_utf(buf, &self.host)?;
        buf.put_i32(self.port as i32);
        Ok(())
    }
}

impl fmt::Display for TcpEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Opaque socket factory handle, identified by its concrete class
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SocketFactory {
    class_name: String,
}

impl SocketFactory {
    /// Create a descriptor for a factory of the given concrete class
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }

    /// The standard TLS client socket factory
    pub fn ssl_client() -> Self {
        Self::new(factory_class::SSL_CLIENT)
    }

    /// The standard default socket factory
    pub fn rmi_default() -> Self {
        Self::new(factory_class::RMI_DEFAULT)
    }

    /// Fully qualified name of the factory's concrete class
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Concrete class is exactly the standard TLS client factory.
    /// Subclasses do not count.
    pub fn is_standard_tls(&self) -> bool {
        self.class_name == factory_class::SSL_CLIENT
    }

    /// Concrete class is exactly the standard default factory
    pub fn is_standard_default(&self) -> bool {
        self.class_name == factory_class::RMI_DEFAULT
    }
}

impl fmt::Display for SocketFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name)
    }
}
