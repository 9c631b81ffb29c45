//! Unicast reference wrapper for RMI enumeration
//!
//! Sits between the naming service lookup and the reporting layers of an
//! RMI enumeration tool:
//!
//! ```text
//! lookup ──(name, RemoteObject)──▶ UnicastWrapper::new ──▶ classify ──▶ reports
//!                                   │
//!                                   └─ jrmp::introspect (object id, endpoint, factories)
//! ```
//!
//! # Modules
//!
//! - [`wrapper`]: `UnicastWrapper` and its derived accessors
//! - [`object`]: remote object handles (stubs and synthetic proxies)
//! - [`proxy`]: dispatch adapter forwarding interface calls to a reference
//! - [`tls`]: client socket factory heuristic
//! - [`duplicates`]: grouping of bindings by implementation type
//! - [`bindings`]: bulk wrapping of lookup results

pub mod bindings;
pub mod duplicates;
pub mod object;
pub mod proxy;
pub mod tls;
pub mod wrapper;

mod error;

pub use bindings::{wrap_bindings, BindingConfig, BindingReport, SkippedBinding};
pub use duplicates::{classify, has_duplicates};
pub use error::{Result, WrapperError};
pub use object::{RemoteObject, RemoteStub};
pub use proxy::{Invoker, RemoteInterface, RemoteMethod, RemoteProxy};
pub use tls::TlsStatus;
pub use wrapper::UnicastWrapper;
