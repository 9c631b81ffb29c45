//! Wrapper Tests - Reference Extraction Scenarios
//!
//! These tests build wrappers from references that went through the wire
//! framing and check:
//! - Endpoint and object id extraction
//! - The TLS heuristic across factory kinds
//! - Proxy construction from raw references
//! - Failure handling for malformed and activatable references

mod common;

use bytes::{BufMut, Bytes, BytesMut};
use std::cell::Cell;

use common::*;
use jrmp::utf::write_utf;
use jrmp::{ObjId, RefField, SocketFactory, TcpEndpoint, UnicastRef, DEFAULT_REGISTRY_PORT};
use rmi_wrapper::{
    Invoker, RemoteInterface, RemoteMethod, RemoteObject, TlsStatus, UnicastWrapper, WrapperError,
};

#[test]
fn test_wrap_registry_bindings() {
    init_tracing();

    for (name, object) in example_registry() {
        let result = UnicastWrapper::new(object, Some(name.clone()));
        if name == "activation-test" {
            assert!(matches!(result, Err(WrapperError::UnsupportedRef(_))));
            continue;
        }

        let wrapper = result.unwrap();
        assert_eq!(wrapper.bound_name(), Some(name.as_str()));
        assert_eq!(wrapper.host(), "rmi.example.org");
        assert_eq!(wrapper.target(), format!("rmi.example.org:{}", wrapper.port()));
        assert_eq!(wrapper.obj_id().space, server_space());
    }
}

#[test]
fn test_tls_heuristic_per_binding() {
    init_tracing();

    let status: Vec<(String, TlsStatus)> = example_registry()
        .into_iter()
        .filter_map(|(name, object)| {
            UnicastWrapper::new(object, Some(name.clone()))
                .ok()
                .map(|w| (name, w.tls_protection()))
        })
        .collect();

    let expected = [
        ("plain-server", TlsStatus::Plaintext),
        ("ssl-server", TlsStatus::Tls),
        ("plain-server2", TlsStatus::Plaintext),
        ("legacy-service", TlsStatus::Plaintext),
        ("secure-server", TlsStatus::Unknown),
    ];
    assert_eq!(status.len(), expected.len());
    for ((name, got), (want_name, want)) in status.iter().zip(expected) {
        assert_eq!(name, want_name);
        assert_eq!(*got, want, "binding {}", name);
    }
}

#[test]
fn test_explicit_default_factory_is_plaintext() {
    let reference = unicast("10.0.0.1", 1234, 9, Some(&SocketFactory::rmi_default()));
    let wrapper = UnicastWrapper::detached(reference, "x.Detached").unwrap();
    assert!(wrapper.remote_object().is_none());
    assert_eq!(wrapper.tls_protection(), TlsStatus::Plaintext);
    assert_eq!(wrapper.tls_protection().legacy_code(), -1);
}

#[test]
fn test_well_known_registry_reference() {
    let reference = UnicastRef::new(
        &TcpEndpoint::new("127.0.0.1", DEFAULT_REGISTRY_PORT),
        ObjId::registry(),
        None,
    )
    .unwrap();
    let wrapper = UnicastWrapper::detached(reference, "sun.rmi.registry.RegistryImpl_Stub").unwrap();

    assert_eq!(wrapper.target(), "127.0.0.1:1099");
    assert_eq!(wrapper.obj_id().well_known(), Some("registry"));
    assert_eq!(wrapper.tls_protection(), TlsStatus::Unknown);
}

struct CountingInvoker {
    calls: Cell<usize>,
}

impl Invoker for CountingInvoker {
    fn invoke(
        &self,
        reference: &UnicastRef,
        method: &RemoteMethod,
        _args: Bytes,
    ) -> rmi_wrapper::Result<Bytes> {
        self.calls.set(self.calls.get() + 1);
        let parts = jrmp::introspect::extract(reference)?;
        Ok(Bytes::from(format!("{}@{}", method.name, parts.endpoint)))
    }
}

#[test]
fn test_proxy_from_raw_reference() {
    let interface = RemoteInterface::remote("de.qtc.rmg.server.interfaces.IPlainServer")
        .with_method("notRelevant", "()Ljava/lang/String;")
        .with_method("execute", "(Ljava/lang/String;)Ljava/lang/String;");
    let reference = unicast("rmi.example.org", 40123, 101, None);

    let wrapper = UnicastWrapper::from_ref(reference, &interface).unwrap();
    assert_eq!(wrapper.bound_name(), None);
    assert_eq!(wrapper.type_name(), interface.name());
    assert_eq!(wrapper.tls_protection(), TlsStatus::Plaintext);

    let proxy = match wrapper.remote_object() {
        Some(RemoteObject::Proxy(proxy)) => proxy,
        other => panic!("expected proxy, got {:?}", other),
    };

    let invoker = CountingInvoker { calls: Cell::new(0) };
    let out = proxy.invoke(&invoker, "execute", Bytes::new()).unwrap();
    assert_eq!(&out[..], b"execute@rmi.example.org:40123");

    assert!(proxy.invoke(&invoker, "shutdown", Bytes::new()).is_err());
    assert_eq!(invoker.calls.get(), 1);
}

#[test]
fn test_proxy_for_non_remote_interface() {
    let reference = unicast("rmi.example.org", 40123, 101, None);
    let err = UnicastWrapper::from_ref(reference, &RemoteInterface::local("java.io.Serializable"))
        .unwrap_err();
    assert!(matches!(err, WrapperError::InvalidInterface(_)));
}

#[test]
fn test_malformed_reference_fails_only_that_wrapper() {
    let mut body = BytesMut::new();
    body.put_u8(1);
    write_utf(&mut body, "rmi.example.org").unwrap();
    body.put_i32(40127);
    // factory descriptor cut short
    body.put_u16(40);

    let broken = stub("x.Broken_Stub", &[], raw_unicast2(&body));
    let err = UnicastWrapper::new(broken, Some("broken".to_string())).unwrap_err();
    match err {
        WrapperError::Introspection(e) => assert_eq!(e.field, RefField::ClientSocketFactory),
        other => panic!("expected introspection error, got {:?}", other),
    }

    let healthy = stub("x.Healthy_Stub", &[], unicast("rmi.example.org", 40128, 7, None));
    assert!(UnicastWrapper::new(healthy, Some("healthy".to_string())).is_ok());
}
