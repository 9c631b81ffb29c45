//! Shared fixtures for integration tests
//!
//! Builds stubs the way they arrive from a registry lookup: the reference is
//! written to bytes with its class name and read back with
//! `RemoteRef::decode`, so every test goes through the wire framing.

#![allow(dead_code)]

use std::sync::Once;

use bytes::{BufMut, BytesMut};
use jrmp::utf::write_utf;
use jrmp::{ObjId, RemoteRef, SocketFactory, TcpEndpoint, Uid, UnicastRef};
use rmi_wrapper::{RemoteObject, RemoteStub};

static INIT: Once = Once::new();

/// Install a tracing subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Address space shared by all objects of the fake server
pub fn server_space() -> Uid {
    Uid::new(0x5d2f1a7b, 1_718_000_000_000, -32767)
}

/// Decode a reference as if it had been read off the wire
pub fn wire_ref(reference: &RemoteRef) -> RemoteRef {
    let mut buf = BytesMut::new();
    reference.encode(&mut buf).expect("encode reference");
    RemoteRef::decode(&mut buf.freeze()).expect("decode reference")
}

/// Unicast reference to `obj_num` on `host:port`
pub fn unicast(host: &str, port: u16, obj_num: i64, csf: Option<&SocketFactory>) -> UnicastRef {
    let reference = UnicastRef::new(
        &TcpEndpoint::new(host, port),
        ObjId::new(obj_num, server_space()),
        csf,
    )
    .expect("build reference");
    match wire_ref(&RemoteRef::from(reference)) {
        RemoteRef::Unicast(u) => u,
        other => panic!("unexpected reference kind {}", other.kind()),
    }
}

/// Stub of `class_name` implementing `interfaces`
pub fn stub(class_name: &str, interfaces: &[&str], reference: impl Into<RemoteRef>) -> RemoteObject {
    RemoteStub::new(
        class_name,
        interfaces.iter().map(|s| s.to_string()).collect(),
        reference,
    )
    .into()
}

/// Raw `UnicastRef2` reference with a hand-written live reference body
pub fn raw_unicast2(body: &[u8]) -> RemoteRef {
    let mut buf = BytesMut::new();
    write_utf(&mut buf, "UnicastRef2").expect("write class name");
    buf.put_slice(body);
    RemoteRef::decode(&mut buf.freeze()).expect("decode reference")
}

/// Raw activatable reference
pub fn raw_activatable() -> RemoteRef {
    let mut buf = BytesMut::new();
    write_utf(&mut buf, "ActivatableRef").expect("write class name");
    buf.put_slice(&[0xac, 0xed, 0x00, 0x05]);
    RemoteRef::decode(&mut buf.freeze()).expect("decode reference")
}

/// Bindings of a typical example server, in registry listing order
pub fn example_registry() -> Vec<(String, RemoteObject)> {
    let ssl = SocketFactory::ssl_client();
    vec![
        (
            "plain-server".to_string(),
            stub(
                "jdk.proxy2.$Proxy3",
                &["de.qtc.rmg.server.interfaces.IPlainServer"],
                unicast("rmi.example.org", 40123, 101, None),
            ),
        ),
        (
            "ssl-server".to_string(),
            stub(
                "jdk.proxy2.$Proxy4",
                &["de.qtc.rmg.server.interfaces.ISslServer"],
                unicast("rmi.example.org", 40124, 102, Some(&ssl)),
            ),
        ),
        (
            "plain-server2".to_string(),
            stub(
                "jdk.proxy2.$Proxy5",
                &["de.qtc.rmg.server.interfaces.IPlainServer"],
                unicast("rmi.example.org", 40123, 103, None),
            ),
        ),
        (
            "legacy-service".to_string(),
            stub(
                "de.qtc.rmg.server.legacy.LegacyServiceImpl_Stub",
                &["de.qtc.rmg.server.legacy.LegacyService"],
                unicast("rmi.example.org", 40125, 104, None),
            ),
        ),
        (
            "activation-test".to_string(),
            stub("de.qtc.rmg.server.activation.ActivationServer_Stub", &[], raw_activatable()),
        ),
        (
            "secure-server".to_string(),
            stub(
                "jdk.proxy2.$Proxy6",
                &["de.qtc.rmg.server.interfaces.ISecureServer"],
                unicast(
                    "rmi.example.org",
                    40126,
                    105,
                    Some(&SocketFactory::new("de.qtc.rmg.server.utils.CustomSocketFactory")),
                ),
            ),
        ),
    ]
}
