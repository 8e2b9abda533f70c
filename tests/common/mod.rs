#![allow(dead_code)]

use chemcaster::{ChemcasterClient, Credentials, Kind, Link};
use httpmock::{prelude::*, Mock};
use serde_json::{json, Value};

/// `alice:s3cret` in base64
pub const AUTHORIZATION: &str = "Basic YWxpY2U6czNjcmV0";

pub fn credentials() -> Credentials {
    Credentials::new("alice", "s3cret")
}

pub fn client() -> ChemcasterClient {
    ChemcasterClient::new().unwrap()
}

pub fn media_type(kind: Kind) -> String {
    kind.media_type().to_string()
}

/// A resource block pointing into the mock server.
pub fn block(server: &MockServer, kind: Kind, name: &str, path: &str) -> Value {
    json!({
        "name": name,
        "uri": server.url(path),
        "media_type": media_type(kind)
    })
}

pub fn link(server: &MockServer, kind: Kind, path: &str) -> Link {
    Link::to_kind(kind, server.url(path), credentials())
}

/// A registry called `name` served under `/registries/{id}`.
pub fn registry_json(server: &MockServer, id: u32, name: &str, deletable: bool) -> Value {
    let path = |suffix: &str| format!("/registries/{}{}", id, suffix);
    json!({
        "registry": {"name": name, "deletable": deletable},
        "service": block(server, Kind::Service, "service", "/rest"),
        "queries": block(server, Kind::Index, "queries", &path("/queries")),
        "structures": block(server, Kind::Index, "structures", &path("/structures")),
        "substances": block(server, Kind::Index, "substances", &path("/substances")),
        "archives": block(server, Kind::Index, "archives", &path("/archives")),
        "registrations": block(server, Kind::Index, "registrations", &path("/registrations")),
        "logs": block(server, Kind::Index, "logs", &path("/logs")),
        "index": block(server, Kind::Index, "registries", "/registries"),
        "update": block(server, Kind::Registry, "update", &path("")),
        "destroy": block(server, Kind::Registry, "destroy", &path(""))
    })
}

/// Serve the service representation at `/rest` and a one-page registry index at `/registries`.
pub fn mock_service<'a>(
    server: &'a MockServer,
    registries: &[(&str, u32)],
) -> (Mock<'a>, Mock<'a>) {
    let service = server.mock(|when, then| {
        when.method(GET)
            .path("/rest")
            .header("accept", media_type(Kind::Service))
            .header("authorization", AUTHORIZATION);
        then.status(200).json_body(json!({
            "service": {"version": "0.1.4"},
            "registries": block(server, Kind::Index, "registries", "/registries")
        }));
    });
    let items: Vec<Value> = registries
        .iter()
        .map(|(name, id)| block(server, Kind::Registry, name, &format!("/registries/{}", id)))
        .collect();
    let index = server.mock(|when, then| {
        when.method(GET)
            .path("/registries")
            .header("accept", media_type(Kind::Index));
        then.status(200).json_body(json!({
            "items": items,
            "create": block(server, Kind::Registry, "create", "/registries/create"),
            "parent": block(server, Kind::Service, "service", "/rest")
        }));
    });
    (service, index)
}
