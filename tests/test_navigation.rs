mod common;

use camino::Utf8PathBuf;
use chemcaster::errors::FileIOError;
use chemcaster::*;
use common::*;
use httpmock::prelude::*;
use rstest::*;
use serde_json::{json, Value};

#[fixture]
fn server() -> MockServer {
    MockServer::start()
}

async fn open_registry(server: &MockServer) -> Linked<Registry> {
    server.mock(|when, then| {
        when.method(GET).path("/registries/1");
        then.status(200)
            .json_body(registry_json(server, 1, "FIPCO Stockroom", false));
    });
    Linked::open(&client(), server.url("/registries/1"), credentials())
        .await
        .unwrap()
}

// ========================================
//                 SERVICE
// ========================================

#[rstest]
#[tokio::test]
async fn test_connect(server: MockServer) {
    let (service_mock, index_mock) =
        mock_service(&server, &[("FIPCO Stockroom", 1), ("Reagents", 2)]);
    let url = ServiceUrl::new(server.url("/rest")).unwrap();
    let service = client().connect(Some(&url), credentials()).await.unwrap();
    service_mock.assert();
    assert_eq!(service.version(), Some("0.1.4"));
    assert_eq!(service.uri().as_str(), server.url("/rest"));

    let registries = service.registries().await.unwrap();
    index_mock.assert();
    assert_eq!(
        registries,
        vec![
            NamedUri {
                name: "FIPCO Stockroom".to_string(),
                uri: ResourceUri::new(server.url("/registries/1")),
            },
            NamedUri {
                name: "Reagents".to_string(),
                uri: ResourceUri::new(server.url("/registries/2")),
            },
        ]
    );
}

#[rstest]
#[tokio::test]
async fn test_registry_named(server: MockServer) {
    mock_service(&server, &[("FIPCO Stockroom", 1), ("Reagents", 2)]);
    server.mock(|when, then| {
        when.method(GET)
            .path("/registries/2")
            .header("authorization", AUTHORIZATION);
        then.status(200)
            .json_body(registry_json(&server, 2, "Reagents", true));
    });
    let url = ServiceUrl::new(server.url("/rest")).unwrap();
    let service = client().connect(Some(&url), credentials()).await.unwrap();
    let registry = service.registry_named("Reagents").await.unwrap();
    assert_eq!(registry.name(), Some("Reagents"));
    assert_eq!(registry.is_deletable(), Some(true));

    let error = service.registry_named("Nonexistent").await.unwrap_err();
    assert!(matches!(error, ChemcasterError::NotFoundNamed(name) if name == "Nonexistent"));
}

#[rstest]
#[tokio::test]
async fn test_create_rename_delete_registry(server: MockServer) {
    mock_service(&server, &[]);
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/registries/create")
            .json_body(json!({"registry": {"name": "Reagents", "deletable": false}}));
        then.status(201)
            .header("Location", server.url("/registries/9"))
            .json_body(registry_json(&server, 9, "Reagents", false));
    });
    let rename = server.mock(|when, then| {
        when.method(PUT)
            .path("/registries/9")
            .json_body(json!({"registry": {"name": "Stockroom", "deletable": false}}));
        then.status(200)
            .json_body(registry_json(&server, 9, "Stockroom", false));
    });
    let mark_deletable = server.mock(|when, then| {
        when.method(PUT)
            .path("/registries/9")
            .json_body(json!({"registry": {"name": "Stockroom", "deletable": true}}));
        then.status(200)
            .json_body(registry_json(&server, 9, "Stockroom", true));
    });
    let destroy = server.mock(|when, then| {
        when.method(DELETE).path("/registries/9");
        then.status(200)
            .json_body(registry_json(&server, 9, "Stockroom", true));
    });

    let url = ServiceUrl::new(server.url("/rest")).unwrap();
    let service = client().connect(Some(&url), credentials()).await.unwrap();
    let registry = service.create_registry("Reagents", false).await.unwrap();
    create.assert();
    assert_eq!(registry.uri().as_str(), server.url("/registries/9"));

    let registry = registry.rename("Stockroom").await.unwrap();
    rename.assert();
    assert_eq!(registry.name(), Some("Stockroom"));

    let deleted = registry.delete().await.unwrap();
    mark_deletable.assert();
    destroy.assert();
    assert_eq!(deleted.is_deletable(), Some(true));
}

#[rstest]
#[tokio::test]
async fn test_set_deletable_keeps_absent_name(server: MockServer) {
    let mut unnamed = registry_json(&server, 3, "", false);
    unnamed["registry"]["name"] = Value::Null;
    server.mock(|when, then| {
        when.method(GET).path("/registries/3");
        then.status(200).json_body(unnamed.clone());
    });
    let update = server.mock(|when, then| {
        when.method(PUT)
            .path("/registries/3")
            .json_body(json!({"registry": {"deletable": true}}));
        then.status(200).json_body(unnamed.clone());
    });
    let registry: Linked<Registry> =
        Linked::open(&client(), server.url("/registries/3"), credentials())
            .await
            .unwrap();
    assert_eq!(registry.name(), None);
    registry.set_deletable(true).await.unwrap();
    update.assert();
}

#[rstest]
#[tokio::test]
async fn test_missing_link(server: MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/registries/5");
        then.status(200)
            .json_body(json!({"registry": {"name": "Bare"}}));
    });
    let registry: Linked<Registry> =
        Linked::open(&client(), server.url("/registries/5"), credentials())
            .await
            .unwrap();
    assert!(matches!(
        registry.queries().await.unwrap_err(),
        ChemcasterError::MissingLink("queries")
    ));
}

// ========================================
//                 QUERIES
// ========================================

#[rstest]
#[tokio::test]
async fn test_query_execution(server: MockServer) {
    let registry = open_registry(&server).await;
    server.mock(|when, then| {
        when.method(GET).path("/registries/1/queries");
        then.status(200).json_body(json!({
            "items": [],
            "create": block(&server, Kind::Query, "create", "/registries/1/queries/create")
        }));
    });
    let query_json = json!({
        "query": {"mode": "substructure", "serialization": "c1ccccc1"},
        "executions": block(&server, Kind::Index, "executions", "/queries/4/executions"),
        "registry": block(&server, Kind::Registry, "registry", "/registries/1"),
        "destroy": block(&server, Kind::Query, "destroy", "/queries/4")
    });
    let create_query = server.mock(|when, then| {
        when.method(POST)
            .path("/registries/1/queries/create")
            .json_body(json!({"query": {"mode": "substructure", "serialization": "c1ccccc1"}}));
        then.status(201).json_body(query_json.clone());
    });
    server.mock(|when, then| {
        when.method(GET).path("/queries/4/executions");
        then.status(200).json_body(json!({
            "items": [],
            "create": block(&server, Kind::Execution, "create", "/queries/4/executions/create")
        }));
    });
    let substance = |id: u32| {
        block(
            &server,
            Kind::Substance,
            &format!("benzene {}", id),
            &format!("/substances/{}", id),
        )
    };
    let execution_json = |cursor: &str, next: &str| {
        json!({
            "execution": {"cursor": cursor, "next_cursor": next, "maximum_results": 2, "reverse": false},
            "executable": block(&server, Kind::Query, "query", "/queries/4"),
            "substances": [[substance(1)], [substance(2), substance(3)]],
            "index": block(&server, Kind::Index, "executions", "/queries/4/executions")
        })
    };
    let execute = server.mock(|when, then| {
        when.method(POST)
            .path("/queries/4/executions/create")
            .json_body(json!({"execution": {"maximum_results": 2}}));
        then.status(201).json_body(execution_json("", "page2"));
    });
    let next = server.mock(|when, then| {
        when.method(POST)
            .path("/queries/4/executions/create")
            .json_body(json!({"execution": {"maximum_results": 2, "cursor": "page2", "reverse": false}}));
        then.status(201).json_body(execution_json("page2", "page3"));
    });

    let query = registry.create_query("substructure", "c1ccccc1").await.unwrap();
    create_query.assert();
    assert_eq!(query.mode(), Some("substructure"));

    let execution = query.execute(2).await.unwrap();
    execute.assert();
    assert_eq!(execution.maximum_results(), Some(2));
    let hits: Vec<_> = execution.substances().into_iter().map(|s| s.name).collect();
    assert_eq!(hits, vec!["benzene 1", "benzene 2"]);

    let cursor = execution.next_cursor().unwrap().to_string();
    let execution = execution.next_results(&cursor, false, 2).await.unwrap();
    next.assert();
    assert_eq!(execution.cursor(), Some("page2"));
    assert_eq!(execution.next_cursor(), Some("page3"));
}

// ========================================
//                 REGISTRATIONS
// ========================================

#[rstest]
#[tokio::test]
async fn test_register(server: MockServer) {
    let registry = open_registry(&server).await;
    server.mock(|when, then| {
        when.method(GET).path("/registries/1/registrations");
        then.status(200).json_body(json!({
            "items": [],
            "create": block(&server, Kind::Registration, "create", "/registries/1/registrations/create")
        }));
    });
    let register = server.mock(|when, then| {
        when.method(POST)
            .path("/registries/1/registrations/create")
            .json_body(json!({"registration": {"templates": [{"serialization": "CCO", "multiplier": 1.0}]}}));
        then.status(201).json_body(json!({
            "registration": {"templates": [{"serialization": "CCO", "multiplier": 1}]},
            "substance": block(&server, Kind::Substance, "substance", "/substances/8")
        }));
    });
    let registration = registry.register("CCO", 1.0).await.unwrap();
    register.assert();
    assert_eq!(registration.serialization().as_deref(), Some("CCO"));
    assert_eq!(registration.multiplier(), Some(1.0));
}

// ========================================
//                 LOGS
// ========================================

#[rstest]
#[tokio::test]
async fn test_log_events(server: MockServer) {
    server.mock(|when, then| {
        when.method(GET)
            .path("/logs/1")
            .header("accept", media_type(Kind::Log));
        then.status(200).json_body(json!({
            "log": {"created_at": "2009-06-01 00:00:00 UTC", "interval": 86400},
            "events": [
                {
                    "resource": block(&server, Kind::Query, "query", "/queries/4"),
                    "logged_at": "2009-06-01 12:00:00 UTC"
                },
                {
                    "resource": block(&server, Kind::Registry, "registry", "/registries/1"),
                    "logged_at": "2009-06-01 13:00:00 UTC"
                }
            ]
        }));
    });
    let query_mock = server.mock(|when, then| {
        when.method(GET).path("/queries/4");
        then.status(200)
            .json_body(json!({"query": {"mode": "exact", "serialization": "CCO"}}));
    });
    let log: Linked<Log> = Linked::open(&client(), server.url("/logs/1"), credentials())
        .await
        .unwrap();
    assert_eq!(log.interval(), Some(86400));
    assert_eq!(log.query_events().len(), 1);
    assert_eq!(log.registry_events().len(), 1);
    assert!(log.archive_events().is_empty());

    let event = &log.query_events()[0];
    let query: Linked<Query> = log.event_resource(event).await.unwrap();
    query_mock.assert();
    assert_eq!(query.mode(), Some("exact"));

    let error = log.event_resource::<Registry>(event).await.unwrap_err();
    assert!(matches!(error, ChemcasterError::UnexpectedMediaType { .. }));
    query_mock.assert_hits(1);
}

// ========================================
//                 ARCHIVES
// ========================================

#[rstest]
#[tokio::test]
async fn test_archive_download(server: MockServer) {
    let registry = open_registry(&server).await;
    server.mock(|when, then| {
        when.method(GET).path("/registries/1/archives");
        then.status(200).json_body(json!({
            "items": [],
            "create": block(&server, Kind::Archive, "create", "/registries/1/archives/create")
        }));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/registries/1/archives/create")
            .json_body(json!({"archive": {}}));
        then.status(201).json_body(json!({
            "archive": {"created_at": "Wed, 15 Jul 2009 08:00:00 -0400", "done": true},
            "zipfile": {
                "name": "zipfile",
                "uri": server.url("/archives/1.zip"),
                "media_type": "application/zip"
            }
        }));
    });
    let zip_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/archives/1.zip")
            .header("accept", "application/zip");
        then.status(200).body(b"PK\x03\x04data");
    });

    let archive = registry.create_archive().await.unwrap();
    assert_eq!(archive.is_done(), Some(true));
    assert!(archive.created_at().unwrap().is_some());

    let dir = tempfile::tempdir().unwrap();
    let dst = Utf8PathBuf::from_path_buf(dir.path().join("registry.zip")).unwrap();
    archive.download(&dst, false).await.unwrap();
    assert_eq!(fs_err::read(&dst).unwrap(), b"PK\x03\x04data");

    let error = archive.download(&dst, false).await.unwrap_err();
    assert!(matches!(error, FileIOError::IO(_)));
    assert_eq!(fs_err::read(&dst).unwrap(), b"PK\x03\x04data");
    zip_mock.assert_hits(2);

    let zip = archive.zipfile().await.unwrap();
    assert_eq!(zip.data().as_ref(), b"PK\x03\x04data");
}

#[rstest]
#[tokio::test]
async fn test_archive_download_not_found(server: MockServer) {
    let zip_mock = server.mock(|when, then| {
        when.method(GET).path("/archives/2.zip");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path("/archives/2");
        then.status(200).json_body(json!({
            "archive": {"done": true},
            "zipfile": {
                "name": "zipfile",
                "uri": server.url("/archives/2.zip"),
                "media_type": "application/zip"
            }
        }));
    });
    let archive: Linked<Archive> =
        Linked::open(&client(), server.url("/archives/2"), credentials())
            .await
            .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let dst = Utf8PathBuf::from_path_buf(dir.path().join("registry.zip")).unwrap();
    let error = archive.download(&dst, false).await.unwrap_err();
    zip_mock.assert();
    assert!(matches!(
        error,
        FileIOError::Chemcaster(ChemcasterError::NotFound(_))
    ));
    assert!(!dst.exists(), "no file should be left behind by a failed request");
}

// ========================================
//                 IMAGES
// ========================================

#[rstest]
#[tokio::test]
async fn test_image_of_query(server: MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/queries/4");
        then.status(200).json_body(json!({
            "query": {"mode": "exact", "serialization": "CCO"},
            "images": block(&server, Kind::Index, "images", "/queries/4/images")
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/queries/4/images");
        then.status(200).json_body(json!({
            "create": block(&server, Kind::Image, "create", "/queries/4/images/create")
        }));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/queries/4/images/create")
            .json_body(json!({"image": {"width": 300, "height": 200, "format": "png"}}));
        then.status(201).json_body(json!({
            "image": {"width": 300, "height": 200, "format": "png", "data": "iVBORw0KGgo="},
            "imageable": block(&server, Kind::Query, "query", "/queries/4")
        }));
    });
    let query: Linked<Query> = Linked::open(&client(), server.url("/queries/4"), credentials())
        .await
        .unwrap();
    let image = query.create_image(300, 200, "png").await.unwrap();
    assert_eq!(image.width(), Some(300));
    assert_eq!(image.imageable_kind(), Some(Kind::Query));
    assert!(image.structure().await.unwrap().is_none());
    assert!(image.substance().await.unwrap().is_none());
    let depicted = image.query().await.unwrap().unwrap();
    assert_eq!(depicted.serialization(), Some("CCO"));
}
