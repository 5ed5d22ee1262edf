//! Plex client against a scripted local server
//!
//! Covers request headers, retry and backoff behaviour, decoding failures and
//! plex.tv server discovery.

use anyhow::Result;
use plex_tools::config::PlexConfig;
use plex_tools::errors::PlexError;
use plex_tools::plex::PlexClient;

use crate::common::http_server::{Response, TestServer};

const SECTIONS: &str = r#"{
    "MediaContainer": {
        "size": 2,
        "Directory": [
            {"key": "1", "title": "Movies", "type": "movie"},
            {"key": "2", "title": "TV Shows", "type": "show"}
        ]
    }
}"#;

fn config_for(server: &TestServer) -> PlexConfig {
    PlexConfig {
        token: "account-token".to_string(),
        base_url: Some(server.url().to_string()),
        plex_tv_url: server.url().to_string(),
        timeout_seconds: 5,
        max_retries: 3,
        initial_backoff_ms: 10,
        backoff_multiplier: 2.0,
        max_backoff_seconds: 1,
        ..PlexConfig::default()
    }
}

#[test]
fn test_libraries_sends_plex_headers() -> Result<()> {
    let server = TestServer::start();
    server.route("/library/sections", vec![Response::json(SECTIONS)]);

    let client = PlexClient::new(config_for(&server))?;
    let libraries = client.libraries()?;

    assert_eq!(libraries.len(), 2);
    assert_eq!(libraries[1].title, "TV Shows");
    assert_eq!(libraries[1].kind, "show");

    let hits = server.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].token.as_deref(), Some("account-token"));
    assert_eq!(hits[0].accept.as_deref(), Some("application/json"));
    assert_eq!(hits[0].client_identifier.as_deref(), Some("plex-tools"));

    Ok(())
}

#[test]
fn test_library_key_by_title() -> Result<()> {
    let server = TestServer::start();
    server.route("/library/sections", vec![Response::json(SECTIONS)]);

    let client = PlexClient::new(config_for(&server))?;
    assert_eq!(client.library_key_by_title("TV Shows")?, "2");

    match client.library_key_by_title("Music") {
        Err(PlexError::LibraryNotFound { title }) => assert_eq!(title, "Music"),
        other => panic!("expected LibraryNotFound, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_retries_server_errors_then_succeeds() -> Result<()> {
    let server = TestServer::start();
    server.route(
        "/library/sections",
        vec![
            Response::status(500),
            Response::status(503),
            Response::json(SECTIONS),
        ],
    );

    let client = PlexClient::new(config_for(&server))?;
    let libraries = client.libraries()?;

    assert_eq!(libraries.len(), 2);
    assert_eq!(server.hits_for("/library/sections"), 3);

    Ok(())
}

#[test]
fn test_rate_limit_is_retried() -> Result<()> {
    let server = TestServer::start();
    server.route(
        "/library/sections",
        vec![Response::status(429), Response::json(SECTIONS)],
    );

    let client = PlexClient::new(config_for(&server))?;
    client.libraries()?;
    assert_eq!(server.hits_for("/library/sections"), 2);

    Ok(())
}

#[test]
fn test_client_errors_are_not_retried() -> Result<()> {
    let server = TestServer::start();
    server.route("/library/sections", vec![Response::status(404)]);

    let client = PlexClient::new(config_for(&server))?;
    match client.libraries() {
        Err(PlexError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected status error, got {:?}", other),
    }
    assert_eq!(server.hits_for("/library/sections"), 1);

    Ok(())
}

#[test]
fn test_retries_exhausted() -> Result<()> {
    let server = TestServer::start();
    server.route("/library/sections", vec![Response::status(503)]);

    let client = PlexClient::new(config_for(&server))?;
    match client.libraries() {
        Err(PlexError::MaxRetriesExceeded { attempts, .. }) => assert_eq!(attempts, 3),
        other => panic!("expected MaxRetriesExceeded, got {:?}", other),
    }
    assert_eq!(server.hits_for("/library/sections"), 3);

    Ok(())
}

#[test]
fn test_malformed_body_is_a_decode_error() -> Result<()> {
    let server = TestServer::start();
    server.route("/library/sections", vec![Response::json("not json")]);

    let client = PlexClient::new(config_for(&server))?;
    assert!(matches!(
        client.libraries(),
        Err(PlexError::Decode { .. })
    ));
    assert_eq!(server.hits_for("/library/sections"), 1);

    Ok(())
}

#[test]
fn test_server_discovery_and_selection() -> Result<()> {
    let server = TestServer::start();
    let resources = format!(
        r#"[
            {{"name": "Phone", "product": "Plex for iOS", "provides": "client,player", "connections": []}},
            {{
                "name": "Basement",
                "product": "Plex Media Server",
                "provides": "server",
                "clientIdentifier": "abc123",
                "accessToken": "server-token",
                "connections": [{{"uri": "{}", "local": false, "relay": false}}]
            }}
        ]"#,
        server.url()
    );
    server
        .route("/api/v2/resources", vec![Response::json(&resources)])
        .route("/library/sections", vec![Response::json(SECTIONS)]);

    let config = PlexConfig {
        base_url: None,
        ..config_for(&server)
    };
    let mut client = PlexClient::new(config)?;

    let servers = client.servers()?;
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].product, "Plex Media Server");

    assert!(matches!(
        client.server_by_name("Attic"),
        Err(PlexError::ServerNotFound { .. })
    ));

    let basement = client.server_by_name("Basement")?;
    client.use_server(basement)?;
    assert_eq!(client.server_name(), Some("Basement"));

    client.libraries()?;

    let hits = server.hits();
    let discovery = hits
        .iter()
        .find(|h| h.path == "/api/v2/resources")
        .expect("discovery request");
    assert_eq!(discovery.target, "/api/v2/resources?includeHttps=1");
    assert_eq!(discovery.token.as_deref(), Some("account-token"));

    let listing = hits
        .iter()
        .find(|h| h.path == "/library/sections")
        .expect("library request");
    assert_eq!(listing.token.as_deref(), Some("server-token"));

    Ok(())
}
