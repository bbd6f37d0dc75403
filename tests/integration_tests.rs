//! Integration tests using mock HTTP server
//!
//! Tests the full flow: config → CharacterApi → PageCursor → CLI output

use character_cursor::api::{CharacterApi, CharactersResponse};
use character_cursor::cli::{walk, OutputFormat, Redirect};
use character_cursor::config::ApiConfig;
use character_cursor::cursor::{CursorOptions, Direction, PageCursor, ResumeOverride, Transition};
use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::io::Write;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Fixtures
// ============================================================================

fn character(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Female",
        "origin": {"name": "unknown", "url": ""},
        "location": {"name": "Earth (Replacement Dimension)", "url": ""},
        "image": "",
        "episode": ["https://rickandmortyapi.com/api/episode/6"],
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T19:09:56.428Z",
    })
}

fn listing(server_uri: &str, page: u32, pages: u32) -> Value {
    let link = |present: bool, target: u32| {
        if present {
            json!(format!("{server_uri}/api/character?page={target}"))
        } else {
            Value::Null
        }
    };
    json!({
        "info": {
            "count": pages,
            "pages": pages,
            "next": link(page < pages, page + 1),
            "prev": link(page > 1, page.saturating_sub(1)),
        },
        "results": [character(page, &format!("Character {page}"))],
    })
}

/// Serve pages `1..=pages`; any other page gets wiremock's default 404
async fn listing_server(pages: u32) -> MockServer {
    let server = MockServer::start().await;
    for page in 1..=pages {
        Mock::given(method("GET"))
            .and(path("/api/character"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing(
                &server.uri(),
                page,
                pages,
            )))
            .mount(&server)
            .await;
    }
    server
}

fn api_for(server: &MockServer) -> CharacterApi {
    let config = ApiConfig {
        rate_limit: None,
        ..ApiConfig::default().with_base_url(format!("{}/api", server.uri()))
    };
    CharacterApi::from_config(&config).unwrap()
}

fn first_name(page: &CharactersResponse) -> Option<&str> {
    page.names().first().copied()
}

// ============================================================================
// Cursor Integration Tests
// ============================================================================

#[tokio::test]
async fn test_cursor_walks_and_bounces_over_http() {
    let server = listing_server(3).await;
    let mut cursor = PageCursor::new(api_for(&server));

    let mut seen = Vec::new();
    for _ in 0..6 {
        let step = cursor.advance().await;
        assert_eq!(
            first_name(&step.payload),
            Some(format!("Character {}", step.page).as_str())
        );
        seen.push((step.page, step.transition));
    }

    assert_eq!(
        seen,
        vec![
            (1, Transition::Advanced),
            (2, Transition::Advanced),
            (3, Transition::Bounced),
            (2, Transition::Advanced),
            (1, Transition::Bounced),
            (2, Transition::Advanced),
        ]
    );
}

#[tokio::test]
async fn test_cursor_redirect_over_http() {
    let server = listing_server(42).await;
    let mut cursor = PageCursor::with_options(
        api_for(&server),
        CursorOptions::new(10, Direction::Forward),
    );

    let pages = [
        cursor.resume(None).await.page,
        cursor
            .resume(Some(ResumeOverride::to(20, Direction::Backward)))
            .await
            .page,
        cursor.resume(None).await.page,
        cursor.resume(None).await.page,
    ];

    assert_eq!(pages, [10, 11, 20, 19]);
}

#[tokio::test]
async fn test_cursor_holds_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(3)
        .mount(&server)
        .await;

    let mut cursor = PageCursor::with_options(
        api_for(&server),
        CursorOptions::new(5, Direction::Forward),
    );

    for _ in 0..3 {
        let step = cursor.advance().await;
        assert_eq!(step.page, 5);
        assert!(step.degraded());
        assert_eq!(step.payload, CharactersResponse::empty());
    }
}

#[tokio::test]
async fn test_cursor_escapes_missing_page_with_override() {
    let server = listing_server(3).await;
    let mut cursor = PageCursor::with_options(
        api_for(&server),
        CursorOptions::new(9, Direction::Forward),
    );

    let missing = cursor.resume(Some(ResumeOverride::new().page(3))).await;
    assert_eq!(missing.page, 9);
    assert!(missing.degraded());

    let recovered = cursor.advance().await;
    assert_eq!(recovered.page, 3);
    assert_eq!(recovered.transition, Transition::Bounced);
    assert_eq!(cursor.state().current_page, 2);
}

#[tokio::test]
async fn test_cursor_stream_over_http() {
    let server = listing_server(2).await;
    let cursor = PageCursor::new(api_for(&server));

    let names: Vec<String> = cursor
        .into_stream()
        .take(4)
        .map(|step| step.payload.names().join(","))
        .collect()
        .await;

    assert_eq!(
        names,
        vec!["Character 1", "Character 2", "Character 1", "Character 2"]
    );
}

// ============================================================================
// CLI Integration Tests
// ============================================================================

#[tokio::test]
async fn test_walk_json_output() {
    let server = listing_server(5).await;
    let redirects: Vec<Redirect> = vec!["2:1:backward".parse().unwrap()];
    let mut out = Vec::new();

    walk(
        api_for(&server),
        CursorOptions::new(4, Direction::Forward),
        3,
        &redirects,
        OutputFormat::Json,
        &mut out,
    )
    .await
    .unwrap();

    let lines: Vec<Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["page"], 4);
    assert_eq!(lines[1]["page"], 5);
    assert_eq!(lines[1]["transition"], "bounced");
    assert_eq!(lines[2]["page"], 1);
    assert_eq!(lines[2]["transition"], "bounced");
    assert_eq!(lines[2]["payload"][0]["name"], "Character 1");
}

#[tokio::test]
async fn test_config_file_drives_api() {
    let server = listing_server(1).await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "base_url: {}/api\nresource: character\nrate_limit:\n  requests_per_second: 50\n  burst_size: 50",
        server.uri()
    )
    .unwrap();

    let config = ApiConfig::from_file(file.path()).unwrap();
    let api = CharacterApi::from_config(&config).unwrap();
    let page = api.fetch_characters(Some(1)).await;

    assert_eq!(page.names(), vec!["Character 1"]);
    assert!(page.info.is_some());
}
