//! Tests for the character API module

use super::*;
use crate::config::ApiConfig;
use crate::cursor::{BoundaryMarkers, FetchOutcome, PageSource, Paginated};
use crate::http::{HttpClient, HttpClientConfig};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn character_json(id: u64, name: &str, species: &str, episodes: usize) -> Value {
    let episode: Vec<String> = (1..=episodes)
        .map(|e| format!("https://rickandmortyapi.com/api/episode/{e}"))
        .collect();
    json!({
        "id": id,
        "name": name,
        "status": "Alive",
        "species": species,
        "type": "",
        "gender": "Male",
        "origin": {"name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1"},
        "location": {"name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3"},
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": episode,
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z",
    })
}

fn listing_json(page: u32, pages: u32, names: &[&str]) -> Value {
    let link = |present: bool, target: u32| {
        if present {
            json!(format!("https://rickandmortyapi.com/api/character?page={target}"))
        } else {
            Value::Null
        }
    };
    let results: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| character_json(i as u64 + 1, name, "Human", i + 1))
        .collect();
    json!({
        "info": {
            "count": pages * 20,
            "pages": pages,
            "next": link(page < pages, page + 1),
            "prev": link(page > 1, page.saturating_sub(1)),
        },
        "results": results,
    })
}

fn api_for(server: &MockServer) -> CharacterApi {
    let config = HttpClientConfig::builder()
        .base_url(format!("{}/api", server.uri()))
        .no_rate_limit()
        .build();
    CharacterApi::new(HttpClient::with_config(config).unwrap(), "/character/")
}

// ============================================================================
// Model Tests
// ============================================================================

#[test]
fn test_character_decodes_wire_shape() {
    let character: Character =
        serde_json::from_value(character_json(1, "Rick Sanchez", "Human", 51)).unwrap();

    assert_eq!(character.id, 1);
    assert_eq!(character.name, "Rick Sanchez");
    assert_eq!(character.kind, "");
    assert_eq!(character.origin.name, "Earth (C-137)");
    assert_eq!(character.episode.len(), 51);
    assert_eq!(character.created.to_rfc3339(), "2017-11-04T18:48:46.250+00:00");
}

#[test]
fn test_listing_boundary_markers() {
    let first: CharactersResponse =
        serde_json::from_value(listing_json(1, 42, &["Rick Sanchez"])).unwrap();
    assert_eq!(
        first.boundary_markers(),
        Some(BoundaryMarkers::new(true, false))
    );

    let middle: CharactersResponse = serde_json::from_value(listing_json(7, 42, &[])).unwrap();
    assert_eq!(
        middle.boundary_markers(),
        Some(BoundaryMarkers::new(true, true))
    );

    let last: CharactersResponse = serde_json::from_value(listing_json(42, 42, &[])).unwrap();
    assert_eq!(
        last.boundary_markers(),
        Some(BoundaryMarkers::new(false, true))
    );
}

#[test]
fn test_missing_info_has_no_markers() {
    let page: CharactersResponse = serde_json::from_value(json!({"results": []})).unwrap();
    assert_eq!(page.boundary_markers(), None);
    assert_eq!(page, CharactersResponse::empty());
    assert_eq!(CharactersResponse::default(), CharactersResponse::empty());
}

#[test]
fn test_empty_link_is_not_a_boundary() {
    let page = CharactersResponse {
        info: Some(PageInfo {
            count: 1,
            pages: 1,
            next: Some(String::new()),
            prev: None,
        }),
        results: Vec::new(),
    };
    assert_eq!(
        page.boundary_markers(),
        Some(BoundaryMarkers::new(false, false))
    );
}

#[test]
fn test_empty_page_serializes_without_info() {
    let value = serde_json::to_value(CharactersResponse::empty()).unwrap();
    assert_eq!(value, json!({"results": []}));
}

#[test]
fn test_names_and_summaries() {
    let page: CharactersResponse =
        serde_json::from_value(listing_json(1, 1, &["Rick Sanchez", "Morty Smith"])).unwrap();

    assert_eq!(page.len(), 2);
    assert!(!page.is_empty());
    assert_eq!(page.names(), vec!["Rick Sanchez", "Morty Smith"]);
    assert_eq!(
        page.summaries(),
        vec![
            CharacterSummary {
                name: "Rick Sanchez".to_string(),
                species: "Human".to_string(),
                episodes_count: 1,
            },
            CharacterSummary {
                name: "Morty Smith".to_string(),
                species: "Human".to_string(),
                episodes_count: 2,
            },
        ]
    );
}

// ============================================================================
// Service Tests
// ============================================================================

#[test]
fn test_resource_is_trimmed() {
    let api = CharacterApi::new(HttpClient::new().unwrap(), "/character/");
    assert_eq!(api.resource(), "character");
}

#[test]
fn test_from_config_validates() {
    assert!(CharacterApi::from_config(&ApiConfig::default()).is_ok());

    let bad = ApiConfig::default().with_base_url("rickandmortyapi.com");
    assert!(CharacterApi::from_config(&bad).is_err());
}

#[tokio::test]
async fn test_fetch_page_requests_page_number() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listing_json(2, 42, &["Summer Smith"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let page = match api.fetch_page(2).await {
        FetchOutcome::Fetched(page) => page,
        other => panic!("Expected Fetched, got {other:?}"),
    };
    assert_eq!(page.names(), vec!["Summer Smith"]);
    assert_eq!(
        page.boundary_markers(),
        Some(BoundaryMarkers::new(true, true))
    );
}

#[tokio::test]
async fn test_fetch_characters_without_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .and(query_param_is_missing("page"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listing_json(1, 42, &["Rick Sanchez"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let page = api.fetch_characters(None).await;

    assert_eq!(page.names(), vec!["Rick Sanchez"]);
}

#[tokio::test]
async fn test_http_error_degrades_to_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "There is nothing here"})),
        )
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);

    match api.fetch_page(99).await {
        FetchOutcome::Degraded { payload, reason } => {
            assert_eq!(payload, CharactersResponse::empty());
            assert!(reason.contains("404"), "reason: {reason}");
        }
        other => panic!("Expected Degraded, got {other:?}"),
    }

    let page = api.fetch_characters(Some(99)).await;
    assert!(page.is_empty());
    assert!(page.info.is_none());

    assert!(api.try_fetch_characters(Some(99)).await.is_err());
}

#[tokio::test]
async fn test_malformed_body_degrades_to_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let outcome = api.fetch_page(1).await;

    assert!(outcome.is_degraded());
    assert_eq!(outcome.into_payload(), CharactersResponse::empty());
}

#[tokio::test]
async fn test_unreachable_host_degrades_to_empty_page() {
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:1/api")
        .timeout(std::time::Duration::from_secs(2))
        .no_rate_limit()
        .build();
    let api = CharacterApi::new(HttpClient::with_config(config).unwrap(), "character");

    let outcome = api.fetch_page(1).await;
    assert!(outcome.is_degraded());
    assert!(outcome.into_payload().info.is_none());
}
