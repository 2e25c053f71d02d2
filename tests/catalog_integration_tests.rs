use std::sync::Arc;

use dashhead::catalog::{
    CatalogError, CatalogLookup, EntityLookup, HttpProjectSource, LookupError, ProjectSource,
};
use dashhead::core::config::HeaderConfig;
use dashhead::core::header::Header;
use dashhead::core::route::Route;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const PROJECTS_JSON: &str = r#"[
  { "id": 7, "name": "Harbour Fit-out", "startDate": "2024-03-05",
    "endDate": "2024-06-30", "status": "Active", "venue": { "name": "Pier 4" } },
  { "id": 9, "name": "Library Annex", "startDate": "2023-11-20",
    "endDate": "2024-02-01", "status": "Closed", "venue": { "name": "Old Town" } }
]"#;

/// Starts a mock server answering `GET /projects.json` with the given response.
async fn serve(response: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects.json"))
        .respond_with(response)
        .mount(&mock_server)
        .await;
    mock_server
}

fn source_for(server: &MockServer) -> HttpProjectSource {
    HttpProjectSource::new(format!("{}/projects.json", server.uri()))
}

fn parse(path: &str) -> Route {
    Route::parse(path, "/projects")
}

// ============================================================================
// HTTP Project Source Tests
// ============================================================================

#[tokio::test]
async fn test_http_source_fetches_collection() {
    let server = serve(ResponseTemplate::new(200).set_body_string(PROJECTS_JSON)).await;
    let source = source_for(&server);

    let projects = source.fetch_projects().await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "Harbour Fit-out");
    assert_eq!(projects[1].venue.name, "Old Town");
}

#[tokio::test]
async fn test_http_source_maps_error_status() {
    let server = serve(ResponseTemplate::new(404).set_body_string("not here")).await;
    let source = source_for(&server);

    let err = source.fetch_projects().await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::Api {
            status: 404,
            message: "not here".to_string()
        }
    );
}

#[tokio::test]
async fn test_http_source_rejects_malformed_body() {
    let server = serve(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
    let source = source_for(&server);

    let err = source.fetch_projects().await.unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[tokio::test]
async fn test_http_source_unreachable_is_network_error() {
    // Nothing listens on port 9 locally
    let source = HttpProjectSource::new("http://127.0.0.1:9/projects.json".to_string());
    let err = source.fetch_projects().await.unwrap_err();
    assert!(matches!(err, CatalogError::Network(_)));
}

// ============================================================================
// Lookup Over HTTP
// ============================================================================

#[tokio::test]
async fn test_catalog_lookup_over_http() {
    let server = serve(ResponseTemplate::new(200).set_body_string(PROJECTS_JSON)).await;
    let lookup = CatalogLookup::new(Arc::new(source_for(&server)));

    assert_eq!(
        lookup.lookup("9").await.unwrap(),
        Some("Library Annex".to_string())
    );
    assert_eq!(lookup.lookup("1234").await.unwrap(), None);
}

#[tokio::test]
async fn test_catalog_lookup_server_failure_is_unavailable() {
    let server = serve(ResponseTemplate::new(500).set_body_string("boom")).await;
    let lookup = CatalogLookup::new(Arc::new(source_for(&server)));

    let err = lookup.lookup("7").await.unwrap_err();
    assert!(matches!(err, LookupError::Unavailable(_)));
}

// ============================================================================
// Header End To End
// ============================================================================

#[tokio::test]
async fn test_header_resolves_detail_title_from_server() {
    let server = serve(ResponseTemplate::new(200).set_body_string(PROJECTS_JSON)).await;
    let lookup = CatalogLookup::new(Arc::new(source_for(&server)));
    let mut header = Header::mount(&HeaderConfig::default()).unwrap();

    header.navigate(&parse("/projects"));
    assert_eq!(header.title(), "Projects");

    let ticket = header.navigate(&parse("/projects/7")).unwrap();
    assert_eq!(header.title(), "Projects");

    let outcome = lookup.lookup(&ticket.id).await;
    assert!(header.apply_lookup(ticket.generation, outcome));
    assert_eq!(header.title(), "Harbour Fit-out");
}

#[tokio::test]
async fn test_header_discards_result_after_navigating_away() {
    let server = serve(ResponseTemplate::new(200).set_body_string(PROJECTS_JSON)).await;
    let lookup = CatalogLookup::new(Arc::new(source_for(&server)));
    let mut header = Header::mount(&HeaderConfig::default()).unwrap();

    let first = header.navigate(&parse("/projects/7")).unwrap();
    let second = header.navigate(&parse("/projects/9")).unwrap();

    // Resolve in reverse order; only the latest generation may land.
    let newer = lookup.lookup(&second.id).await;
    let older = lookup.lookup(&first.id).await;
    assert!(header.apply_lookup(second.generation, newer));
    assert!(!header.apply_lookup(first.generation, older));
    assert_eq!(header.title(), "Library Annex");
}

#[test]
fn test_header_fallback_when_server_is_down() {
    let lookup = CatalogLookup::new(Arc::new(HttpProjectSource::new(
        "http://127.0.0.1:9/projects.json".to_string(),
    )));
    let mut header = Header::mount(&HeaderConfig::default()).unwrap();
    let ticket = header.navigate(&parse("/projects/7")).unwrap();

    let outcome = tokio_test::block_on(lookup.lookup(&ticket.id));
    assert!(outcome.is_err());
    assert!(header.apply_lookup(ticket.generation, outcome));
    assert_eq!(header.title(), "Project Details");
}
