use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use champdex::catalog::{
    CatalogEndpoint, CatalogError, CatalogSource, CatalogState, DataDragonClient,
    fetch_with_timeout,
};
use champdex::core::action::{Action, Effect, update};
use champdex::core::navigation::{Screen, Tab};
use champdex::core::state::App;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const CATALOG_PATH: &str = "/cdn/14.2.1/data/en_US/champion.json";

const AATROX_BLURB: &str = "Once honored defenders of Shurima against the Void, Aatrox and his brethren would eventually become an even greater threat to Runeterra...";

fn aatrox_payload() -> serde_json::Value {
    serde_json::json!({
        "type": "champion",
        "version": "14.2.1",
        "data": {
            "Aatrox": {
                "id": "Aatrox",
                "key": "266",
                "name": "Aatrox",
                "title": "the Darkin Blade",
                "blurb": AATROX_BLURB,
                "tags": ["Fighter", "Tank"]
            }
        }
    })
}

async fn mount_catalog(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> DataDragonClient {
    DataDragonClient::new(CatalogEndpoint::new(&server.uri(), "en_US"))
}

/// Runs one activation against `source`, the same way the event loop does.
async fn activate(app: &mut App, timeout: Duration) {
    let effect = update(app, Action::ActivateHome);
    let Effect::LoadCatalog { activation } = effect else {
        panic!("expected a catalog load, got {effect:?}");
    };
    let result = fetch_with_timeout(app.source.as_ref(), timeout).await;
    update(app, Action::CatalogLoaded { activation, result });
}

// ============================================================================
// Data Dragon client
// ============================================================================

#[tokio::test]
async fn test_end_to_end_select_shows_record() {
    let server = MockServer::start().await;
    mount_catalog(
        &server,
        ResponseTemplate::new(200).set_body_json(aatrox_payload()),
    )
    .await;

    let endpoint = CatalogEndpoint::new(&server.uri(), "en_US");
    let source: Arc<dyn CatalogSource> = Arc::new(DataDragonClient::new(endpoint.clone()));
    let mut app = App::new(source, endpoint);

    activate(&mut app, Duration::from_secs(5)).await;

    let records = app.catalog.records().to_vec();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Aatrox");
    assert_eq!(records[0].title, "the Darkin Blade");

    update(&mut app, Action::SelectChampion(records[0].clone()));
    let Screen::Detail(Some(shown)) = app.nav.current() else {
        panic!("detail screen should carry the selected record");
    };
    assert_eq!(shown.name, "Aatrox");
    assert_eq!(shown.title, "the Darkin Blade");
    assert_eq!(shown.blurb, AATROX_BLURB);

    update(&mut app, Action::GoBack);
    assert_eq!(app.nav.current(), Screen::Home);
    assert_eq!(app.nav.tab(), Tab::Home);
}

#[tokio::test]
async fn test_every_key_becomes_one_record() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "data": {
            "Zed": {"id": "Zed", "name": "Zed", "title": "the Master of Shadows", "blurb": "..."},
            "Ahri": {"id": "Ahri", "name": "Ahri", "title": "the Nine-Tailed Fox", "blurb": "..."},
            "MonkeyKing": {"id": "MonkeyKing", "name": "Wukong", "title": "the Monkey King", "blurb": "..."},
            "Aatrox": {"id": "Aatrox", "name": "Aatrox", "title": "the Darkin Blade", "blurb": "..."}
        }
    });
    mount_catalog(&server, ResponseTemplate::new(200).set_body_json(body)).await;

    let records = client_for(&server).fetch_champions().await.unwrap();

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    let expected: HashSet<&str> = ["Zed", "Ahri", "MonkeyKing", "Aatrox"].into_iter().collect();
    assert_eq!(ids.len(), unique.len());
    assert_eq!(unique, expected);
    assert_eq!(ids, vec!["Aatrox", "Ahri", "MonkeyKing", "Zed"]);
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    mount_catalog(
        &server,
        ResponseTemplate::new(503).set_body_string("maintenance"),
    )
    .await;

    let result = client_for(&server).fetch_champions().await;
    assert_eq!(
        result,
        Err(CatalogError::Api {
            status: 503,
            message: "maintenance".to_string(),
        })
    );
}

#[tokio::test]
async fn test_malformed_body_maps_to_parse_error() {
    let server = MockServer::start().await;
    mount_catalog(&server, ResponseTemplate::new(200).set_body_string("{not json")).await;

    let result = client_for(&server).fetch_champions().await;
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[tokio::test]
async fn test_missing_data_field_maps_to_parse_error() {
    let server = MockServer::start().await;
    mount_catalog(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"type": "champion"})),
    )
    .await;

    let result = client_for(&server).fetch_champions().await;
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

// ============================================================================
// Failure ends in a non-loading, empty state
// ============================================================================

#[tokio::test]
async fn test_failed_load_is_not_loading_and_empty() {
    let server = MockServer::start().await;
    mount_catalog(&server, ResponseTemplate::new(500)).await;

    let endpoint = CatalogEndpoint::new(&server.uri(), "en_US");
    let mut app = App::new(Arc::new(DataDragonClient::new(endpoint.clone())), endpoint);

    activate(&mut app, Duration::from_secs(5)).await;

    assert!(!app.catalog.is_loading());
    assert!(app.catalog.records().is_empty());
    assert!(matches!(app.catalog, CatalogState::Failed(_)));
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let server = MockServer::start().await;
    mount_catalog(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(aatrox_payload())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let endpoint = CatalogEndpoint::new(&server.uri(), "en_US");
    let mut app = App::new(Arc::new(DataDragonClient::new(endpoint.clone())), endpoint);

    activate(&mut app, Duration::from_secs(1)).await;

    assert_eq!(
        app.catalog,
        CatalogState::Failed("request timed out after 1s".to_string())
    );
    assert!(app.catalog.records().is_empty());
}
