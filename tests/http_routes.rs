use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use csv_data_service::ingestion::{LoadOptions, load_table_state};
use csv_data_service::query::QueryService;
use csv_data_service::server::build_router;
use csv_data_service::state::TableState;
use http_body_util::BodyExt;
use serde_json::{Value as JsonValue, json};
use tower::ServiceExt;

fn scenario_router() -> Router {
    let state = load_table_state("tests/fixtures/scenario", &LoadOptions::default());
    build_router(QueryService::new(state))
}

fn empty_router() -> Router {
    build_router(QueryService::new(TableState::unset()))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, content_type, body)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, JsonValue) {
    let (status, _, body) = get(router, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn fetch_data_uses_defaults() {
    let (status, body) = get_json(scenario_router(), "/fetch-data/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "page": 1,
            "page_size": 100,
            "total_records": 3,
            "total_pages": 1,
            "data": [
                {"id": 1, "name": "a"},
                {"id": 2, "name": "b"},
                {"id": 3, "name": "c"},
            ],
        })
    );
}

#[tokio::test]
async fn fetch_data_paginates() {
    let (_, body) = get_json(scenario_router(), "/fetch-data/?page=2&page_size=2").await;
    assert_eq!(body["page"], json!(2));
    assert_eq!(body["total_pages"], json!(2));
    assert_eq!(body["data"], json!([{"id": 3, "name": "c"}]));
}

#[tokio::test]
async fn fetch_data_out_of_range_is_structured() {
    let (status, body) = get_json(scenario_router(), "/fetch-data/?page=3&page_size=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "Page number out of range."}));
}

#[tokio::test]
async fn fetch_data_rejects_invalid_parameters() {
    for uri in [
        "/fetch-data/?page=0",
        "/fetch-data/?page_size=0",
        "/fetch-data/?page_size=1001",
        "/fetch-data/?page=-1",
        "/fetch-data/?page=abc",
    ] {
        let (status, body) = get_json(scenario_router(), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert!(body["error_code"].is_string(), "{uri}");
        assert!(body["error_message"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn fetch_all_data_streams_csv() {
    let (status, content_type, body) = get(scenario_router(), "/fetch-all-data/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/csv"));
    assert_eq!(String::from_utf8(body).unwrap(), "id,name\n1,a\n2,b\n3,c\n");
}

#[tokio::test]
async fn fetch_summary_returns_sample() {
    let (status, body) = get_json(scenario_router(), "/fetch-summary/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_records"], json!(3));
    assert_eq!(body["columns"], json!(["id", "name"]));
    assert_eq!(body["sample"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn every_route_reports_no_data() {
    for uri in ["/fetch-data/", "/fetch-all-data/", "/fetch-summary/"] {
        let (status, body) = get_json(empty_router(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({"error": "No CSV files found or loaded."}), "{uri}");
    }
}

#[tokio::test]
async fn routes_answer_without_trailing_slash() {
    let (status, body) = get_json(scenario_router(), "/fetch-summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_records"], json!(3));
}
