//! HTTP request handlers

use super::state::AppState;
use crate::error::RelayError;
use crate::results::SearchResponse;
use crate::search::QueryRequest;
use axum::{extract::State, response::IntoResponse, Json};

/// Liveness handler
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "credential_configured": state.has_credential()
    }))
}

/// Search handler
pub async fn search_confluence(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<SearchResponse>, RelayError> {
    let response = state.relay.search_confluence(&payload.query).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use crate::config::{ApiToken, Settings};
    use crate::network::HttpClient;
    use crate::search::QueryRequest;
    use crate::web::{create_router, AppState, ErrorBody};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app(base_url: String, token: Option<&str>) -> Router {
        let mut settings = Settings::default();
        settings.confluence.base_url = base_url;
        settings.confluence.token = token.and_then(ApiToken::new);
        create_router(AppState::new(settings, HttpClient::new().unwrap()))
    }

    fn search_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/search-confluence")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_index() {
        let response = app("https://wiki.example.com/wiki".into(), None)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = read_json(response).await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_health_reports_version() {
        let response = app("https://wiki.example.com/wiki".into(), Some("t0ken"))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body: Value = read_json(response).await;
        assert_eq!(body["version"], crate::VERSION);
        assert_eq!(body["credential_configured"], true);
    }

    #[tokio::test]
    async fn test_search_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {"title": "A", "excerpt": "e1", "_links": {"base": "https://x", "webui": "/p/1"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = app(server.uri(), Some("t0ken"))
            .oneshot(search_request(
                serde_json::to_value(QueryRequest::new("onboarding")).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = read_json(response).await;
        assert_eq!(
            body,
            json!({ "results": [{ "title": "A", "url": "https://x/p/1", "snippet": "e1" }] })
        );
    }

    #[tokio::test]
    async fn test_search_short_query_is_bad_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let response = app(server.uri(), Some("t0ken"))
            .oneshot(search_request(json!({ "query": " ab " })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = read_json(response).await;
        assert_eq!(body.detail, "Query too short");
    }

    #[tokio::test]
    async fn test_search_without_token_is_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let response = app(server.uri(), None)
            .oneshot(search_request(json!({ "query": "onboarding" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = read_json(response).await;
        assert_eq!(body.detail, "CONFLUENCE_TOKEN not set");
    }

    #[tokio::test]
    async fn test_search_upstream_error_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("token expired for user bob"))
            .mount(&server)
            .await;

        let response = app(server.uri(), Some("t0ken"))
            .oneshot(search_request(json!({ "query": "onboarding" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorBody = read_json(response).await;
        assert_eq!(body.detail, "Confluence search failed");
    }

    #[tokio::test]
    async fn test_search_malformed_payload_is_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "results": [{ "excerpt": "x" }] })),
            )
            .mount(&server)
            .await;

        let response = app(server.uri(), Some("t0ken"))
            .oneshot(search_request(json!({ "query": "onboarding" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_search_missing_query_field_is_rejected() {
        let response = app("https://wiki.example.com/wiki".into(), Some("t0ken"))
            .oneshot(search_request(json!({ "q": "onboarding" })))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
