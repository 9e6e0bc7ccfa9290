use super::*;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Debug, Clone)]
struct Recorded {
    path: String,
    authorization: Option<String>,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct ServerState {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn list(State(state): State<ServerState>, headers: HeaderMap) -> Json<Value> {
    state.requests.lock().await.push(Recorded {
        path: "/api/campaigns".to_string(),
        authorization: bearer(&headers),
        body: None,
    });
    Json(json!({
        "campaigns": [{
            "id": "cmp_1",
            "name": "Spring outreach",
            "created_at": "2024-04-02T08:00:00Z",
            "status": "PAUSED",
            "workflowStatus": { "isRunning": false, "isPaused": true },
            "list_data": { "name": "CTOs", "total": 15 },
            "senderData": { "name": "Ada", "provider": "LINKEDIN", "status": "OK" }
        }]
    }))
}

async fn record_action(state: &ServerState, path: &str, headers: &HeaderMap, body: Value) {
    state.requests.lock().await.push(Recorded {
        path: path.to_string(),
        authorization: bearer(headers),
        body: Some(body),
    });
}

async fn start(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    record_action(&state, "/api/campaigns/start", &headers, body).await;
    StatusCode::OK
}

async fn pause(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record_action(&state, "/api/campaigns/pause", &headers, body).await;
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "engine offline" })),
    )
}

async fn delete(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, &'static str) {
    record_action(&state, "/api/campaigns/delete", &headers, body).await;
    (StatusCode::UNAUTHORIZED, "token expired")
}

async fn spawn_campaign_server() -> anyhow::Result<(String, ServerState)> {
    let state = ServerState::default();
    let app = Router::new()
        .route("/api/campaigns", get(list))
        .route("/api/campaigns/start", post(start))
        .route("/api/campaigns/pause", post(pause))
        .route("/api/campaigns/delete", post(delete))
        .with_state(state.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}/api"), state))
}

#[test]
fn base_url_gets_trailing_slash_so_prefix_survives_join() {
    let url = normalize_base_url(" https://example.com/api ").expect("url");
    assert_eq!(url.as_str(), "https://example.com/api/");
    assert_eq!(
        url.join(CAMPAIGNS_PATH).expect("join").as_str(),
        "https://example.com/api/campaigns"
    );
}

#[test]
fn rejects_unparseable_base_url() {
    let err = normalize_base_url("not a url").expect_err("must fail");
    assert!(matches!(err, ClientError::InvalidUrl(_)));
}

#[tokio::test]
async fn lists_campaigns_with_bearer_token() {
    let (base_url, state) = spawn_campaign_server().await.expect("spawn server");
    let service = HttpCampaignService::new(&base_url, DEFAULT_REQUEST_TIMEOUT).expect("service");

    let campaigns = service.list_campaigns("tok-123").await.expect("list");

    assert_eq!(campaigns.len(), 1);
    assert_eq!(campaigns[0].id.as_str(), "cmp_1");
    assert_eq!(campaigns[0].is_paused_flag(), Some(true));
    let requests = state.requests.lock().await;
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn posts_campaign_id_to_action_endpoint() {
    let (base_url, state) = spawn_campaign_server().await.expect("spawn server");
    let service = HttpCampaignService::new(&base_url, DEFAULT_REQUEST_TIMEOUT).expect("service");

    service
        .perform("tok-123", RemoteAction::Start, &CampaignId::from("cmp_1"))
        .await
        .expect("start");

    let requests = state.requests.lock().await;
    let recorded = requests.last().expect("request");
    assert_eq!(recorded.path, "/api/campaigns/start");
    assert_eq!(recorded.authorization.as_deref(), Some("Bearer tok-123"));
    assert_eq!(recorded.body, Some(json!({ "campaignId": "cmp_1" })));
}

#[tokio::test]
async fn server_error_surfaces_json_message() {
    let (base_url, _state) = spawn_campaign_server().await.expect("spawn server");
    let service = HttpCampaignService::new(&base_url, DEFAULT_REQUEST_TIMEOUT).expect("service");

    let err = service
        .perform("tok", RemoteAction::Pause, &CampaignId::from("cmp_1"))
        .await
        .expect_err("must fail");

    match err {
        ClientError::Remote {
            code,
            status,
            message,
        } => {
            assert_eq!(code, ErrorCode::Internal);
            assert_eq!(status, 500);
            assert_eq!(message, "engine offline");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unauthorized_plain_body_is_an_auth_failure() {
    let (base_url, _state) = spawn_campaign_server().await.expect("spawn server");
    let service = HttpCampaignService::new(&base_url, DEFAULT_REQUEST_TIMEOUT).expect("service");

    let err = service
        .perform("tok", RemoteAction::Delete, &CampaignId::from("cmp_1"))
        .await
        .expect_err("must fail");

    assert!(err.is_auth_failure());
    assert!(err.to_string().contains("token expired"));
}

#[tokio::test]
async fn unknown_endpoint_maps_to_not_found() {
    let (base_url, _state) = spawn_campaign_server().await.expect("spawn server");
    let service = HttpCampaignService::new(&base_url, DEFAULT_REQUEST_TIMEOUT).expect("service");

    let err = service
        .perform("tok", RemoteAction::Resume, &CampaignId::from("cmp_1"))
        .await
        .expect_err("must fail");

    assert!(matches!(
        err,
        ClientError::Remote {
            code: ErrorCode::NotFound,
            status: 404,
            ..
        }
    ));
}
