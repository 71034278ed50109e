use keymint_client::{
    never_expires, ApiError, HttpLicenseApi, LicenseApi, LicenseDraft, LicenseServerConfig,
    ReplenishInterval,
};
use keymint_key::LicenseKey;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

fn mock_api(server: &MockServer) -> HttpLicenseApi {
    // The config carries a bare hostname; strip the scheme wiremock adds.
    let hostname = server
        .uri()
        .trim_start_matches("http://")
        .to_string();
    HttpLicenseApi::new(LicenseServerConfig::new(hostname, false, API_KEY)).unwrap()
}

fn record_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "active": true,
        "name": "John Doe",
        "notes": "imported",
        "ipLimit": 2,
        "licenseScope": "premium",
        "expirationDate": "9999-12-31T23:59:59",
        "validationPoints": 6,
        "validationLimit": 18,
        "replenishAmount": 6,
        "replenishInterval": "HOUR",
        "licenseKey": "87FB5-82FDD-E466-8024603-F215466"
    })
}

fn sample_draft() -> LicenseDraft {
    LicenseDraft {
        active: true,
        name: Some("John Doe".to_string()),
        notes: Some("imported".to_string()),
        ip_limit: 2,
        license_scope: Some("premium".to_string()),
        expiration_date: never_expires(),
        validation_points: 6,
        validation_limit: 18,
        replenish_amount: 6,
        replenish_interval: ReplenishInterval::Hour,
        license_key: LicenseKey::derive("1-johndoe"),
    }
}

// ── health_check ─────────────────────────────────────────────────

#[tokio::test]
async fn health_check_sends_authorization_and_accepts_200() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/licenses/key/PING"))
        .and(header("Authorization", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    mock_api(&server).health_check().await.unwrap();
}

#[tokio::test]
async fn health_check_maps_403_to_api_key_hint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/licenses/key/PING"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = mock_api(&server).health_check().await.unwrap_err();
    match err {
        ApiError::UnexpectedStatus { status, hint } => {
            assert_eq!(status, 403);
            assert!(hint.contains("API key"));
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

// ── find_by_key ──────────────────────────────────────────────────

#[tokio::test]
async fn find_by_key_returns_record() {
    let server = MockServer::start().await;
    let key = LicenseKey::derive("1-johndoe");

    Mock::given(method("GET"))
        .and(path(format!("/admin/licenses/key/{key}")))
        .and(header("Authorization", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(7)))
        .mount(&server)
        .await;

    let record = mock_api(&server).find_by_key(&key).await.unwrap();
    assert_eq!(record.id, 7);
    assert_eq!(record.license_key, key);
}

#[tokio::test]
async fn find_by_key_maps_404_to_not_found() {
    let server = MockServer::start().await;
    let key = LicenseKey::derive("1-johndoe");

    Mock::given(method("GET"))
        .and(path(format!("/admin/licenses/key/{key}")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = mock_api(&server).find_by_key(&key).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[tokio::test]
async fn find_by_key_treats_body_without_id_as_not_found() {
    let server = MockServer::start().await;
    let key = LicenseKey::derive("1-johndoe");

    Mock::given(method("GET"))
        .and(path(format!("/admin/licenses/key/{key}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let err = mock_api(&server).find_by_key(&key).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[tokio::test]
async fn find_by_key_surfaces_server_errors() {
    let server = MockServer::start().await;
    let key = LicenseKey::derive("1-johndoe");

    Mock::given(method("GET"))
        .and(path(format!("/admin/licenses/key/{key}")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = mock_api(&server).find_by_key(&key).await.unwrap_err();
    match err {
        ApiError::UnexpectedStatus { status, hint } => {
            assert_eq!(status, 500);
            assert!(hint.contains("logs"));
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

// ── fetch ────────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_returns_record_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/licenses/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(7)))
        .mount(&server)
        .await;

    let record = mock_api(&server).fetch(7).await.unwrap();
    assert_eq!(record.id, 7);
}

#[tokio::test]
async fn fetch_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/licenses/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = mock_api(&server).fetch(9).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[tokio::test]
async fn fetch_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/licenses/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = mock_api(&server).fetch(7).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

// ── create ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_posts_json_and_accepts_201() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/licenses"))
        .and(header("Authorization", API_KEY))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "licenseKey": "87FB5-82FDD-E466-8024603-F215466",
            "expirationDate": "9999-12-31T23:59:59"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    mock_api(&server).create(&sample_draft()).await.unwrap();
}

#[tokio::test]
async fn create_rejects_any_status_but_201() {
    let server = MockServer::start().await;

    // Even a 200 is wrong for create.
    Mock::given(method("POST"))
        .and(path("/admin/licenses"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = mock_api(&server).create(&sample_draft()).await.unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus { status: 200, .. }));
}

#[tokio::test]
async fn create_maps_422_to_validation_hint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/licenses"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let err = mock_api(&server).create(&sample_draft()).await.unwrap_err();
    match err {
        ApiError::UnexpectedStatus { status, hint } => {
            assert_eq!(status, 422);
            assert!(hint.contains("Validation"));
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

// ── update ───────────────────────────────────────────────────────

#[tokio::test]
async fn update_patches_record_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/admin/licenses/7"))
        .and(header("Authorization", API_KEY))
        .and(body_partial_json(serde_json::json!({"active": true})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    mock_api(&server).update(7, &sample_draft()).await.unwrap();
}

#[tokio::test]
async fn update_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/admin/licenses/7"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = mock_api(&server)
        .update(7, &sample_draft())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus { status: 500, .. }));
}

// ── delete ───────────────────────────────────────────────────────

#[tokio::test]
async fn delete_accepts_200() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/licenses/7"))
        .and(header("Authorization", API_KEY))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    mock_api(&server).delete(7).await.unwrap();
}

#[tokio::test]
async fn delete_rejects_204() {
    let server = MockServer::start().await;

    // The server contract is 200 on delete; anything else is unexpected.
    Mock::given(method("DELETE"))
        .and(path("/admin/licenses/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = mock_api(&server).delete(7).await.unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus { status: 204, .. }));
}

// ── Transport failures ───────────────────────────────────────────

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens on port 9; the connection is refused.
    let api = HttpLicenseApi::new(LicenseServerConfig::new("127.0.0.1:9", false, API_KEY)).unwrap();
    let err = api.health_check().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn invalid_config_fails_construction() {
    let result = HttpLicenseApi::new(LicenseServerConfig::new("", false, API_KEY));
    assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
}
