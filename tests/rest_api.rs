//! End-to-end REST tests: real server on a random port, real HTTP client.
//!
//! The long signing progression is covered by the paused-time simulator
//! tests; here we only verify the send-time behavior and the HTTP
//! contract shapes.

use std::sync::Arc;

use offerd::{config::OfferdConfig, rest, AppContext};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Spin up the full router on 127.0.0.1:0 and return its base URL.
/// The TempDir must outlive the test so the documents dir stays around.
async fn start_server(dir: &TempDir) -> (Arc<AppContext>, String) {
    let config = OfferdConfig::new(
        Some(0),
        Some(dir.path().to_path_buf()),
        Some("error".to_string()),
        None,
    );
    let ctx = Arc::new(AppContext::new(config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = rest::build_router(ctx.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (ctx, format!("http://{addr}"))
}

fn offer_payload() -> Value {
    json!({
        "recipientName": "Dana Reyes",
        "recipientEmail": "a@b.com",
        "jobTitle": "Engineer",
        "department": "Platform",
        "salary": 85000,
        "startDate": "2026-10-01T00:00:00Z",
        "offerContent": "Dear [Candidate's Name],\nWe are pleased to offer you [Position Title]."
    })
}

#[tokio::test]
async fn generate_send_and_poll_flow() {
    let dir = TempDir::new().unwrap();
    let (_ctx, base) = start_server(&dir).await;
    let client = reqwest::Client::new();

    // Generate: offer saved, document written, status `generated`.
    let resp = client
        .post(format!("{base}/api/v1/offers/generate"))
        .json(&offer_payload())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    let offer_id = body["data"]["offerId"].as_str().unwrap().to_string();
    let document_url = body["data"]["documentUrl"].as_str().unwrap().to_string();
    assert!(document_url.starts_with("/documents/"));

    // The generated document is served statically and contains the
    // substituted recipient name.
    let doc = client.get(format!("{base}{document_url}")).send().await.unwrap();
    assert_eq!(doc.status(), 200);
    let html = doc.text().await.unwrap();
    assert!(html.contains("Dana Reyes"));

    // History lists it newest-first with a non-empty document path.
    let history: Value = client
        .get(format!("{base}/api/v1/offers/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history["data"].as_array().unwrap().len(), 1);
    let listed = &history["data"][0];
    assert_eq!(listed["id"], offer_id.as_str());
    assert_eq!(listed["status"], "generated");
    assert!(!listed["documentPath"].as_str().unwrap().is_empty());

    // Preview URL matches the generate response.
    let preview: Value = client
        .get(format!("{base}/api/v1/offers/{offer_id}/preview"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(preview["data"]["previewUrl"], document_url.as_str());

    // Send for signature: envelope summary comes back `sent` immediately.
    let resp = client
        .post(format!("{base}/api/v1/esign/send"))
        .json(&json!({ "offerId": offer_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "sent");
    assert_eq!(body["data"]["recipientEmail"], "a@b.com");
    let envelope_id = body["data"]["envelopeId"].as_str().unwrap().to_string();
    assert!(envelope_id.starts_with("ENV-"));
    assert_eq!(envelope_id.len(), "ENV-".len() + 8 + 1 + 8);

    // The offer now carries the envelope id and `sent` status.
    let fetched: Value = client
        .get(format!("{base}/api/v1/offers/{offer_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["data"]["status"], "sent");
    assert_eq!(fetched["data"]["envelopeId"], envelope_id.as_str());

    // Status polling reflects the just-created envelope.
    let status: Value = client
        .get(format!("{base}/api/v1/esign/status/{envelope_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["data"]["status"], "sent");

    // Details carry the full (single-entry) event log.
    let details: Value = client
        .get(format!("{base}/api/v1/esign/envelope/{envelope_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(details["data"]["statusEvents"].as_array().unwrap().len(), 1);
    assert_eq!(details["data"]["completedAt"], Value::Null);
}

#[tokio::test]
async fn generate_rejects_invalid_offer_with_all_errors() {
    let dir = TempDir::new().unwrap();
    let (_ctx, base) = start_server(&dir).await;
    let client = reqwest::Client::new();

    let mut payload = offer_payload();
    payload["recipientName"] = json!("");
    payload["salary"] = json!(0);

    let resp = client
        .post(format!("{base}/api/v1/offers/generate"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn send_requires_a_generated_document() {
    let dir = TempDir::new().unwrap();
    let (ctx, base) = start_server(&dir).await;
    let client = reqwest::Client::new();

    // Saved directly, no document yet.
    let draft: offerd::offers::JobOffer = serde_json::from_value(offer_payload()).unwrap();
    let draft = ctx.offers.save(draft).await;

    let resp = client
        .post(format!("{base}/api/v1/esign/send"))
        .json(&json!({ "offerId": draft.id }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Unknown offer is a 404, not a 400.
    let resp = client
        .post(format!("{base}/api/v1/esign/send"))
        .json(&json!({ "offerId": "missing" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn unknown_ids_map_to_not_found() {
    let dir = TempDir::new().unwrap();
    let (_ctx, base) = start_server(&dir).await;
    let client = reqwest::Client::new();

    for path in [
        "/api/v1/offers/missing",
        "/api/v1/offers/missing/preview",
        "/api/v1/esign/status/ENV-20260830-DEADBEEF",
        "/api/v1/esign/envelope/ENV-20260830-DEADBEEF",
    ] {
        let resp = client.get(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(resp.status(), 404, "expected 404 for {path}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn webhook_accepts_any_payload() {
    let dir = TempDir::new().unwrap();
    let (_ctx, base) = start_server(&dir).await;
    let client = reqwest::Client::new();

    for payload in [
        json!({ "event": "envelope-completed", "envelopeId": "ENV-1" }),
        json!({}),
        json!([1, 2, 3]),
        json!("opaque"),
    ] {
        let resp = client
            .post(format!("{base}/api/v1/esign/webhook"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }
}

#[tokio::test]
async fn health_reports_ok() {
    let dir = TempDir::new().unwrap();
    let (_ctx, base) = start_server(&dir).await;

    let body: Value = reqwest::get(format!("{base}/api/v1/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
