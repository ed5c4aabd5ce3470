//! Offer store contract tests: save/get round-trip, newest-first listing,
//! update semantics, and delete.

use std::time::Duration;

use chrono::Utc;
use offerd::error::OfferdError;
use offerd::offers::{store::OfferStore, JobOffer, OfferStatus};
use rust_decimal::Decimal;

fn offer(id: &str, recipient: &str) -> JobOffer {
    JobOffer {
        id: id.to_string(),
        recipient_name: recipient.to_string(),
        recipient_email: format!("{}@example.com", recipient.to_lowercase()),
        job_title: "Engineer".to_string(),
        department: "Platform".to_string(),
        salary: Decimal::from(85_000i64),
        start_date: Utc::now() + chrono::Duration::days(30),
        offer_content: "Dear [Candidate's Name], welcome.".to_string(),
        status: OfferStatus::Draft,
        document_path: None,
        envelope_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn save_then_get_returns_same_record() {
    let store = OfferStore::new();
    let saved = store.save(offer("o-1", "Dana")).await;

    let fetched = store.get("o-1").await.expect("offer should exist");
    assert_eq!(fetched.id, saved.id);
    assert_eq!(fetched.recipient_name, "Dana");
    assert_eq!(fetched.recipient_email, "dana@example.com");
    assert_eq!(fetched.offer_content, saved.offer_content);
    assert_eq!(fetched.created_at, saved.created_at);
}

#[tokio::test]
async fn get_unknown_id_returns_none() {
    let store = OfferStore::new();
    assert!(store.get("missing").await.is_none());
}

#[tokio::test]
async fn save_overwrites_existing_id() {
    let store = OfferStore::new();
    store.save(offer("o-1", "Dana")).await;
    store.save(offer("o-1", "Riley")).await;

    let fetched = store.get("o-1").await.unwrap();
    assert_eq!(fetched.recipient_name, "Riley");
    assert_eq!(store.list_all().await.len(), 1);
}

#[tokio::test]
async fn list_all_is_newest_first_regardless_of_insertion_order() {
    let store = OfferStore::new();
    for id in ["o-1", "o-2", "o-3"] {
        store.save(offer(id, "Dana")).await;
        // Distinct creation timestamps so the ordering is unambiguous.
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let all = store.list_all().await;
    let ids: Vec<&str> = all.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["o-3", "o-2", "o-1"]);
    assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn update_unknown_id_fails_with_not_found() {
    let store = OfferStore::new();
    let err = store.update(offer("never-saved", "Dana")).await.unwrap_err();
    assert!(matches!(err, OfferdError::NotFound(_)));
    assert!(err.to_string().contains("never-saved"));
}

#[tokio::test]
async fn update_refreshes_updated_at_and_keeps_created_at() {
    let store = OfferStore::new();
    let saved = store.save(offer("o-1", "Dana")).await;

    tokio::time::sleep(Duration::from_millis(5)).await;

    let mut changed = saved.clone();
    changed.status = OfferStatus::Generated;
    changed.document_path = Some("/tmp/doc.html".to_string());
    let updated = store.update(changed).await.unwrap();

    assert_eq!(updated.created_at, saved.created_at);
    assert!(updated.updated_at > saved.updated_at);
    assert_eq!(updated.status, OfferStatus::Generated);

    let fetched = store.get("o-1").await.unwrap();
    assert_eq!(fetched.document_path.as_deref(), Some("/tmp/doc.html"));
}

#[tokio::test]
async fn delete_reports_whether_a_record_was_removed() {
    let store = OfferStore::new();
    store.save(offer("o-1", "Dana")).await;

    assert!(store.delete("o-1").await);
    assert!(store.get("o-1").await.is_none());
    assert!(!store.delete("o-1").await);
}
