// esign/simulator.rs — Envelope lifecycle simulator.
//
// Stands in for a real e-signature provider. Creating an envelope records a
// `sent` event and spawns a detached task that walks the envelope through a
// scripted status sequence on a timer. Polling the status map is the only
// way to observe the progression.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::{Envelope, EnvelopeStatus, EnvelopeSummary, StatusEvent};
use crate::error::OfferdError;
use crate::notify::Notifier;
use crate::offers::JobOffer;

/// The scripted progression. Each delay is measured from the previous step,
/// so the wall-clock offsets from creation are 5s, 20s, 50s, 55s.
const PROGRESSION: [(u64, EnvelopeStatus, &str); 4] = [
    (5, EnvelopeStatus::Delivered, "Email delivered to recipient"),
    (15, EnvelopeStatus::Viewed, "Recipient opened the document"),
    (30, EnvelopeStatus::Signed, "Document signed by recipient"),
    (5, EnvelopeStatus::Completed, "Signing process completed"),
];

pub struct SignatureSimulator {
    envelopes: Arc<RwLock<HashMap<String, Envelope>>>,
    notifier: Arc<dyn Notifier>,
}

impl SignatureSimulator {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            envelopes: Arc::new(RwLock::new(HashMap::new())),
            notifier,
        }
    }

    /// Create an envelope for the offer, record the `sent` event, notify
    /// the recipient, and kick off the detached progression.
    ///
    /// Returns the send-time summary immediately — status is exactly `sent`
    /// at return time and the progression's outcome is never reflected in
    /// this value. A notifier failure propagates and aborts the send; the
    /// envelope stays in the map in that case.
    pub async fn create_and_send(
        &self,
        offer: &JobOffer,
    ) -> Result<EnvelopeSummary, OfferdError> {
        let envelope_id = generate_envelope_id();
        let now = Utc::now();
        let document_name = format!("Job_Offer_{}.pdf", offer.job_title.replace(' ', "_"));

        let envelope = Envelope {
            envelope_id: envelope_id.clone(),
            status: EnvelopeStatus::Sent,
            recipient_email: offer.recipient_email.clone(),
            recipient_name: offer.recipient_name.clone(),
            document_name: document_name.clone(),
            created_at: now,
            sent_at: Some(now),
            completed_at: None,
            status_events: vec![StatusEvent {
                status: EnvelopeStatus::Sent,
                message: "Envelope sent to recipient".to_string(),
                timestamp: now,
            }],
        };

        self.envelopes
            .write()
            .await
            .insert(envelope_id.clone(), envelope);

        self.notifier.send_offer_email(offer, &envelope_id).await?;

        // Detached progression — intentionally unjoined. Not cancellable;
        // process exit abandons it.
        let map = Arc::clone(&self.envelopes);
        let id = envelope_id.clone();
        tokio::spawn(async move {
            run_progression(map, id).await;
        });

        info!(
            envelope_id = %envelope_id,
            recipient = %offer.recipient_email,
            "envelope created and sent"
        );

        Ok(EnvelopeSummary {
            envelope_id,
            status: EnvelopeStatus::Sent,
            recipient_name: offer.recipient_name.clone(),
            recipient_email: offer.recipient_email.clone(),
            document_name,
            submitted_at: now,
        })
    }

    /// Current status at query time, reflecting whatever step the detached
    /// progression has reached. Unknown id is an error — unlike `details`,
    /// which returns `None`. That asymmetry is part of the public contract.
    pub async fn status(&self, envelope_id: &str) -> Result<EnvelopeStatus, OfferdError> {
        self.envelopes
            .read()
            .await
            .get(envelope_id)
            .map(|e| e.status)
            .ok_or_else(|| OfferdError::NotFound(format!("envelope not found: {envelope_id}")))
    }

    /// Full envelope record including the event log. Unknown id → `None`,
    /// no error.
    pub async fn details(&self, envelope_id: &str) -> Option<Envelope> {
        self.envelopes.read().await.get(envelope_id).cloned()
    }
}

/// Walk the envelope through the scripted status sequence.
///
/// Transitions are unconditional and time-triggered only. Faults are logged
/// and swallowed — no caller is waiting on this task, and the stored
/// envelope is left at whatever step was last reached.
async fn run_progression(
    envelopes: Arc<RwLock<HashMap<String, Envelope>>>,
    envelope_id: String,
) {
    if !envelopes.read().await.contains_key(&envelope_id) {
        return;
    }

    for (delay_secs, status, message) in PROGRESSION {
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;

        let mut map = envelopes.write().await;
        let Some(envelope) = map.get_mut(&envelope_id) else {
            error!(envelope_id = %envelope_id, "envelope removed mid-progression");
            return;
        };

        let now = Utc::now();
        envelope.status = status;
        envelope.status_events.push(StatusEvent {
            status,
            message: message.to_string(),
            timestamp: now,
        });
        if status == EnvelopeStatus::Completed {
            envelope.completed_at = Some(now);
        }

        info!(envelope_id = %envelope_id, status = %status, "envelope status updated");
    }
}

/// `ENV-<YYYYMMDD>-<8 uppercase hex>`. Uniqueness is collision-based, not
/// enforced — the hex suffix comes from a fresh v4 UUID.
fn generate_envelope_id() -> String {
    let date = Utc::now().format("%Y%m%d");
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("ENV-{date}-{}", uuid[..8].to_uppercase())
}
