pub mod simulator;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Envelope model ──────────────────────────────────────────────────────────

/// Envelope signing status.
///
/// `Sent` through `Completed` form a fixed total order the simulator walks.
/// `Declined` and `Expired` are part of the client contract but the
/// simulated path never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Created,
    Sent,
    Delivered,
    Viewed,
    Signed,
    Completed,
    Declined,
    Expired,
}

impl fmt::Display for EnvelopeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EnvelopeStatus::Created => "created",
            EnvelopeStatus::Sent => "sent",
            EnvelopeStatus::Delivered => "delivered",
            EnvelopeStatus::Viewed => "viewed",
            EnvelopeStatus::Signed => "signed",
            EnvelopeStatus::Completed => "completed",
            EnvelopeStatus::Declined => "declined",
            EnvelopeStatus::Expired => "expired",
        };
        f.write_str(s)
    }
}

/// One immutable entry in an envelope's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEvent {
    pub status: EnvelopeStatus,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// The simulated e-signature record tracking one document's lifecycle.
///
/// Invariants: `status_events` is append-only, `status` always equals the
/// status of the most recently appended event, and `envelope_id` never
/// changes once assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub envelope_id: String,
    pub status: EnvelopeStatus,
    pub recipient_email: String,
    pub recipient_name: String,
    pub document_name: String,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
    /// Set exactly once, on entering `completed`.
    pub completed_at: Option<DateTime<Utc>>,
    pub status_events: Vec<StatusEvent>,
}

/// Send-time response summary. A snapshot taken when the envelope was
/// created — it never reflects the detached progression's later steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeSummary {
    pub envelope_id: String,
    pub status: EnvelopeStatus,
    pub recipient_name: String,
    pub recipient_email: String,
    pub document_name: String,
    pub submitted_at: DateTime<Utc>,
}
