pub mod store;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Offer model ─────────────────────────────────────────────────────────────

/// Offer lifecycle status as exposed to the frontend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    #[default]
    Draft,
    Generated,
    Sent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOffer {
    /// Opaque identifier; assigned when the request omits it.
    #[serde(default = "new_offer_id")]
    pub id: String,
    pub recipient_name: String,
    pub recipient_email: String,
    pub job_title: String,
    pub department: String,
    pub salary: Decimal,
    pub start_date: DateTime<Utc>,
    /// Free-text letter body with `[Candidate's Name]` style placeholders.
    pub offer_content: String,
    #[serde(default)]
    pub status: OfferStatus,
    /// Path of the generated offer document, once one exists.
    #[serde(default)]
    pub document_path: Option<String>,
    /// Envelope identifier, once the offer was sent for signature.
    #[serde(default)]
    pub envelope_id: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn new_offer_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl JobOffer {
    /// Validate required fields. Returns every failed-field message, not
    /// just the first, so the client can show them all at once.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.recipient_name.trim().is_empty() {
            errors.push("recipientName is required".to_string());
        }
        if self.recipient_email.trim().is_empty() {
            errors.push("recipientEmail is required".to_string());
        } else if !self.recipient_email.contains('@') {
            errors.push("recipientEmail is not a valid email address".to_string());
        }
        if self.job_title.trim().is_empty() {
            errors.push("jobTitle is required".to_string());
        }
        if self.department.trim().is_empty() {
            errors.push("department is required".to_string());
        }
        if self.salary <= Decimal::ZERO {
            errors.push("salary must be greater than zero".to_string());
        }
        if self.offer_content.trim().is_empty() {
            errors.push("offerContent is required".to_string());
        }
        errors
    }
}

/// Format a salary for letters and e-mails: rounded to whole units with
/// thousands separators ("85,000").
pub fn format_salary(salary: &Decimal) -> String {
    let whole = salary.round().to_string();
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole.as_str()),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{sign}{out}")
}
