// notify/mod.rs — Simulated e-mail notifications.
//
// No real mail ever leaves this module: the production impl renders the
// message and writes it to the log after a short simulated delay. The trait
// seam exists so tests can inject a failing notifier.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::offers::{format_salary, JobOffer};

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Notify the recipient that an offer was sent for signature. Errors
    /// propagate to the caller and abort the send.
    async fn send_offer_email(&self, offer: &JobOffer, envelope_id: &str) -> Result<()>;

    /// Notify the recipient of an envelope status change.
    async fn send_status_update(
        &self,
        recipient_email: &str,
        status: &str,
        envelope_id: &str,
    ) -> Result<()>;
}

/// Log-only notifier used in production.
pub struct EmailNotifier;

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send_offer_email(&self, offer: &JobOffer, envelope_id: &str) -> Result<()> {
        // Simulated delivery delay.
        tokio::time::sleep(Duration::from_millis(1000)).await;

        let subject = format!("Job Offer - {}", offer.job_title);
        let body = offer_email_body(offer, envelope_id);
        info!(to = %offer.recipient_email, subject = %subject, "simulated email sent");
        info!(envelope_id = %envelope_id, body = %body, "email content");
        Ok(())
    }

    async fn send_status_update(
        &self,
        recipient_email: &str,
        status: &str,
        envelope_id: &str,
    ) -> Result<()> {
        tokio::time::sleep(Duration::from_millis(500)).await;

        info!(
            to = %recipient_email,
            status = %status,
            envelope_id = %envelope_id,
            "simulated status update email sent"
        );
        Ok(())
    }
}

fn offer_email_body(offer: &JobOffer, envelope_id: &str) -> String {
    format!(
        "Dear {name},\n\n\
         We are excited to extend a job offer for the position of {title}.\n\n\
         Please review and sign the attached offer document using the secure \
         signing envelope.\n\n\
         Envelope ID: {envelope_id}\n\
         Position: {title}\n\
         Department: {department}\n\
         Start Date: {start}\n\
         Annual Salary: ${salary}\n\n\
         To view and sign your offer letter, follow the signing link for \
         envelope {envelope_id}.\n\n\
         Best regards,\n\
         The HR Team\n",
        name = offer.recipient_name,
        title = offer.job_title,
        department = offer.department,
        start = offer.start_date.format("%B %d, %Y"),
        salary = format_salary(&offer.salary),
    )
}
