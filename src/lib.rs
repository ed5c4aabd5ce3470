pub mod config;
pub mod documents;
pub mod error;
pub mod esign;
pub mod notify;
pub mod offers;
pub mod rest;

use std::sync::Arc;

use config::OfferdConfig;
use documents::DocumentGenerator;
use esign::simulator::SignatureSimulator;
use notify::{EmailNotifier, Notifier};
use offers::store::OfferStore;

/// Shared application state passed to every route handler and background task.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<OfferdConfig>,
    /// In-memory offer store. Lifecycle = process lifetime.
    pub offers: Arc<OfferStore>,
    /// Offer-letter document generator (HTML standing in for PDF).
    pub documents: Arc<DocumentGenerator>,
    /// Envelope lifecycle simulator.
    pub esign: Arc<SignatureSimulator>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: OfferdConfig) -> Self {
        Self::with_notifier(config, Arc::new(EmailNotifier))
    }

    /// Same wiring with a caller-supplied notifier. Tests inject failing
    /// notifiers through this to exercise the send-abort path.
    pub fn with_notifier(config: OfferdConfig, notifier: Arc<dyn Notifier>) -> Self {
        let config = Arc::new(config);
        Self {
            offers: Arc::new(OfferStore::new()),
            documents: Arc::new(DocumentGenerator::new(config.documents_dir())),
            esign: Arc::new(SignatureSimulator::new(notifier)),
            started_at: std::time::Instant::now(),
            config,
        }
    }
}
