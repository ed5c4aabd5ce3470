// offers/store.rs — In-memory offer store.
//
// One map behind one RwLock; every operation touches a single key, so no
// further locking is needed. Constructed once at startup and shared via
// AppContext. Nothing survives a restart.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use super::JobOffer;
use crate::error::OfferdError;

pub struct OfferStore {
    offers: RwLock<HashMap<String, JobOffer>>,
}

impl OfferStore {
    pub fn new() -> Self {
        Self {
            offers: RwLock::new(HashMap::new()),
        }
    }

    /// Insert by id, silently overwriting any existing record. Stamps both
    /// timestamps to now and returns the stored record.
    pub async fn save(&self, mut offer: JobOffer) -> JobOffer {
        let now = Utc::now();
        offer.created_at = now;
        offer.updated_at = now;
        self.offers
            .write()
            .await
            .insert(offer.id.clone(), offer.clone());
        info!(id = %offer.id, "offer saved");
        offer
    }

    pub async fn get(&self, id: &str) -> Option<JobOffer> {
        self.offers.read().await.get(id).cloned()
    }

    /// All offers, newest first.
    pub async fn list_all(&self) -> Vec<JobOffer> {
        let mut all: Vec<JobOffer> = self.offers.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    /// Replace an existing offer. Fails if the id was never saved.
    /// Refreshes `updated_at` only — `created_at` keeps its original value.
    pub async fn update(&self, mut offer: JobOffer) -> Result<JobOffer, OfferdError> {
        let mut map = self.offers.write().await;
        if !map.contains_key(&offer.id) {
            return Err(OfferdError::NotFound(format!(
                "job offer not found: {}",
                offer.id
            )));
        }
        offer.updated_at = Utc::now();
        map.insert(offer.id.clone(), offer.clone());
        info!(id = %offer.id, "offer updated");
        Ok(offer)
    }

    /// Remove a record. Returns whether one was actually removed.
    pub async fn delete(&self, id: &str) -> bool {
        let removed = self.offers.write().await.remove(id).is_some();
        if removed {
            info!(id = %id, "offer deleted");
        }
        removed
    }
}

impl Default for OfferStore {
    fn default() -> Self {
        Self::new()
    }
}
