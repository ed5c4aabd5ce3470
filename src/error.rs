/// The two error kinds this service surfaces: an unknown identifier, and
/// everything else.
///
/// `NotFound` carries a human-readable message and maps to 404 where the
/// route contract calls for it. `Internal` wraps any other fault; routes
/// log the full chain and return a generic 500.
#[derive(Debug, thiserror::Error)]
pub enum OfferdError {
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl OfferdError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OfferdError::NotFound(_))
    }
}
