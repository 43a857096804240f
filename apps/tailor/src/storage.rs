//! Optional external artifact storage.
//!
//! The session store in [`crate::session`] is the system of record for
//! downloads; anything beyond it (object storage, a user's document history)
//! is strictly best-effort. A failed save here must never fail or roll back a
//! generation that already succeeded, so the only public entry point logs the
//! error and moves on.

use async_trait::async_trait;
use tracing::warn;

use crate::session::GenerationSession;

/// Seam for an optional durable artifact sink (e.g. object storage).
#[async_trait]
pub trait ArtifactStorage: Send + Sync {
    async fn persist(&self, session: &GenerationSession) -> anyhow::Result<()>;
}

/// Persists a session to optional storage, swallowing any error.
pub async fn persist_non_fatal(storage: &dyn ArtifactStorage, session: &GenerationSession) {
    if let Err(e) = storage.persist(session).await {
        warn!(
            "Non-fatal: failed to persist session {} to external storage: {e}",
            session.session_id
        );
    }
}
