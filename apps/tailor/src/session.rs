//! Generation session store — an ephemeral keyed arena holding rendered
//! artifacts until they are downloaded.
//!
//! Eviction is lazy: every `put` sweeps entries older than the TTL before
//! inserting, so cleanup piggybacks on traffic with no background timer.
//! A `get` racing a sweep may observe a just-evicted id as absent; that is
//! the documented, benign behavior — there is no stronger consistency
//! requirement.

use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

/// Default artifact TTL: one hour.
pub const DEFAULT_TTL_MS: i64 = 3_600_000;

/// A rendered document plus the content model it was rendered from.
#[derive(Debug, Clone)]
pub struct RenderedArtifact {
    pub bytes: Bytes,
    pub filename: String,
    /// Snapshot of the content model, kept for preview endpoints.
    pub content: Value,
}

/// One completed generation, keyed by an opaque session id. The store owns
/// the artifacts exclusively; nothing else retains references after handoff.
#[derive(Debug, Clone)]
pub struct GenerationSession {
    pub session_id: String,
    pub cv: RenderedArtifact,
    pub cover_letter: Option<RenderedArtifact>,
    pub created_at: DateTime<Utc>,
}

pub struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, GenerationSession>>,
}

impl SessionStore {
    pub fn new(ttl_ms: i64) -> Self {
        Self {
            ttl: Duration::milliseconds(ttl_ms),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Stores the artifacts of a finished generation under a fresh opaque id,
    /// sweeping expired sessions first. Keys are generated per request, so
    /// concurrent inserts cannot collide.
    pub fn put(&self, cv: RenderedArtifact, cover_letter: Option<RenderedArtifact>) -> String {
        self.sweep(self.ttl);

        let session_id = Uuid::new_v4().to_string();
        let session = GenerationSession {
            session_id: session_id.clone(),
            cv,
            cover_letter,
            created_at: Utc::now(),
        };

        self.sessions
            .lock()
            .expect("session store lock poisoned")
            .insert(session_id.clone(), session);
        debug!("Stored generation session {session_id}");
        session_id
    }

    /// Fetches a session by id. `None` for unknown or already-evicted ids —
    /// callers translate this into their own not-found outcome.
    pub fn get(&self, session_id: &str) -> Option<GenerationSession> {
        self.sessions
            .lock()
            .expect("session store lock poisoned")
            .get(session_id)
            .cloned()
    }

    /// Removes every session older than `max_age`. Returns the eviction count.
    pub fn sweep(&self, max_age: Duration) -> usize {
        let cutoff = Utc::now() - max_age;
        let mut sessions = self.sessions.lock().expect("session store lock poisoned");
        let before = sessions.len();
        sessions.retain(|_, session| session.created_at > cutoff);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Swept {evicted} expired generation session(s)");
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .expect("session store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}
