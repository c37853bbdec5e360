//! Per-session conversation memory.
//!
//! Histories grow monotonically for the lifetime of the process; the
//! planner and aggregator only ever consume the most recent
//! [`HISTORY_WINDOW`] turns. The store is a trait so the in-memory map can
//! be swapped for a backend with eviction without touching the pipeline.

use crate::types::ConversationTurn;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Number of recent turns fed to the planner and aggregator.
pub const HISTORY_WINDOW: usize = 3;

/// Session-keyed conversation history.
pub trait SessionStore: Send + Sync {
    /// Full history for a session; empty for a session never seen.
    fn history(&self, session_id: &str) -> Vec<ConversationTurn>;

    /// Record one completed (query, answer) exchange.
    fn append(&self, session_id: &str, query: &str, answer: &str);
}

/// Process-local store backed by a locked map.
///
/// Has no eviction policy: sessions accumulate for the lifetime of the
/// process. Inject a different [`SessionStore`] where that matters.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Vec<ConversationTurn>>>,
}

impl InMemorySessionStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn history(&self, session_id: &str) -> Vec<ConversationTurn> {
        self.sessions
            .read()
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    fn append(&self, session_id: &str, query: &str, answer: &str) {
        self.sessions
            .write()
            .entry(session_id.to_string())
            .or_default()
            .push(ConversationTurn::new(query, answer));
    }
}

/// The trailing [`HISTORY_WINDOW`] turns of a history.
pub fn recent_turns(history: &[ConversationTurn]) -> &[ConversationTurn] {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    &history[start..]
}
