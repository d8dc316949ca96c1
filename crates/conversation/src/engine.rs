//! Session registry for the AI Campaign Studio chat.

use std::collections::VecDeque;
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::info;
use uuid::Uuid;

use studio_core::config::StudioConfig;
use studio_core::error::{StudioError, StudioResult};

use crate::script::{build_script, extract_product_name};
use crate::session::{Session, SessionSnapshot};

/// Owns all live chat sessions. Each session keeps the single-writer
/// discipline internally; the engine only routes commands by id.
pub struct StudioEngine {
    sessions: DashMap<Uuid, Arc<Session>>,
    /// Insertion order, for evicting the oldest session at capacity.
    order: Mutex<VecDeque<Uuid>>,
    config: StudioConfig,
}

impl StudioEngine {
    pub fn new(config: StudioConfig) -> Self {
        info!(
            max_sessions = config.max_sessions,
            delay_scale = config.delay_scale,
            "Studio engine initialized"
        );
        Self {
            sessions: DashMap::new(),
            order: Mutex::new(VecDeque::new()),
            config,
        }
    }

    /// Starts a new session from a free-text prompt. The product name is
    /// extracted from the prompt and substituted into the script.
    pub fn start_session(&self, prompt: &str) -> SessionSnapshot {
        let product = extract_product_name(prompt);
        let script = build_script(&product).scale_delays(self.config.delay_scale);

        let id = Uuid::new_v4();
        let session = Session::new(id, script);
        session.start(prompt);

        info!(session_id = %id, product = %product, "Studio session started");
        self.sessions.insert(id, session);

        let mut order = self.order.lock();
        order.push_back(id);
        while order.len() > self.config.max_sessions {
            if let Some(evicted) = order.pop_front() {
                if let Some((_, old)) = self.sessions.remove(&evicted) {
                    old.reset();
                    info!(session_id = %evicted, "Evicted oldest studio session");
                }
            }
        }

        self.snapshot(id).unwrap_or_else(|_| SessionSnapshot {
            session_id: id,
            transcript: Vec::new(),
            is_typing: false,
            typing_persona: None,
            awaiting_choice: false,
            finished: false,
        })
    }

    pub fn snapshot(&self, id: Uuid) -> StudioResult<SessionSnapshot> {
        self.sessions
            .get(&id)
            .map(|s| s.snapshot())
            .ok_or(StudioError::SessionNotFound(id))
    }

    /// Resolves the pending choice of the given session.
    pub fn resolve_choice(&self, id: Uuid, value: &str) -> StudioResult<SessionSnapshot> {
        let session = self
            .sessions
            .get(&id)
            .map(|s| Arc::clone(&s))
            .ok_or(StudioError::SessionNotFound(id))?;
        session.resolve_choice(value)?;
        Ok(session.snapshot())
    }

    /// Resets a session to its idle state, cancelling any pending step.
    pub fn reset(&self, id: Uuid) -> StudioResult<()> {
        let session = self
            .sessions
            .get(&id)
            .map(|s| Arc::clone(&s))
            .ok_or(StudioError::SessionNotFound(id))?;
        session.reset();
        Ok(())
    }

    /// Drops a session entirely.
    pub fn remove(&self, id: Uuid) -> StudioResult<()> {
        let (_, session) = self
            .sessions
            .remove(&id)
            .ok_or(StudioError::SessionNotFound(id))?;
        session.reset();
        self.order.lock().retain(|s| *s != id);
        Ok(())
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use std::time::Duration;

    fn engine() -> StudioEngine {
        StudioEngine::new(StudioConfig {
            max_sessions: 8,
            delay_scale: 1.0,
        })
    }

    async fn settle() {
        for _ in 0..120 {
            tokio::task::yield_now().await;
            tokio::time::sleep(Duration::from_millis(500)).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn full_campaign_build_flow() {
        let engine = engine();
        let snap = engine.start_session("Launch a campaign for our Hillwalker 2.0");
        let id = snap.session_id;

        // Play up to the objective question.
        settle().await;
        let snap = engine.snapshot(id).unwrap();
        assert!(snap.awaiting_choice);

        // Maya's greeting carries the extracted product name.
        let greeting = snap
            .transcript
            .iter()
            .find_map(|m| match m {
                Message::PersonaText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .unwrap();
        assert!(greeting.contains("Hillwalker 2.0"));

        // Pick the conversions objective: Nova answers with the product
        // name, and exactly one analysis table lands before the next pause.
        engine.resolve_choice(id, "conversions").unwrap();
        settle().await;
        let snap = engine.snapshot(id).unwrap();
        assert!(snap.awaiting_choice);

        let after_choice: Vec<&Message> = snap
            .transcript
            .iter()
            .skip_while(|m| !matches!(m, Message::UserEcho { text } if text == "Drive sales & conversions"))
            .skip(1)
            .collect();
        match after_choice.first() {
            Some(Message::PersonaText { text, .. }) => assert!(text.contains("Hillwalker 2.0")),
            other => panic!("expected persona text after choice, got {other:?}"),
        }
        let analyses = after_choice
            .iter()
            .filter(|m| matches!(m, Message::AnalysisTable { .. }))
            .count();
        assert_eq!(analyses, 1);

        // Walk the rest of the scripted happy path to publication.
        for value in ["30000", "all_images", "build", "publish"] {
            engine.resolve_choice(id, value).unwrap();
            settle().await;
        }

        let snap = engine.snapshot(id).unwrap();
        assert!(snap.awaiting_choice, "script ends on a follow-up choice");
        let publishing = snap
            .transcript
            .iter()
            .filter(|m| m.is_publishing_status())
            .count();
        assert_eq!(publishing, 1, "live status list updates in place");
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_session_is_an_error() {
        let engine = engine();
        let id = Uuid::new_v4();
        assert!(matches!(
            engine.snapshot(id),
            Err(StudioError::SessionNotFound(_))
        ));
        assert!(matches!(
            engine.resolve_choice(id, "a"),
            Err(StudioError::SessionNotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn capacity_evicts_the_oldest_session() {
        let engine = StudioEngine::new(StudioConfig {
            max_sessions: 2,
            delay_scale: 1.0,
        });
        let first = engine.start_session("campaign for Alpha").session_id;
        engine.start_session("campaign for Beta");
        engine.start_session("campaign for Gamma");

        assert_eq!(engine.session_count(), 2);
        assert!(matches!(
            engine.snapshot(first),
            Err(StudioError::SessionNotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn reset_returns_session_to_idle() {
        let engine = engine();
        let id = engine.start_session("campaign for Alpha").session_id;
        settle().await;
        engine.reset(id).unwrap();

        let snap = engine.snapshot(id).unwrap();
        assert!(snap.transcript.is_empty());
        assert!(!snap.awaiting_choice);
    }
}
