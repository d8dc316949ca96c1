//! A single conversation session: transcript, gate context, pause state,
//! and the advancement task that plays the script out over time.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

use studio_core::error::{StudioError, StudioResult};

use crate::message::Message;
use crate::persona::PersonaId;
use crate::script::{ChoiceValue, Script};

/// Read-only view of a session handed to the presentation layer.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub transcript: Vec<Message>,
    pub is_typing: bool,
    pub typing_persona: Option<PersonaId>,
    pub awaiting_choice: bool,
    pub finished: bool,
}

struct SessionState {
    transcript: Vec<Message>,
    typing: Option<PersonaId>,
    /// Index of the choice-set step the script is paused at.
    paused_at: Option<usize>,
    /// The most recently resolved choice; never cleared within a run.
    gate: Option<ChoiceValue>,
    finished: bool,
    /// Bumped on every start/reset. Advancement tasks carry the epoch they
    /// were spawned under and bail out when it no longer matches, so a stale
    /// continuation can never touch a transcript that has been cleared.
    epoch: u64,
    cancel: CancellationToken,
}

/// One scripted conversation. The session is the only writer of its
/// transcript; external callers issue `start`, `resolve_choice`, and
/// `reset`, and read snapshots.
pub struct Session {
    id: Uuid,
    script: Script,
    state: Mutex<SessionState>,
}

impl Session {
    pub fn new(id: Uuid, script: Script) -> Arc<Self> {
        Arc::new(Self {
            id,
            script,
            state: Mutex::new(SessionState {
                transcript: Vec::new(),
                typing: None,
                paused_at: None,
                gate: None,
                finished: false,
                epoch: 0,
                cancel: CancellationToken::new(),
            }),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Begins playing the script. The transcript is reset to contain only
    /// the initiating user prompt; any in-flight advancement from a
    /// previous run is cancelled.
    pub fn start(self: &Arc<Self>, prompt: &str) {
        let (epoch, token) = {
            let mut state = self.state.lock();
            state.cancel.cancel();
            state.cancel = CancellationToken::new();
            state.epoch += 1;
            state.transcript = vec![Message::UserEcho {
                text: prompt.to_string(),
            }];
            state.typing = None;
            state.paused_at = None;
            state.gate = None;
            state.finished = false;
            (state.epoch, state.cancel.clone())
        };
        debug!(session_id = %self.id, epoch, "Session started");
        self.spawn_advance(0, epoch, token);
    }

    /// Returns the session to the idle pre-start state. Guarantees that no
    /// pending delayed step mutates the transcript afterwards.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.cancel.cancel();
        state.cancel = CancellationToken::new();
        state.epoch += 1;
        state.transcript.clear();
        state.typing = None;
        state.paused_at = None;
        state.gate = None;
        state.finished = false;
        debug!(session_id = %self.id, epoch = state.epoch, "Session reset");
    }

    /// Resolves the choice the script is paused at and resumes advancement.
    ///
    /// Rejected when the session is not paused (caller misuse, e.g. a
    /// double-click racing the resumed script). An unknown value is
    /// accepted but echoed verbatim, with a diagnostic: it means the
    /// presentation layer and the script disagree about the options.
    pub fn resolve_choice(self: &Arc<Self>, value: &str) -> StudioResult<()> {
        let (resume_from, epoch, token) = {
            let mut state = self.state.lock();
            let Some(paused_at) = state.paused_at else {
                warn!(session_id = %self.id, value, "resolve_choice while not paused");
                return Err(StudioError::NotAwaitingChoice);
            };

            let label = match self.script.get(paused_at).map(|s| &s.message) {
                Some(Message::ChoiceSet { choices }) => choices
                    .iter()
                    .find(|c| c.value == value)
                    .map(|c| c.label.clone()),
                _ => None,
            };
            let echo = label.unwrap_or_else(|| {
                warn!(
                    session_id = %self.id,
                    value,
                    step = paused_at,
                    "Choice value not declared by the paused step; echoing raw value"
                );
                value.to_string()
            });

            state.transcript.push(Message::UserEcho { text: echo });
            state.gate = Some(ChoiceValue::new(value));
            state.paused_at = None;
            (paused_at + 1, state.epoch, state.cancel.clone())
        };

        debug!(session_id = %self.id, value, resume_from, "Choice resolved");
        self.spawn_advance(resume_from, epoch, token);
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock();
        SessionSnapshot {
            session_id: self.id,
            transcript: state.transcript.clone(),
            is_typing: state.typing.is_some(),
            typing_persona: state.typing,
            awaiting_choice: state.paused_at.is_some(),
            finished: state.finished,
        }
    }

    fn spawn_advance(self: &Arc<Self>, from: usize, epoch: u64, token: CancellationToken) {
        let session = Arc::clone(self);
        tokio::spawn(async move {
            session.advance(from, epoch, token).await;
        });
    }

    /// Plays the script forward from `index` until it runs out of steps or
    /// pauses at a choice set. Gate-mismatched steps are skipped with no
    /// delay and no transcript mutation. The per-step sleep is the only
    /// suspension point; it races the cancellation token, and every
    /// mutation re-checks the epoch under the lock.
    async fn advance(self: Arc<Self>, mut index: usize, epoch: u64, token: CancellationToken) {
        loop {
            // Find the next eligible step and flag typing for persona text.
            let delay = {
                let mut state = self.state.lock();
                if state.epoch != epoch {
                    return;
                }
                loop {
                    let Some(step) = self.script.get(index) else {
                        state.typing = None;
                        state.finished = true;
                        debug!(session_id = %self.id, "Script complete");
                        return;
                    };
                    if let Some(gate) = &step.gate {
                        if state.gate.as_ref() != Some(gate) {
                            debug!(
                                session_id = %self.id,
                                step = index,
                                gate = %gate,
                                "Skipping gated step"
                            );
                            index += 1;
                            continue;
                        }
                    }
                    if let Some(persona) = step.message.persona() {
                        state.typing = Some(persona);
                    }
                    break step.delay;
                }
            };

            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(delay) => {}
            }

            // Publish the step's message.
            let paused = {
                let mut state = self.state.lock();
                if state.epoch != epoch {
                    return;
                }
                state.typing = None;

                // The script is immutable and `index` was validated above.
                let Some(step) = self.script.get(index) else {
                    return;
                };
                let message = &step.message;

                if message.is_publishing_status() {
                    match state
                        .transcript
                        .iter_mut()
                        .rfind(|m| m.is_publishing_status())
                    {
                        Some(slot) => *slot = message.clone(),
                        None => state.transcript.push(message.clone()),
                    }
                } else {
                    state.transcript.push(message.clone());
                }

                if message.is_choice_set() {
                    state.paused_at = Some(index);
                    true
                } else {
                    false
                }
            };

            if paused {
                return;
            }
            index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Choice, PlatformPublishState, PublishState};
    use crate::script::Step;
    use std::time::Duration;

    fn say(delay_ms: u64, text: &str) -> Step {
        Step {
            delay: Duration::from_millis(delay_ms),
            message: Message::PersonaText {
                persona: PersonaId::Maya,
                text: text.to_string(),
            },
            gate: None,
        }
    }

    fn ask(delay_ms: u64) -> Step {
        Step {
            delay: Duration::from_millis(delay_ms),
            message: Message::ChoiceSet {
                choices: vec![
                    Choice::new("Option A", "a"),
                    Choice::new("Option B", "b"),
                ],
            },
            gate: None,
        }
    }

    fn gated(value: &str, mut step: Step) -> Step {
        step.gate = Some(ChoiceValue::from(value));
        step
    }

    fn publishing(delay_ms: u64, state: PublishState) -> Step {
        Step {
            delay: Duration::from_millis(delay_ms),
            message: Message::PublishingStatus {
                platforms: vec![PlatformPublishState {
                    platform: "Meta".to_string(),
                    state,
                }],
            },
            gate: None,
        }
    }

    fn session(steps: Vec<Step>) -> Arc<Session> {
        Session::new(Uuid::new_v4(), Script::new(steps))
    }

    /// Lets spawned advancement tasks run and their timers fire. The paused
    /// clock auto-advances while the test itself sleeps, so this wall of
    /// virtual time costs nothing real.
    async fn settle() {
        for _ in 0..60 {
            tokio::task::yield_now().await;
            tokio::time::sleep(Duration::from_millis(500)).await;
        }
    }

    fn texts(snapshot: &SessionSnapshot) -> Vec<String> {
        snapshot
            .transcript
            .iter()
            .map(|m| match m {
                Message::UserEcho { text } => format!("user:{text}"),
                Message::PersonaText { text, .. } => format!("maya:{text}"),
                Message::ChoiceSet { .. } => "choices".to_string(),
                Message::PublishingStatus { .. } => "publishing".to_string(),
                other => format!("{other:?}"),
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn plays_ungated_steps_in_order() {
        let session = session(vec![say(100, "one"), say(300, "two"), say(50, "three")]);
        session.start("go");
        settle().await;

        let snap = session.snapshot();
        assert_eq!(
            texts(&snap),
            vec!["user:go", "maya:one", "maya:two", "maya:three"]
        );
        assert!(!snap.is_typing);
        assert!(snap.finished);
    }

    #[tokio::test(start_paused = true)]
    async fn typing_indicator_tracks_the_pending_persona() {
        let session = session(vec![say(1000, "hello")]);
        session.start("go");

        // Let the advancement task reach its sleep without moving the clock.
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        let snap = session.snapshot();
        assert!(snap.is_typing);
        assert_eq!(snap.typing_persona, Some(PersonaId::Maya));

        settle().await;
        let snap = session.snapshot();
        assert!(!snap.is_typing);
        assert_eq!(snap.transcript.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn pauses_at_choice_set_until_resolved() {
        let session = session(vec![say(100, "pick"), ask(100), say(100, "after")]);
        session.start("go");
        settle().await;

        let snap = session.snapshot();
        assert!(snap.awaiting_choice);
        assert_eq!(snap.transcript.len(), 3, "must not advance past the pause");

        session.resolve_choice("a").unwrap();
        settle().await;

        let snap = session.snapshot();
        assert!(!snap.awaiting_choice);
        assert_eq!(
            texts(&snap),
            vec!["user:go", "maya:pick", "choices", "user:Option A", "maya:after"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn skips_gate_mismatched_steps_without_their_delay() {
        let session = session(vec![
            say(100, "pick"),
            ask(100),
            // Would take a full minute if its delay were honoured.
            gated("a", say(60_000, "for a")),
            say(200, "always"),
        ]);
        session.start("go");
        settle().await;
        session.resolve_choice("b").unwrap();
        settle().await; // advances ~30s of virtual time, well short of 60s

        let snap = session.snapshot();
        let texts = texts(&snap);
        assert!(texts.contains(&"maya:always".to_string()));
        assert!(!texts.iter().any(|t| t.contains("for a")));
        assert!(snap.finished);
    }

    #[tokio::test(start_paused = true)]
    async fn publishing_status_replaces_in_place() {
        let session = session(vec![
            publishing(100, PublishState::Pending),
            publishing(100, PublishState::Publishing),
            publishing(100, PublishState::Live),
        ]);
        session.start("go");
        settle().await;

        let snap = session.snapshot();
        let publishing_entries: Vec<_> = snap
            .transcript
            .iter()
            .filter(|m| m.is_publishing_status())
            .collect();
        assert_eq!(publishing_entries.len(), 1);
        match publishing_entries[0] {
            Message::PublishingStatus { platforms } => {
                assert_eq!(platforms[0].state, PublishState::Live);
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn reset_cancels_pending_steps() {
        let session = session(vec![say(5000, "never")]);
        session.start("go");
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        session.reset();

        // Run the clock well past the original delay.
        tokio::time::sleep(Duration::from_secs(30)).await;

        let snap = session.snapshot();
        assert!(snap.transcript.is_empty());
        assert!(!snap.is_typing);
        assert!(!snap.awaiting_choice);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_supersedes_the_previous_run() {
        let session = session(vec![say(5000, "slow")]);
        session.start("first");
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        session.start("second");
        settle().await;

        let snap = session.snapshot();
        assert_eq!(texts(&snap), vec!["user:second", "maya:slow"]);
    }

    #[tokio::test(start_paused = true)]
    async fn resolve_choice_rejected_when_not_paused() {
        let session = session(vec![say(100, "only")]);
        session.start("go");
        settle().await;

        let err = session.resolve_choice("a").unwrap_err();
        assert!(matches!(err, StudioError::NotAwaitingChoice));
    }

    #[tokio::test(start_paused = true)]
    async fn double_resolution_is_rejected() {
        let session = session(vec![ask(100), say(100, "after")]);
        session.start("go");
        settle().await;

        session.resolve_choice("a").unwrap();
        // The second click races the resumed script and must lose.
        let err = session.resolve_choice("b").unwrap_err();
        assert!(matches!(err, StudioError::NotAwaitingChoice));

        settle().await;
        let snap = session.snapshot();
        let echoes = snap
            .transcript
            .iter()
            .filter(|m| matches!(m, Message::UserEcho { text } if text == "Option A"))
            .count();
        assert_eq!(echoes, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_choice_value_echoes_raw() {
        let session = session(vec![ask(100), gated("unknown_value", say(100, "matched"))]);
        session.start("go");
        settle().await;

        session.resolve_choice("unknown_value").unwrap();
        settle().await;

        let snap = session.snapshot();
        let texts = texts(&snap);
        assert!(texts.contains(&"user:unknown_value".to_string()));
        // The gate context is still set to the raw value.
        assert!(texts.contains(&"maya:matched".to_string()));
    }
}
