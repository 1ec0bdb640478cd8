//! Asynchronous chat turns.
//!
//! A single worker task owns reply selection. Submissions travel over a
//! bounded channel, so overlapping submissions queue in arrival order and each
//! gets exactly one reply. One turn runs
//! `Idle -> UserSubmitted -> ComposingResponse -> ResponseAppended -> Idle`;
//! the composing delay is fixed and never cancelled.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::{Notify, RwLock, mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::history::ChatMessage;
use crate::selector::ResponseSelector;

/// Phase of the turn currently being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "messageId", rename_all = "snake_case")]
pub enum TurnState {
    Idle,
    UserSubmitted(Uuid),
    ComposingResponse(Uuid),
    ResponseAppended(Uuid),
}

impl TurnState {
    /// Whether the UI should show its "composing" indicator.
    pub fn is_busy(&self) -> bool {
        !matches!(self, TurnState::Idle)
    }
}

struct Submission {
    text: String,
    reply: oneshot::Sender<ChatMessage>,
}

impl core::fmt::Debug for Submission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Submission").field("text", &self.text).finish()
    }
}

/// Builder for the chat worker.
#[derive(Debug, Clone, Default)]
pub struct ChatService {
    config: ChatConfig,
    selector: ResponseSelector,
    history: Vec<ChatMessage>,
}

impl ChatService {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            selector: ResponseSelector::german(),
            history: Vec::new(),
        }
    }

    pub fn with_selector(mut self, selector: ResponseSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Start from an existing transcript (e.g. [`crate::seed_history`]).
    pub fn with_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.history = history;
        self
    }

    /// Spawn the worker on the current tokio runtime.
    pub fn start(self) -> (ChatHandle, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::channel::<Submission>(self.config.queue_capacity.max(1));
        let (state_tx, state_rx) = watch::channel(TurnState::Idle);
        let transcript = Arc::new(RwLock::new(self.history));
        let shutdown = Arc::new(Notify::new());

        let handle = ChatHandle {
            tx,
            state: state_rx,
            transcript: transcript.clone(),
            shutdown: shutdown.clone(),
        };

        let delay = self.config.response_delay();
        let delay_ms = self.config.response_delay_ms;
        let selector = self.selector;

        let worker = tokio::spawn(async move {
            tracing::info!(delay_ms, "chat worker started");

            loop {
                tokio::select! {
                    _ = shutdown.notified() => {
                        tracing::info!("chat worker received shutdown signal");
                        break;
                    }
                    submission = rx.recv() => {
                        let Some(Submission { text, reply }) = submission else {
                            tracing::debug!("all chat handles dropped");
                            break;
                        };

                        let message = ChatMessage::pending(text, Utc::now());
                        let id = message.id;
                        transcript.write().await.push(message.clone());
                        state_tx.send_replace(TurnState::UserSubmitted(id));

                        state_tx.send_replace(TurnState::ComposingResponse(id));
                        tokio::time::sleep(delay).await;

                        let kind = selector.classify(&message.user);
                        let bot = selector.select(&message.user).to_owned();
                        let answered = message.answered(bot, Utc::now());
                        {
                            let mut transcript = transcript.write().await;
                            if let Some(slot) = transcript.iter_mut().rev().find(|m| m.id == id) {
                                *slot = answered.clone();
                            }
                        }
                        state_tx.send_replace(TurnState::ResponseAppended(id));
                        tracing::info!(message_id = %id, ?kind, "chat reply appended");

                        if reply.send(answered).is_err() {
                            tracing::debug!(message_id = %id, "submitter stopped waiting for reply");
                        }
                        state_tx.send_replace(TurnState::Idle);
                    }
                }
            }
        });

        (handle, worker)
    }
}

/// Cheap, cloneable handle to a running chat worker.
#[derive(Debug, Clone)]
pub struct ChatHandle {
    tx: mpsc::Sender<Submission>,
    state: watch::Receiver<TurnState>,
    transcript: Arc<RwLock<Vec<ChatMessage>>>,
    shutdown: Arc<Notify>,
}

impl ChatHandle {
    /// Submit a message and wait for its reply.
    ///
    /// Whitespace-only text is rejected without starting a turn. If another
    /// turn is in progress, this one waits its turn.
    pub async fn send(&self, text: impl Into<String>) -> Result<ChatMessage, ChatError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Submission {
                text,
                reply: reply_tx,
            })
            .await
            .map_err(|_| ChatError::Closed)?;

        reply_rx.await.map_err(|_| ChatError::Closed)
    }

    pub fn state(&self) -> TurnState {
        *self.state.borrow()
    }

    pub fn is_composing(&self) -> bool {
        self.state().is_busy()
    }

    /// Watch turn transitions (only the latest state is retained).
    pub fn subscribe(&self) -> watch::Receiver<TurnState> {
        self.state.clone()
    }

    /// Snapshot of the transcript, including a pending entry while composing.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.clone()
    }

    /// Stop the worker after the turn in progress (if any) completes.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::seed_history;
    use crate::selector::ResponseKind;
    use crate::templates;
    use std::time::Duration;
    use tokio::time::Instant;

    fn start() -> ChatHandle {
        let (handle, _worker) = ChatService::new(ChatConfig::default()).start();
        handle
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_fixed_delay() {
        let chat = start();
        let started = Instant::now();

        let message = chat.send("Zeig mir alle Deals mit > 50%").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1_500));
        assert_eq!(message.bot.as_deref(), Some(templates::PIPELINE_SUMMARY));
        assert!(message.answered_at.is_some());
        assert_eq!(chat.state(), TurnState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn composing_state_is_visible_during_delay() {
        let chat = start();
        let sender = chat.clone();
        let pending = tokio::spawn(async move { sender.send("hallo").await });

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(matches!(chat.state(), TurnState::ComposingResponse(_)));
        assert!(chat.is_composing());

        let transcript = chat.transcript().await;
        assert_eq!(transcript.len(), 1);
        assert!(transcript[0].is_pending());

        let message = pending.await.unwrap().unwrap();
        assert_eq!(message.bot.as_deref(), Some(templates::FALLBACK));
        assert_eq!(chat.state(), TurnState::Idle);
        assert!(!chat.transcript().await[0].is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_submissions_queue_in_order() {
        let chat = start();
        let started = Instant::now();

        let first = chat.clone();
        let second = chat.clone();
        let a = tokio::spawn(async move { first.send("Führe eine Analyse durch").await });
        tokio::task::yield_now().await;
        let b = tokio::spawn(async move { second.send("Statistik bitte").await });

        let a = a.await.unwrap().unwrap();
        let b = b.await.unwrap().unwrap();

        assert_eq!(a.bot.as_deref(), Some(ResponseKind::NextBestAction.template()));
        assert_eq!(b.bot.as_deref(), Some(ResponseKind::PerformanceStats.template()));
        // Two sequential turns, each with its own delay.
        assert!(started.elapsed() >= Duration::from_millis(3_000));

        let transcript = chat.transcript().await;
        let users: Vec<&str> = transcript.iter().map(|m| m.user.as_str()).collect();
        assert_eq!(users, vec!["Führe eine Analyse durch", "Statistik bitte"]);
        assert!(transcript.iter().all(|m| !m.is_pending()));
    }

    #[tokio::test(start_paused = true)]
    async fn blank_message_is_rejected_without_a_turn() {
        let chat = start();
        assert_eq!(chat.send("   ").await.unwrap_err(), ChatError::EmptyMessage);
        assert!(chat.transcript().await.is_empty());
        assert_eq!(chat.state(), TurnState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn seeded_history_is_preserved() {
        let (chat, _worker) = ChatService::new(ChatConfig::default())
            .with_history(seed_history(Utc::now()))
            .start();

        chat.send("pipeline").await.unwrap();
        let transcript = chat.transcript().await;
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[3].user, "pipeline");
    }

    #[tokio::test(start_paused = true)]
    async fn send_after_shutdown_reports_closed() {
        let (chat, worker) = ChatService::new(ChatConfig::default()).start();
        chat.shutdown();
        worker.await.unwrap();
        assert_eq!(chat.send("hallo").await.unwrap_err(), ChatError::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_delay_is_honoured() {
        let config = ChatConfig::default().with_response_delay(Duration::from_millis(20));
        let (chat, _worker) = ChatService::new(config).start();
        let started = Instant::now();
        chat.send("leads").await.unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(20));
        assert!(elapsed < Duration::from_millis(1_500));
    }
}
