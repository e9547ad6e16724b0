// ABOUTME: Chat session holding an append-only transcript and delayed canned replies
// ABOUTME: Replies run as cancellable tokio tasks chained to keep submission order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::matcher::{respond, ChatTopic};
use crate::config::ChatConfig;
use crate::errors::{AppError, AppResult};
use nutriwise_core::constants::chat;
use nutriwise_core::models::ChatMessage;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

/// How a pending reply ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The reply was appended to the transcript
    Delivered,
    /// The reply was cancelled before it was appended
    Cancelled,
}

/// Handle to a reply that has not been appended yet
#[derive(Debug)]
pub struct PendingReply {
    topic: Option<ChatTopic>,
    handle: JoinHandle<()>,
}

impl PendingReply {
    /// Topic the reply was selected for
    #[must_use]
    pub const fn topic(&self) -> Option<ChatTopic> {
        self.topic
    }

    /// Stop the reply from being appended. Later replies are not held back.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the reply task has ended, delivered or not
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the reply task to end
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` if the reply task panicked
    pub async fn wait(self) -> AppResult<ReplyOutcome> {
        match self.handle.await {
            Ok(()) => Ok(ReplyOutcome::Delivered),
            Err(e) if e.is_cancelled() => Ok(ReplyOutcome::Cancelled),
            Err(e) => Err(AppError::internal(format!("Chat reply task failed: {e}"))),
        }
    }
}

/// Decrements the outstanding-reply count when the reply task ends or is dropped
struct PendingGuard(Arc<AtomicUsize>);

impl PendingGuard {
    fn register(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// One visitor's conversation with the assistant
pub struct ChatSession {
    transcript: Arc<Mutex<Vec<ChatMessage>>>,
    reply_delay: Duration,
    pending: Arc<AtomicUsize>,
    // Ends when the most recently submitted reply task ends
    last_reply: Option<oneshot::Receiver<()>>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(Duration::from_millis(chat::DEFAULT_REPLY_DELAY_MS))
    }
}

impl ChatSession {
    /// New session seeded with the assistant greeting
    #[must_use]
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            transcript: Arc::new(Mutex::new(vec![ChatMessage::bot(chat::GREETING)])),
            reply_delay,
            pending: Arc::new(AtomicUsize::new(0)),
            last_reply: None,
        }
    }

    /// New session using the configured reply delay
    #[must_use]
    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.reply_delay)
    }

    /// Delay applied to each reply
    #[must_use]
    pub const fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Change the delay for replies submitted from now on
    pub fn set_reply_delay(&mut self, reply_delay: Duration) {
        self.reply_delay = reply_delay;
    }

    /// Append the user's message and schedule the canned reply.
    ///
    /// Input that is empty after trimming is ignored and returns `None`.
    ///
    /// # Panics
    ///
    /// Panics if polled outside a tokio runtime, since the reply is scheduled
    /// with `tokio::spawn`.
    pub async fn submit(&mut self, input: &str) -> Option<PendingReply> {
        let content = input.trim();
        if content.is_empty() {
            return None;
        }

        self.transcript
            .lock()
            .await
            .push(ChatMessage::user(content));

        let reply = respond(content);
        debug!(topic = ?reply.topic, "Scheduling canned reply");

        let (done_tx, done_rx) = oneshot::channel::<()>();
        let previous = self.last_reply.replace(done_rx);
        let guard = PendingGuard::register(&self.pending);
        let transcript = Arc::clone(&self.transcript);
        let delay = self.reply_delay;

        let handle = tokio::spawn(async move {
            let _guard = guard;
            let _done = done_tx;
            sleep(delay).await;
            if let Some(previous) = previous {
                // Resolves when the earlier task ends, whether delivered or cancelled
                let _ = previous.await;
            }
            transcript.lock().await.push(ChatMessage::bot(reply.text));
        });

        Some(PendingReply {
            topic: reply.topic,
            handle,
        })
    }

    /// Whether any reply is still outstanding
    #[must_use]
    pub fn is_awaiting_reply(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    /// Snapshot of the transcript in append order
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.clone()
    }
}
