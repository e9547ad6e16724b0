// ABOUTME: Rule-based nutrition chat assistant
// ABOUTME: Keyword matcher plus a session that appends delayed replies to a transcript
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Ordered keyword groups and canned replies
pub mod matcher;
/// Transcript and delayed reply scheduling
pub mod session;

pub use matcher::{respond, CannedReply, ChatTopic, DEFAULT_RESPONSE, KEYWORD_GROUPS};
pub use session::{ChatSession, PendingReply, ReplyOutcome};
