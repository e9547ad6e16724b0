// ABOUTME: Chat subcommand, scripted from arguments or interactive over stdin
// ABOUTME: Waits for each delayed reply before reading the next message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display;
use nutriwise::chat::ChatSession;
use nutriwise::config::AppConfig;
use nutriwise::errors::{AppError, AppResult};
use tokio::io::{self, AsyncBufReadExt, BufReader};

/// Send each message in turn and print the full transcript
pub async fn scripted(config: &AppConfig, messages: &[String], json: bool) -> AppResult<()> {
    let mut session = ChatSession::from_config(&config.chat);

    for message in messages {
        if let Some(reply) = session.submit(message).await {
            reply.wait().await?;
        }
    }

    let transcript = session.transcript().await;
    if json {
        display::print_json(&transcript)
    } else {
        transcript.iter().for_each(display::print_message);
        Ok(())
    }
}

/// Read messages from stdin until EOF or "exit"
pub async fn interactive(config: &AppConfig) -> AppResult<()> {
    let mut session = ChatSession::from_config(&config.chat);
    if let Some(greeting) = session.transcript().await.first() {
        display::print_message(greeting);
    }
    println!("(type 'exit' to leave)");

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| AppError::internal(format!("Failed to read stdin: {e}")))?
    {
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }
        let Some(reply) = session.submit(&line).await else {
            continue;
        };
        println!("NutriWise is typing...");
        reply.wait().await?;
        if let Some(message) = session.transcript().await.last() {
            display::print_message(message);
        }
    }
    Ok(())
}
