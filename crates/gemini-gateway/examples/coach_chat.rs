//! Simple test for the coach gateway.
//!
//! Run with: cargo run -p gemini-gateway --example coach_chat
//! Or with a custom message: cargo run -p gemini-gateway --example coach_chat -- "Your message here"
//!
//! Set GEMINI_API_KEY in .env for live responses; without it the gateway
//! answers from its offline fallbacks.

use coach_core::{BibleKnowledgeLevel, ChatMessage, ConversationLog, UserProfile};
use gemini_gateway::Gateway;
use std::env;

#[tokio::main]
async fn main() {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Get message from command line args or use default
    let args: Vec<String> = env::args().collect();
    let message_text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "I've been feeling anxious this week. Where should I turn?".to_string()
    };

    println!("Initializing gateway...");
    let gateway = Gateway::from_env();
    println!(
        "Model client configured: {}",
        if gateway.has_client() { "yes" } else { "no (degraded mode)" }
    );
    println!();

    let profile = UserProfile::new(
        Some("Taylor".to_string()),
        "Develop a consistent prayer life",
        BibleKnowledgeLevel::Beginner,
        "Exploring",
    );

    let log = ConversationLog::default();
    log.append("coach", ChatMessage::user(&message_text)).await;

    println!("Sending: \"{message_text}\"");
    println!("Waiting for response...\n");

    let history = log.messages("coach").await;
    let response = gateway
        .coach_response(&message_text, &history[..history.len() - 1], Some(&profile))
        .await;
    log.append("coach", response.clone()).await;

    println!("=== Response ===");
    println!("{}", response.text);
    if let Some(suggestions) = &response.suggestions {
        println!("--- Suggestions ---");
        for suggestion in suggestions {
            println!("- {suggestion}");
        }
    }
    println!("================");
}
