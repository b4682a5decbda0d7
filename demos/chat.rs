//! Example demonstrating text completions.
//!
//! This example shows how to:
//! - Build a shared client configuration once at startup
//! - Ask a one-shot question
//! - Carry chat history into a follow-up question

use dotenv::dotenv;

use hens_ai::{ChatTurn, ClientConfig, OpenRouter, TextOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::new(std::env::var("OPENROUTER_API_KEY")?)
        .with_model("deepseek/deepseek-chat".to_string())
        .with_system_message("Answer in relaxed, modern Indonesian".to_string());
    let client = OpenRouter::new(config)?;

    let question = "What is the tallest mountain in Indonesia?";
    let answer = client.text_response(question, TextOptions::new()).await?;
    println!("Q: {question}");
    println!("A: {answer}\n");

    let follow_up = "How hard is it to climb?";
    let history = vec![
        ChatTurn {
            is_bot: false,
            text: question.to_string(),
        },
        ChatTurn {
            is_bot: true,
            text: answer,
        },
    ];
    let options = TextOptions::new()
        .with_enable_history(true)
        .with_chat_history(history);

    let answer = client.text_response(follow_up, options).await?;
    println!("Q: {follow_up}");
    println!("A: {answer}");

    Ok(())
}
