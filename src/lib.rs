//! # hens-ai
//!
//! OpenRouter chat completions client with optional web search and image
//! analysis.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hens_ai::{ClientConfig, OpenRouter, TextOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new(std::env::var("OPENROUTER_API_KEY")?);
//!     let client = OpenRouter::new(config)?;
//!
//!     let answer = client
//!         .text_response("What is OpenRouter?", TextOptions::new())
//!         .await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! Image analysis accepts a bare prompt string or a full
//! [`ImageConfig`]:
//!
//! ```rust,no_run
//! # use hens_ai::{ClientConfig, OpenRouter};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = OpenRouter::new(ClientConfig::new("key".to_string()))?;
//! let description = client
//!     .image_analysis("https://example.com/cat.png", "What breed is this cat?")
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod constants;
mod error;
mod http;
mod message;
mod request;
mod response;

pub use client::OpenRouter;
pub use config::{ClientConfig, ImageConfig, ImageOptions, TextOptions};
pub use error::AiError;
pub use http::HttpConfig;
pub use message::{ChatTurn, ContentPart, ImageUrl, Message, MessageContent, Role};
