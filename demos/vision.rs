//! Example demonstrating image analysis.
//!
//! This example shows how to:
//! - Analyze an image with a bare prompt string
//! - Override the vision model and temperature with [`ImageConfig`]

use dotenv::dotenv;

use hens_ai::{ClientConfig, ImageConfig, OpenRouter};

const IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/3/3d/Borobudur_Temple.jpg";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::new(std::env::var("OPENROUTER_API_KEY")?);
    let client = OpenRouter::new(config)?;

    let description = client
        .image_analysis(IMAGE_URL, "What landmark is shown in this photo?")
        .await?;
    println!("Landmark: {description}\n");

    let details = client
        .image_analysis(
            IMAGE_URL,
            ImageConfig::new()
                .with_model("openai/gpt-4o")
                .with_prompt("List the architectural features visible in this image.")
                .with_temperature(0.2),
        )
        .await?;
    println!("Details: {details}");

    Ok(())
}
