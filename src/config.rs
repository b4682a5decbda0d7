//! Client configuration and per-call option types.

use crate::constants;
use crate::http::HttpConfig;
use crate::message::ChatTurn;

/// Stored configuration for an [`OpenRouter`](crate::OpenRouter) client.
///
/// Built once at startup and never mutated by requests; per-call options
/// override individual fields for the duration of a single call only.
pub struct ClientConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    /// Attaches the web search plugin block to every text completion.
    pub web_search: bool,
    pub max_web_results: u32,
    pub system_message: String,
    /// Whether text completions include caller-supplied chat history.
    pub enable_history: bool,
    pub base_url: String,
    pub http_referer: String,
    pub x_title: String,
    pub http_config: HttpConfig,
}

impl ClientConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: constants::DEFAULT_MODEL.to_string(),
            temperature: constants::DEFAULT_TEMPERATURE,
            web_search: false,
            max_web_results: constants::DEFAULT_MAX_WEB_RESULTS,
            system_message: constants::DEFAULT_SYSTEM_MESSAGE.to_string(),
            enable_history: false,
            base_url: constants::API_BASE.to_string(),
            http_referer: constants::DEFAULT_HTTP_REFERER.to_string(),
            x_title: constants::DEFAULT_X_TITLE.to_string(),
            http_config: HttpConfig::default(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_web_search(mut self, web_search: bool) -> Self {
        self.web_search = web_search;
        self
    }

    pub fn with_max_web_results(mut self, max_web_results: u32) -> Self {
        self.max_web_results = max_web_results;
        self
    }

    pub fn with_system_message(mut self, system_message: String) -> Self {
        self.system_message = system_message;
        self
    }

    pub fn with_enable_history(mut self, enable_history: bool) -> Self {
        self.enable_history = enable_history;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_http_referer(mut self, http_referer: String) -> Self {
        self.http_referer = http_referer;
        self
    }

    pub fn with_x_title(mut self, x_title: String) -> Self {
        self.x_title = x_title;
        self
    }

    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }
}

/// Per-call options for [`text_response`](crate::OpenRouter::text_response).
///
/// Every field is optional; unset fields fall back to the stored
/// [`ClientConfig`]. Note the asymmetry inherited from the API surface:
/// `web_search` here switches the model to its `:online` variant, while
/// [`ClientConfig::web_search`] attaches the search plugin block. The two
/// mechanisms are independent.
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    /// Overrides the stored system message. An empty string is treated as
    /// unset and falls back to the stored value.
    pub system_message: Option<String>,
    pub chat_history: Option<Vec<ChatTurn>>,
    pub web_search: Option<bool>,
    pub enable_history: Option<bool>,
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system_message(mut self, system_message: impl Into<String>) -> Self {
        self.system_message = Some(system_message.into());
        self
    }

    pub fn with_chat_history(mut self, chat_history: Vec<ChatTurn>) -> Self {
        self.chat_history = Some(chat_history);
        self
    }

    pub fn with_web_search(mut self, web_search: bool) -> Self {
        self.web_search = Some(web_search);
        self
    }

    pub fn with_enable_history(mut self, enable_history: bool) -> Self {
        self.enable_history = Some(enable_history);
        self
    }

    pub(crate) fn resolved_system_message<'a>(&'a self, config: &'a ClientConfig) -> &'a str {
        self.system_message
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&config.system_message)
    }

    pub(crate) fn resolved_enable_history(&self, config: &ClientConfig) -> bool {
        self.enable_history.unwrap_or(config.enable_history)
    }
}

/// Options accepted by [`image_analysis`](crate::OpenRouter::image_analysis).
///
/// Callers may pass a bare prompt string (via `Into`) or a full
/// [`ImageConfig`]. Unset fields resolve to the vision defaults rather than
/// the stored [`ClientConfig`].
#[derive(Debug, Clone)]
pub enum ImageOptions {
    Prompt(String),
    Options(ImageConfig),
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self::Options(ImageConfig::default())
    }
}

impl From<&str> for ImageOptions {
    fn from(prompt: &str) -> Self {
        Self::Prompt(prompt.to_string())
    }
}

impl From<String> for ImageOptions {
    fn from(prompt: String) -> Self {
        Self::Prompt(prompt)
    }
}

impl From<ImageConfig> for ImageOptions {
    fn from(config: ImageConfig) -> Self {
        Self::Options(config)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageConfig {
    pub model: Option<String>,
    pub prompt: Option<String>,
    pub temperature: Option<f32>,
}

impl ImageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

pub(crate) struct ResolvedImageOptions {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
}

impl ImageOptions {
    pub(crate) fn resolve(self) -> ResolvedImageOptions {
        let (model, prompt, temperature) = match self {
            Self::Prompt(prompt) => (None, Some(prompt), None),
            Self::Options(config) => (config.model, config.prompt, config.temperature),
        };

        ResolvedImageOptions {
            model: model.unwrap_or_else(|| constants::DEFAULT_VISION_MODEL.to_string()),
            prompt: prompt.unwrap_or_else(|| constants::DEFAULT_VISION_PROMPT.to_string()),
            temperature: temperature.unwrap_or(constants::DEFAULT_TEMPERATURE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_uses_documented_defaults() {
        let config = ClientConfig::new("key".to_string());

        assert_eq!(config.model, "deepseek/deepseek-chat:free");
        assert_eq!(config.temperature, 1.0);
        assert!(!config.web_search);
        assert_eq!(config.max_web_results, 5);
        assert_eq!(
            config.system_message,
            "You are an AI assistant that helps answer questions"
        );
        assert!(!config.enable_history);
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.http_referer, "https://henotic.space");
        assert_eq!(config.x_title, "Henotic Technology");
        assert!(config.http_config.timeout.is_none());
    }

    #[test]
    fn builders_replace_defaults() {
        let config = ClientConfig::new("key".to_string())
            .with_model("qwen/qwen-2.5-72b-instruct".to_string())
            .with_temperature(0.3)
            .with_web_search(true)
            .with_max_web_results(2)
            .with_system_message("Be brief".to_string())
            .with_enable_history(true)
            .with_base_url("http://localhost:8080".to_string())
            .with_http_referer("https://example.org".to_string())
            .with_x_title("Example App".to_string())
            .with_http_config(HttpConfig {
                timeout: Some(std::time::Duration::from_secs(30)),
            });

        assert_eq!(config.model, "qwen/qwen-2.5-72b-instruct");
        assert_eq!(config.temperature, 0.3);
        assert!(config.web_search);
        assert_eq!(config.max_web_results, 2);
        assert_eq!(config.system_message, "Be brief");
        assert!(config.enable_history);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.http_referer, "https://example.org");
        assert_eq!(config.x_title, "Example App");
        assert_eq!(
            config.http_config.timeout,
            Some(std::time::Duration::from_secs(30))
        );
    }

    #[test]
    fn per_call_system_message_wins_when_non_empty() {
        let config = ClientConfig::new("key".to_string());
        let options = TextOptions::new().with_system_message("Answer in French");

        assert_eq!(options.resolved_system_message(&config), "Answer in French");
    }

    #[test]
    fn empty_per_call_system_message_falls_back_to_stored_value() {
        let config = ClientConfig::new("key".to_string()).with_system_message("stored".to_string());

        let empty = TextOptions::new().with_system_message("");
        assert_eq!(empty.resolved_system_message(&config), "stored");

        let unset = TextOptions::new();
        assert_eq!(unset.resolved_system_message(&config), "stored");
    }

    #[test]
    fn history_flag_prefers_per_call_value_including_false() {
        let config = ClientConfig::new("key".to_string()).with_enable_history(true);

        assert!(TextOptions::new().resolved_enable_history(&config));
        assert!(
            !TextOptions::new()
                .with_enable_history(false)
                .resolved_enable_history(&config)
        );
    }

    #[test]
    fn bare_string_resolves_to_prompt_with_vision_defaults() {
        let resolved = ImageOptions::from("What breed is this dog?").resolve();

        assert_eq!(resolved.model, "anthropic/claude-3.5-sonnet");
        assert_eq!(resolved.prompt, "What breed is this dog?");
        assert_eq!(resolved.temperature, 1.0);
    }

    #[test]
    fn owned_string_resolves_to_prompt_with_vision_defaults() {
        let resolved = ImageOptions::from(String::from("What breed is this dog?")).resolve();

        assert_eq!(resolved.model, "anthropic/claude-3.5-sonnet");
        assert_eq!(resolved.prompt, "What breed is this dog?");
        assert_eq!(resolved.temperature, 1.0);
    }

    #[test]
    fn default_image_options_resolve_to_all_vision_defaults() {
        let resolved = ImageOptions::default().resolve();

        assert_eq!(resolved.model, "anthropic/claude-3.5-sonnet");
        assert_eq!(resolved.prompt, "Describe this image");
        assert_eq!(resolved.temperature, 1.0);
    }

    #[test]
    fn partial_image_config_keeps_defaults_for_unset_fields() {
        let resolved = ImageOptions::from(
            ImageConfig::new()
                .with_model("openai/gpt-4o")
                .with_temperature(0.2),
        )
        .resolve();

        assert_eq!(resolved.model, "openai/gpt-4o");
        assert_eq!(resolved.prompt, "Describe this image");
        assert_eq!(resolved.temperature, 0.2);
    }
}
