pub const API_BASE: &str = "https://openrouter.ai/api/v1";
pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";

pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat:free";
pub const DEFAULT_TEMPERATURE: f32 = 1.0;
pub const DEFAULT_MAX_WEB_RESULTS: u32 = 5;
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are an AI assistant that helps answer questions";

pub const DEFAULT_VISION_MODEL: &str = "anthropic/claude-3.5-sonnet";
pub const DEFAULT_VISION_PROMPT: &str = "Describe this image";

pub const ONLINE_MODEL_SUFFIX: &str = ":online";
pub const WEB_PLUGIN_ID: &str = "web";

pub const DEFAULT_HTTP_REFERER: &str = "https://henotic.space";
pub const DEFAULT_X_TITLE: &str = "Henotic Technology";

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process the request";
