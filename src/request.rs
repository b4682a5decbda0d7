use serde::Serialize;

use crate::message::Message;

/// Request body for the chat completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<WebPlugin>>,
}

/// Entry in the request `plugins` array enabling provider-side web search.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct WebPlugin {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_prompt: Option<String>,
}
