//! OpenRouter chat completions client.

use chrono::Local;
use tracing::error;

use crate::config::{ClientConfig, ImageOptions, TextOptions};
use crate::constants;
use crate::error::AiError;
use crate::http::HttpClient;
use crate::message::{self, ContentPart, ImageUrl, Message, MessageContent, Role};
use crate::request::{CompletionRequest, WebPlugin};
use crate::response::CompletionResponse;

/// Client for the OpenRouter chat completions API.
///
/// Holds a [`ClientConfig`] fixed at construction time and a reusable HTTP
/// client. Cheap to share by reference across tasks; all methods take `&self`.
pub struct OpenRouter {
    config: ClientConfig,
    http: HttpClient,
}

impl OpenRouter {
    pub fn new(config: ClientConfig) -> Result<Self, AiError> {
        let http = HttpClient::new(config.http_config.clone())?;
        Ok(Self { config, http })
    }

    /// The stored configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request a text completion for `prompt`.
    ///
    /// The outgoing message sequence is the resolved system message, the
    /// chat history (when history is enabled), then `prompt` as the final
    /// user message. See [`TextOptions`] for how per-call overrides merge
    /// with the stored configuration.
    pub async fn text_response(
        &self,
        prompt: &str,
        options: TextOptions,
    ) -> Result<String, AiError> {
        let messages = message::build_chat_messages(
            options.resolved_system_message(&self.config),
            options.resolved_enable_history(&self.config),
            options.chat_history.as_deref(),
            prompt,
        );

        // The ":online" suffix answers only to the per-call flag, while the
        // plugin block answers only to the stored config flag.
        let mut model = self.config.model.clone();
        if options.web_search.unwrap_or(false) {
            model.push_str(constants::ONLINE_MODEL_SUFFIX);
        }

        let plugins = self.config.web_search.then(|| {
            vec![WebPlugin {
                id: constants::WEB_PLUGIN_ID.to_string(),
                max_results: Some(self.config.max_web_results),
                search_prompt: Some(search_scope_note()),
            }]
        });

        let request = CompletionRequest {
            model,
            messages,
            temperature: self.config.temperature,
            plugins,
        };

        self.send_request(request).await
    }

    /// Analyze the image at `image_url`, returning the model's text answer.
    ///
    /// Accepts a bare prompt string or an [`ImageConfig`](crate::ImageConfig)
    /// via `Into<ImageOptions>`. Vision requests resolve against their own
    /// defaults and do not consult the stored model, temperature, or web
    /// search settings.
    pub async fn image_analysis(
        &self,
        image_url: &str,
        options: impl Into<ImageOptions>,
    ) -> Result<String, AiError> {
        let resolved = options.into().resolve();

        let content = MessageContent::Parts(vec![
            ContentPart::Text {
                text: resolved.prompt,
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image_url.to_string(),
                },
            },
        ]);

        let request = CompletionRequest {
            model: resolved.model,
            messages: vec![Message {
                role: Role::User,
                content,
            }],
            temperature: resolved.temperature,
            plugins: None,
        };

        self.send_request(request).await
    }

    /// POST the request and extract the first choice's message content.
    async fn send_request(&self, request: CompletionRequest) -> Result<String, AiError> {
        let url = format!(
            "{}{}",
            self.config.base_url,
            constants::CHAT_COMPLETIONS_ENDPOINT
        );
        let headers = [
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.api_key),
            ),
            (
                "HTTP-Referer".to_string(),
                self.config.http_referer.clone(),
            ),
            ("X-Title".to_string(), self.config.x_title.clone()),
        ];

        let result = self
            .http
            .post_json::<_, CompletionResponse>(&url, &headers, &request)
            .await
            .and_then(|response| {
                response
                    .choices
                    .into_iter()
                    .next()
                    .map(|choice| choice.message.content)
                    .ok_or_else(|| AiError::Api {
                        message: "Response contained no choices".to_string(),
                        status_code: None,
                    })
            });

        if let Err(ref e) = result {
            error!(error = %e, "completion request failed");
        }

        result
    }
}

fn search_scope_note() -> String {
    format!(
        "Recent web search results ({})...",
        Local::now().format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_scope_note_embeds_todays_date() {
        let before = Local::now().format("%Y-%m-%d").to_string();
        let note = search_scope_note();
        let after = Local::now().format("%Y-%m-%d").to_string();

        assert!(note.starts_with("Recent web search results ("));
        assert!(note.contains(&before) || note.contains(&after));
    }
}
