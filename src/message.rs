use serde::Serialize;

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One prior exchange unit supplied by the caller, ordered oldest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    /// `true` for a model reply, `false` for a user message.
    pub is_bot: bool,
    pub text: String,
}

/// A chat message as sent to the completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Text(text.into()),
        }
    }
}

/// Message content: plain text, or an ordered list of typed parts for
/// multi-modal requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Build the message sequence for a text completion: exactly one system
/// message, then the history turns in their original order (only when
/// history is enabled), then the current prompt as the final user message.
pub(crate) fn build_chat_messages(
    system_message: &str,
    include_history: bool,
    history: Option<&[ChatTurn]>,
    prompt: &str,
) -> Vec<Message> {
    let mut messages = vec![Message::system(system_message)];

    if include_history {
        for turn in history.unwrap_or_default() {
            let message = if turn.is_bot {
                Message::assistant(turn.text.clone())
            } else {
                Message::user(turn.text.clone())
            };
            messages.push(message);
        }
    }

    messages.push(Message::user(prompt));
    messages
}
