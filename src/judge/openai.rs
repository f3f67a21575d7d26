//! Chat-completions backend for OpenAI and OpenAI-compatible providers
//! (Groq, local Ollama).

use serde::{Deserialize, Serialize};

use crate::judge::backend::{GenOptions, ProviderError, TextGenerator};

pub const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const OLLAMA_URL: &str = "http://localhost:11434/v1/chat/completions";

#[derive(Debug)]
pub struct ChatCompletionsBackend {
    name: &'static str,
    url: &'static str,
    model: String,
    token: String,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl ChatCompletionsBackend {
    pub fn new(
        name: &'static str,
        url: &'static str,
        model: &str,
        token: &str,
    ) -> Result<Self, ProviderError> {
        if model.is_empty() {
            return Err(ProviderError::Init(format!("no model configured for {name}")));
        }
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ProviderError::Init(e.to_string()))?;
        Ok(Self {
            name,
            url,
            model: model.to_string(),
            token: token.to_string(),
            client,
        })
    }
}

impl TextGenerator for ChatCompletionsBackend {
    fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        opts: &GenOptions,
    ) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: opts.max_tokens,
            temperature: opts.temperature,
        };

        let response = self
            .client
            .post(self.url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                provider: self.name,
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let decoded: ChatResponse = response.json()?;
        decoded
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
            .ok_or(ProviderError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "usr",
                },
            ],
            max_tokens: 150,
            temperature: 0.1,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["max_tokens"], 150);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "usr");
    }

    #[test]
    fn response_text_extraction() {
        let decoded: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "ALLOW\nFine."}}]}"#,
        )
        .unwrap();
        let text = decoded
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert_eq!(text.as_deref(), Some("ALLOW\nFine."));
    }

    #[test]
    fn response_without_choices_decodes() {
        let decoded: ChatResponse = serde_json::from_str(r#"{"id": "cmpl-1"}"#).unwrap();
        assert!(decoded.choices.is_empty());
    }

    #[test]
    fn empty_model_rejected_at_init() {
        let err = ChatCompletionsBackend::new("openai", OPENAI_URL, "", "sk-test").unwrap_err();
        assert!(matches!(err, ProviderError::Init(_)));
    }
}
