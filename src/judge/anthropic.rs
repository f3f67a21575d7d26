//! Anthropic Messages API backend.

use serde::{Deserialize, Serialize};

use crate::judge::backend::{GenOptions, ProviderError, TextGenerator};

pub const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug)]
pub struct AnthropicBackend {
    model: String,
    token: String,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    system: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

impl AnthropicBackend {
    pub fn new(model: &str, token: &str) -> Result<Self, ProviderError> {
        if model.is_empty() {
            return Err(ProviderError::Init("no model configured for anthropic".into()));
        }
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ProviderError::Init(e.to_string()))?;
        Ok(Self {
            model: model.to_string(),
            token: token.to_string(),
            client,
        })
    }
}

impl TextGenerator for AnthropicBackend {
    fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        opts: &GenOptions,
    ) -> Result<String, ProviderError> {
        let request = MessagesRequest {
            model: &self.model,
            system: system_prompt,
            messages: vec![Message {
                role: "user",
                content: user_prompt,
            }],
            max_tokens: opts.max_tokens,
            temperature: opts.temperature,
        };

        let response = self
            .client
            .post(ANTHROPIC_URL)
            .header("x-api-key", &self.token)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                provider: "anthropic",
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let decoded: MessagesResponse = response.json()?;
        decoded
            .content
            .into_iter()
            .map(|block| block.text)
            .find(|text| !text.is_empty())
            .ok_or(ProviderError::Empty)
    }
}
