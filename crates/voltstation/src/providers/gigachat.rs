use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::debug;

use super::base::{Provider, Usage};
use super::configs::GigaChatProviderConfig;
use super::oauth::TokenCache;
use crate::errors::{ProviderError, ProviderResult};
use crate::models::message::Message;

pub struct GigaChatProvider {
    client: Client,
    config: GigaChatProviderConfig,
    tokens: TokenCache,
}

impl GigaChatProvider {
    pub fn new(config: GigaChatProviderConfig) -> Result<Self> {
        // No idle connections are kept between requests
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(0)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        let tokens = TokenCache::new(client.clone(), &config);

        Ok(Self {
            client,
            config,
            tokens,
        })
    }

    pub fn token_cache(&self) -> &TokenCache {
        &self.tokens
    }

    fn get_usage(data: &Value) -> Usage {
        let Some(usage) = data.get("usage") else {
            return Usage::default();
        };

        let input_tokens = usage
            .get("prompt_tokens")
            .and_then(|v| v.as_i64())
            .and_then(|v| i32::try_from(v).ok());

        let output_tokens = usage
            .get("completion_tokens")
            .and_then(|v| v.as_i64())
            .and_then(|v| i32::try_from(v).ok());

        let total_tokens = usage
            .get("total_tokens")
            .and_then(|v| v.as_i64())
            .and_then(|v| i32::try_from(v).ok())
            .or_else(|| match (input_tokens, output_tokens) {
                (Some(input), Some(output)) => input.checked_add(output),
                _ => None,
            });

        Usage::new(input_tokens, output_tokens, total_tokens)
    }

    fn response_text(data: &Value) -> ProviderResult<String> {
        let choice = data
            .get("choices")
            .and_then(|v| v.as_array())
            .and_then(|choices| choices.first())
            .ok_or_else(|| {
                ProviderError::MalformedResponse(format!("No choices in response: {}", data))
            })?;

        choice
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(|text| text.trim().to_string())
            .ok_or_else(|| {
                ProviderError::MalformedResponse(format!("No message content in choice: {}", choice))
            })
    }

    async fn post(&self, token: &str, payload: &Value) -> ProviderResult<Value> {
        let url = format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(payload)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ProviderError::Provider {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}

#[async_trait]
impl Provider for GigaChatProvider {
    async fn complete(
        &self,
        system: &str,
        messages: &[Message],
    ) -> ProviderResult<(String, Usage)> {
        let token = self.tokens.get_token().await?;

        let mut messages_array = vec![Message::system(system)];
        messages_array.extend_from_slice(messages);

        let payload = json!({
            "model": self.config.model,
            "messages": messages_array,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        let response = self.post(&token, &payload).await?;
        let text = Self::response_text(&response)?;
        let usage = Self::get_usage(&response);
        debug!(?usage, "GigaChat completion received");

        Ok((text, usage))
    }
}
