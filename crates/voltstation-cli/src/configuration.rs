use crate::error::{to_env_var, ConfigError};
use config::{Config, Environment};
use serde::Deserialize;
use std::time::Duration;
use url::Url;
use voltstation::providers::configs::{
    ClientCredentials, GigaChatProviderConfig, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT, GIGACHAT_API_BASE, GIGACHAT_AUTH_URL, GIGACHAT_MODEL, GIGACHAT_SCOPE,
    REFRESH_MARGIN, TOKEN_LIFETIME,
};

/// GigaChat settings, read from `GIGACHAT_*` environment variables.
///
/// Credentials are optional: without them the assistant answers with its
/// "unavailable" notice instead of failing to start.
#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    pub auth_url: String,
    pub api_base: String,
    pub scope: String,
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_token_lifetime_secs")]
    pub token_lifetime_secs: u64,
    #[serde(default = "default_refresh_margin_secs")]
    pub refresh_margin_secs: u64,
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("auth_url", GIGACHAT_AUTH_URL)?
            .set_default("api_base", GIGACHAT_API_BASE)?
            .set_default("scope", GIGACHAT_SCOPE)?
            .set_default("model", GIGACHAT_MODEL)?
            .add_source(
                Environment::with_prefix("GIGACHAT")
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_url("auth_url", &self.auth_url)?;
        check_url("api_base", &self.api_base)?;

        if self.timeout_secs == 0 {
            return Err(invalid("timeout_secs", "must be greater than zero"));
        }
        if self.refresh_margin_secs >= self.token_lifetime_secs {
            return Err(invalid(
                "refresh_margin_secs",
                &format!(
                    "must be less than {} ({})",
                    to_env_var("token_lifetime_secs"),
                    self.token_lifetime_secs
                ),
            ));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(invalid("temperature", "must be a non-negative number"));
        }
        Ok(())
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials().is_some()
    }

    fn credentials(&self) -> Option<ClientCredentials> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => ClientCredentials::new(id.as_str(), secret.as_str()),
            _ => None,
        }
    }

    pub fn into_config(self) -> GigaChatProviderConfig {
        GigaChatProviderConfig {
            credentials: self.credentials(),
            auth_url: self.auth_url,
            api_base: self.api_base,
            scope: self.scope,
            model: self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
            token_lifetime: Duration::from_secs(self.token_lifetime_secs),
            refresh_margin: Duration::from_secs(self.refresh_margin_secs),
            accept_invalid_certs: self.accept_invalid_certs,
        }
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        env_var: to_env_var(field),
        reason: reason.to_string(),
    }
}

fn check_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| invalid(field, &e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(field, &format!("unsupported scheme {}", scheme))),
    }
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_token_lifetime_secs() -> u64 {
    TOKEN_LIFETIME.as_secs()
}

fn default_refresh_margin_secs() -> u64 {
    REFRESH_MARGIN.as_secs()
}
