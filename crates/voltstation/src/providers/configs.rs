use std::fmt;
use std::time::Duration;

pub const GIGACHAT_AUTH_URL: &str = "https://ngw.devices.sberbank.ru:9443/api/v2/oauth";
pub const GIGACHAT_API_BASE: &str = "https://gigachat.devices.sberbank.ru/api/v1";
pub const GIGACHAT_SCOPE: &str = "GIGACHAT_API_PERS";
pub const GIGACHAT_MODEL: &str = "GigaChat";

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1500;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Lifetime the provider states for an access token.
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(30 * 60);
/// Subtracted from [`TOKEN_LIFETIME`] so a cached token never expires mid-request.
pub const REFRESH_MARGIN: Duration = Duration::from_secs(5 * 60);

/// OAuth client id and secret issued for the GigaChat API
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    /// Returns `None` when either half is empty, which counts as not configured.
    pub fn new<S: Into<String>>(client_id: S, client_secret: S) -> Option<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.trim().is_empty() || client_secret.trim().is_empty() {
            return None;
        }
        Some(Self {
            client_id,
            client_secret,
        })
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct GigaChatProviderConfig {
    pub auth_url: String,
    pub api_base: String,
    pub credentials: Option<ClientCredentials>,
    pub scope: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub token_lifetime: Duration,
    pub refresh_margin: Duration,
    pub accept_invalid_certs: bool,
}

impl GigaChatProviderConfig {
    pub fn new(credentials: Option<ClientCredentials>) -> Self {
        Self {
            auth_url: GIGACHAT_AUTH_URL.to_string(),
            api_base: GIGACHAT_API_BASE.to_string(),
            credentials,
            scope: GIGACHAT_SCOPE.to_string(),
            model: GIGACHAT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
            token_lifetime: TOKEN_LIFETIME,
            refresh_margin: REFRESH_MARGIN,
            accept_invalid_certs: false,
        }
    }

    /// How long a freshly issued token is served from the cache.
    pub fn effective_token_lifetime(&self) -> Duration {
        self.token_lifetime.saturating_sub(self.refresh_margin)
    }
}

impl Default for GigaChatProviderConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_effective_lifetime_is_25_minutes() {
        let config = GigaChatProviderConfig::default();
        assert_eq!(config.effective_token_lifetime(), Duration::from_secs(25 * 60));
        assert!(config.effective_token_lifetime() < config.token_lifetime);
    }

    #[test]
    fn test_margin_larger_than_lifetime_saturates() {
        let config = GigaChatProviderConfig {
            token_lifetime: Duration::from_secs(60),
            refresh_margin: Duration::from_secs(120),
            ..Default::default()
        };
        assert_eq!(config.effective_token_lifetime(), Duration::ZERO);
    }

    #[test]
    fn test_empty_credentials_are_not_configured() {
        assert!(ClientCredentials::new("", "secret").is_none());
        assert!(ClientCredentials::new("id", "  ").is_none());
        assert!(ClientCredentials::new("id", "secret").is_some());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = ClientCredentials::new("id", "super-secret").unwrap();
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("id"));
        assert!(!debug.contains("super-secret"));
    }
}
