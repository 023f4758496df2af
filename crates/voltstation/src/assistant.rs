use indoc::indoc;
use tracing::{error, warn};

use crate::errors::{ProviderError, ProviderResult};
use crate::models::message::Message;
use crate::prompt::{user_turn, SYSTEM_PROMPT};
use crate::providers::base::Provider;
use crate::stats::{Stats, StatsSnapshot};

/// Returned when no access token can be obtained, e.g. the credentials are not configured.
pub const UNAVAILABLE_FALLBACK: &str = indoc! {"
    🤖 ИИ временно недоступен

    Но я могу помочь через команды:
    🔍 /find - найти станцию
    💰 /prices - узнать цены
    ⏰ /schedule - режим работы
    📞 /operator - связаться с оператором"};

/// Returned when the completion request itself fails.
pub const ERROR_FALLBACK: &str = indoc! {"
    ❌ Произошла ошибка при обработке запроса.

    Попробуйте позже или используйте команды:
    🔍 /find - найти станцию
    💰 /prices - цены
    ⏰ /schedule - режим работы"};

/// Answers free-form questions about the charging network.
///
/// Every call makes at most one token request and one completion request; there are no retries.
pub struct Assistant {
    provider: Box<dyn Provider>,
    stats: Stats,
}

impl Assistant {
    pub fn new(provider: Box<dyn Provider>) -> Self {
        Self {
            provider,
            stats: Stats::new(),
        }
    }

    /// Ask a question and get either the model's answer or the failure that prevented it.
    pub async fn try_ask(&self, question: &str, context: Option<&str>) -> ProviderResult<String> {
        self.stats.record_request();

        let messages = [Message::user(user_turn(question, context))];
        let (answer, _usage) = self.provider.complete(SYSTEM_PROMPT, &messages).await?;
        Ok(answer)
    }

    /// Ask a question and always get text back: the answer, or a fallback notice
    /// pointing at the bot's regular commands.
    pub async fn ask(&self, question: &str, context: Option<&str>) -> String {
        match self.try_ask(question, context).await {
            Ok(answer) => {
                self.stats.record_answered();
                answer
            }
            Err(ProviderError::TokenUnavailable(err)) => {
                warn!("Assistant unavailable: {}", err);
                self.stats.record_unavailable();
                UNAVAILABLE_FALLBACK.to_string()
            }
            Err(err) => {
                error!("GigaChat request failed: {}", err);
                self.stats.record_failed();
                ERROR_FALLBACK.to_string()
            }
        }
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
