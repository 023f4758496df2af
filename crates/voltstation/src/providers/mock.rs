use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use crate::errors::ProviderResult;
use crate::models::message::Message;
use crate::providers::base::{Provider, Usage};

/// A mock provider that returns pre-configured results and records what it was asked
pub struct MockProvider {
    responses: Arc<Mutex<Vec<ProviderResult<String>>>>,
    requests: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of results
    pub fn new(responses: Vec<ProviderResult<String>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Conversations received so far, system turn included
    pub fn requests(&self) -> Arc<Mutex<Vec<Vec<Message>>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(
        &self,
        system: &str,
        messages: &[Message],
    ) -> ProviderResult<(String, Usage)> {
        let mut conversation = vec![Message::system(system)];
        conversation.extend_from_slice(messages);
        self.requests.lock().unwrap().push(conversation);

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok((String::new(), Usage::default()))
        } else {
            responses.remove(0).map(|text| (text, Usage::default()))
        }
    }
}
