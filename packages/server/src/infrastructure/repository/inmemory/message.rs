//! InMemory Message Repository 実装
//!
//! 追記専用の Vec をメッセージログとして使用します。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Message, MessageRepository, RepositoryError};

/// インメモリ Message Repository 実装
#[derive(Default)]
pub struct InMemoryMessageRepository {
    /// 追加順のメッセージログ
    messages: Mutex<Vec<Message>>,
}

impl InMemoryMessageRepository {
    /// 新しい空の InMemoryMessageRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存されているメッセージ数
    pub async fn count(&self) -> usize {
        self.messages.lock().await.len()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn append(&self, message: Message) -> Result<(), RepositoryError> {
        self.messages.lock().await.push(message);
        Ok(())
    }

    async fn append_many(&self, messages: Vec<Message>) -> Result<(), RepositoryError> {
        self.messages.lock().await.extend(messages);
        Ok(())
    }

    async fn find_visible(
        &self,
        viewer: Option<String>,
        limit: Option<usize>,
    ) -> Result<Vec<Message>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages
            .iter()
            .filter(|m| m.is_visible_to(viewer.as_deref()))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}
