//! UseCase: メッセージ一覧取得
//!
//! 該当メッセージが 0 件でもエラーにはしない。
//! 空の結果をどう応答するかは UI 層が決める。

use std::sync::Arc;

use crate::domain::{Message, MessageLimit, MessageRepository};

use super::error::ListMessagesError;

/// メッセージ一覧取得のユースケース
pub struct ListMessagesUseCase {
    /// メッセージ Repository
    messages: Arc<dyn MessageRepository>,
}

impl ListMessagesUseCase {
    /// 新しい ListMessagesUseCase を作成
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// `viewer` から見えるメッセージを古い順に返す
    ///
    /// # Arguments
    ///
    /// * `viewer` - 閲覧者の名前（呼び出し元の識別子、未指定なら `None`）
    /// * `limit` - 生のクエリ値。正の値なら先頭から `limit` 件に絞り、0 または空文字なら上限なし
    pub async fn execute(
        &self,
        viewer: Option<String>,
        limit: Option<String>,
    ) -> Result<Vec<Message>, ListMessagesError> {
        let limit = limit
            .as_deref()
            .map(MessageLimit::parse)
            .transpose()
            .map_err(|e| ListMessagesError::Validation(e.into()))?;

        let messages = self
            .messages
            .find_visible(viewer, limit.and_then(|l| l.get()))
            .await?;
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            MessageKind, MessageText, MockMessageRepository, ParticipantName, Recipient,
            RepositoryError,
        },
        infrastructure::repository::InMemoryMessageRepository,
    };

    fn message(from: &str, to: &str, kind: MessageKind) -> Message {
        Message::new(
            ParticipantName::new(from.to_string()).unwrap(),
            Recipient::new(to.to_string()).unwrap(),
            MessageText::new(format!("{from} -> {to}")).unwrap(),
            kind,
            "12:00:00".to_string(),
        )
    }

    async fn create_usecase(seed: Vec<Message>) -> ListMessagesUseCase {
        let repository = Arc::new(InMemoryMessageRepository::new());
        repository.append_many(seed).await.unwrap();
        ListMessagesUseCase::new(repository)
    }

    #[tokio::test]
    async fn test_public_message_visible_to_all_participants() {
        // テスト項目: Alice の公開メッセージは他の全員に見える
        // given (前提条件):
        let usecase = create_usecase(vec![message("Alice", "Todos", MessageKind::Message)]).await;

        // then (期待する結果):
        for viewer in ["Bob", "Carol", "Alice"] {
            let result = usecase.execute(Some(viewer.to_string()), None).await.unwrap();
            assert_eq!(result.len(), 1, "viewer {viewer}");
        }
    }

    #[tokio::test]
    async fn test_private_message_visible_to_sender_and_recipient_only() {
        // テスト項目: Alice から Bob へのプライベートメッセージは Carol には見えない
        // given (前提条件):
        let usecase =
            create_usecase(vec![message("Alice", "Bob", MessageKind::PrivateMessage)]).await;

        // when (操作):
        let alice = usecase.execute(Some("Alice".to_string()), None).await.unwrap();
        let bob = usecase.execute(Some("Bob".to_string()), None).await.unwrap();
        let carol = usecase.execute(Some("Carol".to_string()), None).await.unwrap();

        // then (期待する結果):
        assert_eq!(alice.len(), 1);
        assert_eq!(bob.len(), 1);
        assert!(carol.is_empty());
    }

    #[tokio::test]
    async fn test_limit_one_never_returns_more() {
        // テスト項目: limit=1 の場合、該当が複数あっても 1 件しか返さない
        // given (前提条件):
        let usecase = create_usecase(vec![
            message("Alice", "Todos", MessageKind::Message),
            message("Bob", "Todos", MessageKind::Message),
            message("Carol", "Todos", MessageKind::Message),
        ])
        .await;

        // when (操作):
        let result = usecase
            .execute(Some("Alice".to_string()), Some("1".to_string()))
            .await
            .unwrap();

        // then (期待する結果): 先頭の 1 件
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].from.as_str(), "Alice");
    }

    #[tokio::test]
    async fn test_limit_zero_is_unbounded() {
        // テスト項目: limit=0 は上限なしとして扱われる
        // given (前提条件):
        let usecase = create_usecase(vec![
            message("Alice", "Todos", MessageKind::Message),
            message("Bob", "Todos", MessageKind::Message),
        ])
        .await;

        // when (操作):
        let result = usecase
            .execute(Some("Alice".to_string()), Some("0".to_string()))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_result_is_not_an_error() {
        // テスト項目: 該当メッセージがない場合は空のリストを返す
        // given (前提条件):
        let usecase = create_usecase(vec![]).await;

        // when (操作):
        let result = usecase.execute(Some("Alice".to_string()), None).await;

        // then (期待する結果):
        assert_eq!(result, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_invalid_limit_fails_validation() {
        // テスト項目: 0 以上の整数でない limit は検証エラーになる
        // given (前提条件):
        let usecase = create_usecase(vec![message("Alice", "Todos", MessageKind::Message)]).await;

        // when (操作):
        let result = usecase
            .execute(Some("Alice".to_string()), Some("zero".to_string()))
            .await;

        // then (期待する結果):
        let Err(ListMessagesError::Validation(errors)) = result else {
            panic!("expected validation error, got {result:?}");
        };
        assert_eq!(
            errors.messages(),
            vec!["\"limit\" must be a non-negative integer".to_string()]
        );
    }

    #[tokio::test]
    async fn test_store_failure() {
        // テスト項目: データストアの障害は Repository エラーとして返される
        // given (前提条件):
        let mut repository = MockMessageRepository::new();
        repository
            .expect_find_visible()
            .returning(|_, _| Err(RepositoryError::Unavailable("timeout".to_string())));
        let usecase = ListMessagesUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute(None, None).await;

        // then (期待する結果):
        assert!(matches!(result, Err(ListMessagesError::Repository(_))));
    }
}
