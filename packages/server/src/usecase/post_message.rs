//! UseCase: メッセージ投稿処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostMessageUseCase::execute() メソッド
//! - 全フィールドの検証（エラーはまとめて報告）と追記
//!
//! ### なぜこのテストが必要か
//! - 送信者はヘッダ由来で検証されていない。厳格モードでのみ登録済みかを確認する
//! - status 種別は参加者が投稿できない
//!
//! ### どのような状況を想定しているか
//! - 正常系：公開メッセージ、プライベートメッセージ
//! - 異常系：複数フィールドの不備、未登録の送信者（厳格モード）
//! - 異常系：データストアの障害

use std::sync::Arc;

use parlor_shared::time::{Clock, timestamp_to_clock_time};

use crate::domain::{
    Message, MessageKind, MessageRepository, MessageText, ParticipantName, ParticipantRepository,
    Recipient, ValidationErrors, ValueObjectError, required,
};

use super::error::PostMessageError;

/// Unvalidated message as received from a caller.
///
/// `from` comes from the caller identity, the rest from the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    pub from: Option<String>,
    pub to: Option<String>,
    pub text: Option<String>,
    pub kind: Option<String>,
}

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    /// 参加者 Repository（厳格モードでの送信者確認用）
    participants: Arc<dyn ParticipantRepository>,
    /// メッセージ Repository
    messages: Arc<dyn MessageRepository>,
    /// 時計
    clock: Arc<dyn Clock>,
    /// 送信者が登録済みの参加者であることを要求するか
    require_registered_sender: bool,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        require_registered_sender: bool,
    ) -> Self {
        Self {
            participants,
            messages,
            clock,
            require_registered_sender,
        }
    }

    /// メッセージ投稿を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - 追加されたメッセージ
    /// * `Err(PostMessageError)` - 投稿失敗
    pub async fn execute(&self, draft: MessageDraft) -> Result<Message, PostMessageError> {
        // 1. 入力検証（全フィールドを検証してからまとめて返す）
        let mut errors = ValidationErrors::new();
        let from = errors.collect(required("from", draft.from).and_then(ParticipantName::sender));
        let to = errors.collect(required("to", draft.to).and_then(Recipient::new));
        let text = errors.collect(required("text", draft.text).and_then(MessageText::new));
        let kind = errors.collect(required("type", draft.kind).and_then(MessageKind::parse_postable));
        let (Some(from), Some(to), Some(text), Some(kind)) = (from, to, text, kind) else {
            return Err(PostMessageError::Validation(errors));
        };

        // 2. 送信者の確認（厳格モードのみ）
        if self.require_registered_sender && self.participants.find_by_name(&from).await?.is_none()
        {
            return Err(PostMessageError::Validation(
                ValueObjectError::UnregisteredSender { field: "from" }.into(),
            ));
        }

        // 3. 追記
        let time = timestamp_to_clock_time(self.clock.now_millis());
        let message = Message::new(from, to, text, kind, time);
        self.messages.append(message.clone()).await?;

        tracing::debug!(from = %message.from, to = %message.to, kind = %message.kind, "Message posted");
        Ok(message)
    }
}
