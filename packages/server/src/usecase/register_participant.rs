//! UseCase: 参加者登録処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RegisterParticipantUseCase::execute() メソッド
//! - 名前の検証、重複チェック、入室通知の追加
//!
//! ### なぜこのテストが必要か
//! - 同じ名前の参加者が同時に存在してはならない
//! - 登録と同時に全員宛ての入室通知がログに残ることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の登録
//! - 異常系：重複した名前、短すぎる名前、名前なし
//! - 異常系：データストアの障害

use std::sync::Arc;

use parlor_shared::time::{Clock, timestamp_to_clock_time};

use crate::domain::{
    Message, MessageRepository, Participant, ParticipantName, ParticipantRepository,
    RepositoryError, Timestamp, required,
};

use super::error::RegisterError;

/// 参加者登録のユースケース
pub struct RegisterParticipantUseCase {
    /// 参加者 Repository
    participants: Arc<dyn ParticipantRepository>,
    /// メッセージ Repository
    messages: Arc<dyn MessageRepository>,
    /// 時計
    clock: Arc<dyn Clock>,
}

impl RegisterParticipantUseCase {
    /// 新しい RegisterParticipantUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            participants,
            messages,
            clock,
        }
    }

    /// 参加者登録を実行
    ///
    /// # Arguments
    ///
    /// * `name` - リクエストで渡された名前（未指定の場合は `None`）
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 登録された参加者
    /// * `Err(RegisterError)` - 登録失敗
    pub async fn execute(&self, name: Option<String>) -> Result<Participant, RegisterError> {
        // 1. 入力検証
        let name = required("name", name)
            .and_then(ParticipantName::new)
            .map_err(|e| RegisterError::Validation(e.into()))?;

        // 2. 登録（重複チェックは Repository が一体で行う）
        let now = self.clock.now_millis();
        let participant = Participant::new(name.clone(), Timestamp::new(now));
        self.participants
            .insert(participant.clone())
            .await
            .map_err(|e| match e {
                RepositoryError::ParticipantAlreadyExists(name) => RegisterError::NameTaken(name),
                other => RegisterError::Repository(other),
            })?;

        // 3. 入室通知
        self.messages
            .append(Message::joined(name, timestamp_to_clock_time(now)))
            .await
            .map_err(RegisterError::Repository)?;

        tracing::info!(participant = %participant.name, "Participant joined");
        Ok(participant)
    }
}
