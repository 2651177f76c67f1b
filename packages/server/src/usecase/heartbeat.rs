//! UseCase: ハートビート（生存通知）
//!
//! 参加者の最終ステータスを現在時刻に更新するだけで、メッセージは追加しない。

use std::sync::Arc;

use parlor_shared::time::Clock;

use crate::domain::{ParticipantName, ParticipantRepository, RepositoryError, Timestamp};

use super::error::HeartbeatError;

/// ハートビートのユースケース
pub struct HeartbeatUseCase {
    /// 参加者 Repository
    participants: Arc<dyn ParticipantRepository>,
    /// 時計
    clock: Arc<dyn Clock>,
}

impl HeartbeatUseCase {
    /// 新しい HeartbeatUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            participants,
            clock,
        }
    }

    /// ハートビートを実行
    ///
    /// 名前が未指定、または登録名として成立しない場合も未登録として扱う。
    pub async fn execute(&self, name: Option<String>) -> Result<(), HeartbeatError> {
        let raw = name.unwrap_or_default();
        let name = ParticipantName::new(raw.clone())
            .map_err(|_| HeartbeatError::NotRegistered(raw))?;

        let now = Timestamp::new(self.clock.now_millis());
        self.participants
            .touch(&name, now)
            .await
            .map_err(|e| match e {
                RepositoryError::ParticipantNotFound(name) => HeartbeatError::NotRegistered(name),
                other => HeartbeatError::Repository(other),
            })
    }
}
