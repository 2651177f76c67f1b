//! UseCase: 非アクティブ参加者の掃除
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SweepInactiveParticipantsUseCase::execute() メソッド
//! - しきい値を超えて沈黙している参加者の削除と退室通知
//!
//! ### なぜこのテストが必要か
//! - 取得と削除は別々の Repository 呼び出しで、その間にハートビートが割り込み得る
//! - 割り込まれた参加者は削除も通知もされないことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：しきい値を超えた参加者だけが削除される
//! - エッジケース：最終ステータスがちょうど cutoff の参加者（削除される）
//! - エッジケース：取得と削除の間のハートビート
//! - 異常系：データストアの障害

use std::{sync::Arc, time::Duration};

use parlor_shared::time::{Clock, duration_to_millis, timestamp_to_clock_time};

use crate::domain::{
    Message, MessageRepository, ParticipantName, ParticipantRepository, Timestamp,
};

use super::error::SweepError;

/// 非アクティブ参加者掃除のユースケース
pub struct SweepInactiveParticipantsUseCase {
    /// 参加者 Repository
    participants: Arc<dyn ParticipantRepository>,
    /// メッセージ Repository
    messages: Arc<dyn MessageRepository>,
    /// 時計
    clock: Arc<dyn Clock>,
    /// 最終ステータスからこの時間が経過した参加者を削除する
    inactivity_threshold: Duration,
}

impl SweepInactiveParticipantsUseCase {
    /// 新しい SweepInactiveParticipantsUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        inactivity_threshold: Duration,
    ) -> Self {
        Self {
            participants,
            messages,
            clock,
            inactivity_threshold,
        }
    }

    /// 1 回分の掃除を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ParticipantName>)` - 削除された参加者の名前
    /// * `Err(SweepError)` - 掃除失敗（次回の実行には影響しない）
    pub async fn execute(&self) -> Result<Vec<ParticipantName>, SweepError> {
        let now = self.clock.now_millis();
        let cutoff =
            Timestamp::new(now).saturating_sub_millis(duration_to_millis(self.inactivity_threshold));

        // 1. 非アクティブな参加者を取得
        let inactive = self.participants.find_inactive(cutoff).await?;
        if inactive.is_empty() {
            tracing::debug!(%cutoff, "No inactive participants");
            return Ok(Vec::new());
        }

        // 2. 取得した参加者のうち、今も非アクティブな者だけを削除
        let candidates = inactive.into_iter().map(|p| p.name).collect();
        let removed: Vec<ParticipantName> = self
            .participants
            .remove_inactive(candidates, cutoff)
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();
        if removed.is_empty() {
            return Ok(removed);
        }

        // 3. 実際に削除した参加者の退室通知をまとめて追加
        let time = timestamp_to_clock_time(now);
        let notices = removed
            .iter()
            .map(|name| Message::left(name.clone(), time.clone()))
            .collect();
        self.messages
            .append_many(notices)
            .await
            .map_err(|source| SweepError::NoticesNotRecorded {
                count: removed.len(),
                source,
            })?;

        tracing::info!(count = removed.len(), participants = ?removed, "Swept inactive participants");
        Ok(removed)
    }
}
