//! UseCase: 参加者一覧取得

use std::sync::Arc;

use crate::domain::{Participant, ParticipantRepository, RepositoryError};

/// 参加者一覧取得のユースケース
pub struct ListParticipantsUseCase {
    /// 参加者 Repository
    participants: Arc<dyn ParticipantRepository>,
}

impl ListParticipantsUseCase {
    /// 新しい ListParticipantsUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    /// 現在の参加者を全て返す
    pub async fn execute(&self) -> Result<Vec<Participant>, RepositoryError> {
        self.participants.find_all().await
    }
}
