//! InMemory Participant Repository 実装
//!
//! ドメイン層が定義する ParticipantRepository trait の具体的な実装。
//! 名前をキーにした HashMap をインメモリ DB として使用します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Participant, ParticipantName, ParticipantRepository, RepositoryError, Timestamp,
};

/// インメモリ Participant Repository 実装
#[derive(Default)]
pub struct InMemoryParticipantRepository {
    /// 名前 → 参加者
    participants: Mutex<HashMap<ParticipantName, Participant>>,
}

impl InMemoryParticipantRepository {
    /// 新しい空の InMemoryParticipantRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        if participants.contains_key(&participant.name) {
            return Err(RepositoryError::ParticipantAlreadyExists(
                participant.name.into_string(),
            ));
        }
        participants.insert(participant.name.clone(), participant);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        let mut all: Vec<Participant> = participants.values().cloned().collect();
        // Sort by name for consistent ordering
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.get(name).cloned())
    }

    async fn touch(&self, name: &ParticipantName, at: Timestamp) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        let participant = participants
            .get_mut(name)
            .ok_or_else(|| RepositoryError::ParticipantNotFound(name.to_string()))?;
        participant.last_status = at;
        Ok(())
    }

    async fn find_inactive(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        let mut inactive: Vec<Participant> = participants
            .values()
            .filter(|p| p.is_inactive_since(cutoff))
            .cloned()
            .collect();
        inactive.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(inactive)
    }

    async fn remove_inactive(
        &self,
        names: Vec<ParticipantName>,
        cutoff: Timestamp,
    ) -> Result<Vec<Participant>, RepositoryError> {
        let mut participants = self.participants.lock().await;
        let mut removed = Vec::new();
        for name in names {
            let still_inactive = participants
                .get(&name)
                .is_some_and(|p| p.is_inactive_since(cutoff));
            if still_inactive {
                if let Some(participant) = participants.remove(&name) {
                    removed.push(participant);
                }
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryParticipantRepository の基本的な CRUD 操作
    // - 名前の一意性
    // - 非アクティブ参加者の検索と条件付き削除
    //
    // 【なぜこのテストが必要か】
    // - スイーパーは「取得」と「削除」の間にハートビートが割り込んでも
    //   その参加者を削除しないことを前提にしている
    // ========================================

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    async fn repository_with(entries: &[(&str, i64)]) -> InMemoryParticipantRepository {
        let repo = InMemoryParticipantRepository::new();
        for (n, at) in entries {
            repo.insert(Participant::new(name(n), Timestamp::new(*at)))
                .await
                .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_insert_and_find_all() {
        // テスト項目: 登録した参加者が名前順で取得できる
        // given (前提条件):
        let repo = repository_with(&[("carol", 1), ("alice", 2), ("bob", 3)]).await;

        // when (操作):
        let all = repo.find_all().await.unwrap();

        // then (期待する結果):
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[tokio::test]
    async fn test_insert_duplicate_name_fails() {
        // テスト項目: 同名の参加者は登録できない
        // given (前提条件):
        let repo = repository_with(&[("alice", 1)]).await;

        // when (操作):
        let result = repo
            .insert(Participant::new(name("alice"), Timestamp::new(2)))
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::ParticipantAlreadyExists("alice".to_string()))
        );
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].last_status, Timestamp::new(1));
    }

    #[tokio::test]
    async fn test_find_by_name() {
        // テスト項目: 名前で参加者を取得できる
        // given (前提条件):
        let repo = repository_with(&[("alice", 1)]).await;

        // then (期待する結果):
        assert!(repo.find_by_name(&name("alice")).await.unwrap().is_some());
        assert!(repo.find_by_name(&name("bob")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_touch_updates_last_status() {
        // テスト項目: touch で最終ステータスだけが更新される
        // given (前提条件):
        let repo = repository_with(&[("alice", 1)]).await;
        let before = repo.find_by_name(&name("alice")).await.unwrap().unwrap();

        // when (操作):
        repo.touch(&name("alice"), Timestamp::new(500)).await.unwrap();

        // then (期待する結果):
        let after = repo.find_by_name(&name("alice")).await.unwrap().unwrap();
        assert_eq!(after.last_status, Timestamp::new(500));
        assert_eq!(after.id, before.id);
    }

    #[tokio::test]
    async fn test_touch_unknown_participant_fails() {
        // テスト項目: 存在しない参加者の touch はエラーになる
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();

        // when (操作):
        let result = repo.touch(&name("ghost"), Timestamp::new(1)).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::ParticipantNotFound("ghost".to_string()))
        );
    }

    #[tokio::test]
    async fn test_find_inactive_is_inclusive() {
        // テスト項目: cutoff 以前（同時刻を含む）の参加者が非アクティブとして取得される
        // given (前提条件):
        let repo = repository_with(&[("alice", 100), ("bob", 200), ("carol", 300)]).await;

        // when (操作):
        let inactive = repo.find_inactive(Timestamp::new(200)).await.unwrap();

        // then (期待する結果):
        let names: Vec<&str> = inactive.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_remove_inactive_skips_refreshed_participant() {
        // テスト項目: 取得後にハートビートした参加者は削除されない
        // given (前提条件):
        let repo = repository_with(&[("alice", 100), ("bob", 100)]).await;
        let cutoff = Timestamp::new(150);
        let stale: Vec<ParticipantName> = repo
            .find_inactive(cutoff)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        repo.touch(&name("bob"), Timestamp::new(300)).await.unwrap();

        // when (操作):
        let removed = repo.remove_inactive(stale, cutoff).await.unwrap();

        // then (期待する結果):
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].name, name("alice"));
        let remaining = repo.find_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, name("bob"));
    }

    #[tokio::test]
    async fn test_remove_inactive_ignores_unknown_names() {
        // テスト項目: 既に存在しない名前は無視される
        // given (前提条件):
        let repo = repository_with(&[("alice", 100)]).await;

        // when (操作):
        let removed = repo
            .remove_inactive(vec![name("ghost")], Timestamp::new(1_000))
            .await
            .unwrap();

        // then (期待する結果):
        assert!(removed.is_empty());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
