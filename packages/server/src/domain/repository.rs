//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 各メソッドは単独でアトミックに実行されることを実装に要求します。
//! 複数メソッドにまたがる処理（UseCase）はトランザクションになりません。

use async_trait::async_trait;

use super::{Message, Participant, ParticipantName, RepositoryError, Timestamp};

/// Participant Repository trait
///
/// 参加者レジストリへのインターフェース。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// 参加者を登録する
    ///
    /// 同名の参加者が存在する場合は `RepositoryError::ParticipantAlreadyExists`。
    /// 重複チェックと登録は一体で行われる。
    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError>;

    /// 全ての参加者を取得
    async fn find_all(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// 名前で参加者を取得
    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError>;

    /// 参加者の最終ステータスを更新
    ///
    /// 存在しない場合は `RepositoryError::ParticipantNotFound`。
    async fn touch(&self, name: &ParticipantName, at: Timestamp) -> Result<(), RepositoryError>;

    /// 最終ステータスが `cutoff` 以前の参加者を取得
    async fn find_inactive(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError>;

    /// `names` のうち、現時点でも最終ステータスが `cutoff` 以前の参加者だけを削除
    ///
    /// 実際に削除された参加者を返す。
    async fn remove_inactive(
        &self,
        names: Vec<ParticipantName>,
        cutoff: Timestamp,
    ) -> Result<Vec<Participant>, RepositoryError>;
}

/// Message Repository trait
///
/// 追記専用のメッセージログへのインターフェース。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// メッセージを追加
    async fn append(&self, message: Message) -> Result<(), RepositoryError>;

    /// 複数のメッセージをまとめて追加
    async fn append_many(&self, messages: Vec<Message>) -> Result<(), RepositoryError>;

    /// `viewer` から見えるメッセージを古い順に取得
    ///
    /// `limit` が指定された場合は先頭から `limit` 件に絞る。
    async fn find_visible(
        &self,
        viewer: Option<String>,
        limit: Option<usize>,
    ) -> Result<Vec<Message>, RepositoryError>;
}
