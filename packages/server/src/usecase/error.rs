//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, ValidationErrors};

/// 参加者登録のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// 入力が不正
    #[error("Invalid participant: {0}")]
    Validation(ValidationErrors),

    /// 同名の参加者が既に存在する
    #[error("Name is already taken: {0}")]
    NameTaken(String),

    /// データストアのエラー
    #[error(transparent)]
    Repository(RepositoryError),
}

/// メッセージ投稿のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostMessageError {
    /// 入力が不正
    #[error("Invalid message: {0}")]
    Validation(ValidationErrors),

    /// データストアのエラー
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// メッセージ一覧取得のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListMessagesError {
    /// クエリが不正
    #[error("Invalid query: {0}")]
    Validation(ValidationErrors),

    /// データストアのエラー
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// ハートビートのエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeartbeatError {
    /// 呼び出し元が登録済みの参加者ではない
    #[error("Participant is not registered: {0:?}")]
    NotRegistered(String),

    /// データストアのエラー
    #[error(transparent)]
    Repository(RepositoryError),
}

/// 非アクティブ参加者の掃除のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SweepError {
    /// 参加者の取得・削除に失敗（何も変更されていない可能性がある）
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// 参加者は削除済みだが退室通知を保存できなかった
    #[error("Removed {count} participants but could not record leave notices: {source}")]
    NoticesNotRecorded {
        count: usize,
        source: RepositoryError,
    },
}
