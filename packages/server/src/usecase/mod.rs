//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層（HTTP ハンドラとスイーパー）から呼び出され、Domain 層を操作します。

pub mod error;
pub mod heartbeat;
pub mod list_messages;
pub mod list_participants;
pub mod post_message;
pub mod register_participant;
pub mod sweep_inactive_participants;

pub use error::{
    HeartbeatError, ListMessagesError, PostMessageError, RegisterError, SweepError,
};
pub use heartbeat::HeartbeatUseCase;
pub use list_messages::ListMessagesUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use post_message::{MessageDraft, PostMessageUseCase};
pub use register_participant::RegisterParticipantUseCase;
pub use sweep_inactive_participants::SweepInactiveParticipantsUseCase;
