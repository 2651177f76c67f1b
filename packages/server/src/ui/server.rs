//! Server execution logic.

use std::{future::Future, sync::Arc, time::Duration};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use parlor_shared::time::Clock;

use crate::{
    config::ServerConfig,
    infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    usecase::{
        HeartbeatUseCase, ListMessagesUseCase, ListParticipantsUseCase, PostMessageUseCase,
        RegisterParticipantUseCase, SweepInactiveParticipantsUseCase,
    },
};

use super::{
    handler::{
        health_check, heartbeat, list_messages, list_participants, post_message,
        register_participant,
    },
    signal::shutdown_signal,
    state::AppState,
    sweeper::spawn_sweeper,
};

/// Build the HTTP router over the given state.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/participants",
            post(register_participant).get(list_participants),
        )
        .route("/messages", post(post_message).get(list_messages))
        .route("/status", post(heartbeat))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Chat room HTTP server
///
/// Owns the use cases and runs the inactivity sweeper next to the router.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     register_participant_usecase,
///     list_participants_usecase,
///     post_message_usecase,
///     list_messages_usecase,
///     heartbeat_usecase,
///     sweep_usecase,
/// );
/// server.run(&ServerConfig::default()).await?;
/// ```
pub struct Server {
    /// RegisterParticipantUseCase（参加者登録のユースケース）
    register_participant_usecase: Arc<RegisterParticipantUseCase>,
    /// ListParticipantsUseCase（参加者一覧取得のユースケース）
    list_participants_usecase: Arc<ListParticipantsUseCase>,
    /// PostMessageUseCase（メッセージ投稿のユースケース）
    post_message_usecase: Arc<PostMessageUseCase>,
    /// ListMessagesUseCase（メッセージ一覧取得のユースケース）
    list_messages_usecase: Arc<ListMessagesUseCase>,
    /// HeartbeatUseCase（ハートビートのユースケース）
    heartbeat_usecase: Arc<HeartbeatUseCase>,
    /// SweepInactiveParticipantsUseCase（非アクティブ参加者掃除のユースケース）
    sweep_usecase: Arc<SweepInactiveParticipantsUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        register_participant_usecase: Arc<RegisterParticipantUseCase>,
        list_participants_usecase: Arc<ListParticipantsUseCase>,
        post_message_usecase: Arc<PostMessageUseCase>,
        list_messages_usecase: Arc<ListMessagesUseCase>,
        heartbeat_usecase: Arc<HeartbeatUseCase>,
        sweep_usecase: Arc<SweepInactiveParticipantsUseCase>,
    ) -> Self {
        Self {
            register_participant_usecase,
            list_participants_usecase,
            post_message_usecase,
            list_messages_usecase,
            heartbeat_usecase,
            sweep_usecase,
        }
    }

    /// Wire every use case over fresh in-memory repositories.
    pub fn with_in_memory_store(config: &ServerConfig, clock: Arc<dyn Clock>) -> Self {
        // 1. Repository の作成（参加者とメッセージで共有）
        let participants = Arc::new(InMemoryParticipantRepository::new());
        let messages = Arc::new(InMemoryMessageRepository::new());

        // 2. UseCase の作成
        let register_participant_usecase = Arc::new(RegisterParticipantUseCase::new(
            participants.clone(),
            messages.clone(),
            clock.clone(),
        ));
        let list_participants_usecase =
            Arc::new(ListParticipantsUseCase::new(participants.clone()));
        let post_message_usecase = Arc::new(PostMessageUseCase::new(
            participants.clone(),
            messages.clone(),
            clock.clone(),
            config.require_registered_sender,
        ));
        let list_messages_usecase = Arc::new(ListMessagesUseCase::new(messages.clone()));
        let heartbeat_usecase = Arc::new(HeartbeatUseCase::new(
            participants.clone(),
            clock.clone(),
        ));
        let sweep_usecase = Arc::new(SweepInactiveParticipantsUseCase::new(
            participants,
            messages,
            clock,
            config.inactivity_threshold,
        ));

        // 3. Server の作成
        Self::new(
            register_participant_usecase,
            list_participants_usecase,
            post_message_usecase,
            list_messages_usecase,
            heartbeat_usecase,
            sweep_usecase,
        )
    }

    /// Bind to the configured address and serve until Ctrl+C / SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the configured address or
    /// if there's an error during server execution.
    pub async fn run(self, config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = config.bind_addr();
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!(
            sweep_interval = ?config.sweep_interval,
            inactivity_threshold = ?config.inactivity_threshold,
            require_registered_sender = config.require_registered_sender,
            "Inactivity sweeper configured"
        );
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, config.sweep_interval, shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// The sweeper starts with the server and is stopped once the server
    /// has drained.
    pub async fn serve<F>(
        self,
        listener: TcpListener,
        sweep_interval: Duration,
        shutdown: F,
    ) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app_state = Arc::new(AppState {
            register_participant_usecase: self.register_participant_usecase,
            list_participants_usecase: self.list_participants_usecase,
            post_message_usecase: self.post_message_usecase,
            list_messages_usecase: self.list_messages_usecase,
            heartbeat_usecase: self.heartbeat_usecase,
        });
        let app = build_router(app_state);

        let sweeper = spawn_sweeper(self.sweep_usecase, sweep_interval);
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;
        sweeper.abort();

        result
    }
}
