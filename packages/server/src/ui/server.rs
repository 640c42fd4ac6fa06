//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tsudoi_shared::time::SystemClock;

use crate::{
    domain::{BroadcastRoom, HistoryLimit, MessagePusher, RoomRepository},
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository},
    usecase::{ConnectSessionUseCase, GetRoomStateUseCase, SessionUseCases},
};

use super::{
    handler::{get_room, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket chat server
///
/// This struct wires the use cases into an axum router and runs it.
///
/// # Example
///
/// ```ignore
/// let server = Server::in_memory(HistoryLimit::default());
/// server.run("127.0.0.1", 3000).await?;
/// ```
pub struct Server {
    /// ConnectSessionUseCase（接続のユースケース）
    connect_session_usecase: Arc<ConnectSessionUseCase>,
    /// 接続ごとの Session が使うユースケース一式
    session_usecases: SessionUseCases,
    /// GetRoomStateUseCase（Room の状態取得のユースケース）
    get_room_state_usecase: Arc<GetRoomStateUseCase>,
}

impl Server {
    /// Create a new Server instance on top of the given repository and pusher
    ///
    /// # Arguments
    ///
    /// * `repository` - Exclusive access to the room state
    /// * `message_pusher` - Delivery of events to connected clients
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            connect_session_usecase: Arc::new(ConnectSessionUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            session_usecases: SessionUseCases::new(repository.clone(), message_pusher),
            get_room_state_usecase: Arc::new(GetRoomStateUseCase::new(repository)),
        }
    }

    /// Create a server backed by a fresh in-memory room
    pub fn in_memory(history_limit: HistoryLimit) -> Self {
        // 1. Repository（インメモリ）
        let room = BroadcastRoom::new(history_limit, Arc::new(SystemClock));
        let repository = Arc::new(InMemoryRoomRepository::new(room));

        // 2. MessagePusher（WebSocket 実装）
        let message_pusher = Arc::new(WebSocketMessagePusher::new());

        // 3. UseCases
        Self::new(repository, message_pusher)
    }

    /// Build the router with every endpoint
    pub fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            connect_session_usecase: self.connect_session_usecase,
            session_usecases: self.session_usecases,
            get_room_state_usecase: self.get_room_state_usecase,
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/room", get(get_room))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Serve on an already bound listener until a shutdown signal arrives
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        let local_addr = listener.local_addr()?;
        tracing::info!("Tsudoi chat server listening on {}", local_addr);
        tracing::info!("Connect to: ws://{}/ws", local_addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Run the WebSocket chat server
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: &str, port: u16) -> std::io::Result<()> {
        let listener = TcpListener::bind((host, port)).await?;
        self.serve(listener).await
    }
}
