//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionId,
    infrastructure::dto::conversion::decode_client_message,
    ui::state::AppState,
    usecase::Session,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// Everything the room delivers to this connection goes through `rx`, so the
/// room lock is never held while writing to the socket.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
        let _ = sender.close().await;
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();
    let (tx, rx) = mpsc::unbounded_channel();

    if let Err(e) = state
        .connect_session_usecase
        .execute(connection_id.clone(), tx)
        .await
    {
        tracing::warn!("Rejecting connection: {}", e);
        return;
    }
    tracing::info!("Client '{}' connected", connection_id);

    let (sender, mut receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender);
    let mut session = Session::new(connection_id.clone(), state.session_usecases.clone());

    loop {
        tokio::select! {
            msg = receiver.next() => {
                let msg = match msg {
                    Some(Ok(msg)) => msg,
                    Some(Err(e)) => {
                        tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                        break;
                    }
                    None => break,
                };

                match msg {
                    Message::Text(text) => match decode_client_message(&text) {
                        Ok(event) => {
                            session.handle(event).await;
                            if session.is_closed() {
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!(
                                "Ignoring malformed message from '{}': {}",
                                connection_id,
                                e
                            );
                        }
                    },
                    Message::Close(_) => {
                        tracing::debug!("Client '{}' requested close", connection_id);
                        break;
                    }
                    // Ping/pong is handled by axum; binary frames carry nothing we understand
                    _ => {}
                }
            }
            _ = &mut send_task => {
                tracing::debug!("Writer for '{}' stopped", connection_id);
                break;
            }
        }
    }

    session.close().await;
    send_task.abort();
    tracing::info!("Client '{}' disconnected", connection_id);
}
