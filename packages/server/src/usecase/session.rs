//! Session: 1 つの接続と Room 操作を仲介する
//!
//! ## 責務
//!
//! - 接続 ID を保持し、受信したクライアントイベントを対応するユースケースに振り分ける
//! - 切断処理がちょうど一度だけ実行されることを保証する
//!
//! ## 設計ノート
//!
//! `close` は `self` を消費するため、同じ Session を二度閉じることはできない。
//! `ClientEvent::Disconnect` を受け取った後の `close` や、その後に届いた
//! イベントは何もしない。

use std::sync::Arc;

use crate::domain::{ClientEvent, ConnectionId, Effect, MessagePusher, RoomRepository};

use super::{DeleteMessageUseCase, DisconnectSessionUseCase, JoinRoomUseCase, SendMessageUseCase};

/// Session が使うユースケース一式（全ての接続で共有）
#[derive(Clone)]
pub struct SessionUseCases {
    pub join_room: Arc<JoinRoomUseCase>,
    pub send_message: Arc<SendMessageUseCase>,
    pub delete_message: Arc<DeleteMessageUseCase>,
    pub disconnect_session: Arc<DisconnectSessionUseCase>,
}

impl SessionUseCases {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            join_room: Arc::new(JoinRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            send_message: Arc::new(SendMessageUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            delete_message: Arc::new(DeleteMessageUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            disconnect_session: Arc::new(DisconnectSessionUseCase::new(
                repository,
                message_pusher,
            )),
        }
    }
}

/// 1 つの接続に対応するサーバー側の状態
pub struct Session {
    connection_id: ConnectionId,
    usecases: SessionUseCases,
    closed: bool,
}

impl Session {
    /// 接続済み（ConnectSessionUseCase 実行後）の接続に対して Session を作成
    pub fn new(connection_id: ConnectionId, usecases: SessionUseCases) -> Self {
        Self {
            connection_id,
            usecases,
            closed: false,
        }
    }

    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// クライアントイベントを処理し、配信した効果を返す
    pub async fn handle(&mut self, event: ClientEvent) -> Vec<Effect> {
        if self.closed {
            tracing::debug!(
                "Session '{}' already closed, ignoring {:?}",
                self.connection_id,
                event
            );
            return Vec::new();
        }

        match event {
            ClientEvent::Join { display_name } => {
                self.usecases
                    .join_room
                    .execute(&self.connection_id, &display_name)
                    .await
            }
            ClientEvent::ChatMessage { body } => {
                self.usecases
                    .send_message
                    .execute(&self.connection_id, body)
                    .await
            }
            ClientEvent::DeleteMessage { message_id } => {
                self.usecases
                    .delete_message
                    .execute(&self.connection_id, &message_id)
                    .await
            }
            ClientEvent::Disconnect => self.shutdown().await,
        }
    }

    /// Session を閉じる（切断処理を実行する）
    pub async fn close(mut self) -> Vec<Effect> {
        self.shutdown().await
    }

    async fn shutdown(&mut self) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        self.closed = true;
        self.usecases
            .disconnect_session
            .execute(&self.connection_id)
            .await
    }
}
