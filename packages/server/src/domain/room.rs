//! Broadcast room: the state machine behind every chat operation.
//!
//! The room owns the presence table, the history ring and the set of live
//! connections. Every operation returns the effects to deliver, each tagged
//! with an [`Audience`]; the caller resolves audiences with
//! [`BroadcastRoom::recipients`] while still holding exclusive access so that
//! every recipient observes broadcasts in acceptance order.

use std::{collections::HashSet, sync::Arc};

use tsudoi_shared::time::Clock;

use super::{
    entity::{ChatEvent, ChatMessage, SystemNotice},
    error::RoomError,
    event::{Audience, Effect, ServerEvent},
    history::HistoryRing,
    presence::PresenceTable,
    value_object::{ConnectionId, DisplayName, EventId, HistoryLimit, MessageBody, Timestamp},
};

/// Lifecycle state of a connection as seen by the room.
///
/// A connection that is not live (never connected, or already disconnected)
/// has no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Connected,
    Joined,
}

/// Read-only summary of the room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    /// Display names of joined connections, sorted.
    pub participants: Vec<DisplayName>,
    pub connection_count: usize,
    pub history_len: usize,
    pub history_limit: HistoryLimit,
    pub created_at: Timestamp,
}

pub struct BroadcastRoom {
    connections: HashSet<ConnectionId>,
    presence: PresenceTable,
    history: HistoryRing,
    clock: Arc<dyn Clock>,
    created_at: Timestamp,
}

impl BroadcastRoom {
    pub fn new(history_limit: HistoryLimit, clock: Arc<dyn Clock>) -> Self {
        let created_at = Timestamp::new(clock.now_millis());
        Self {
            connections: HashSet::new(),
            presence: PresenceTable::new(),
            history: HistoryRing::new(history_limit),
            clock,
            created_at,
        }
    }

    fn now(&self) -> Timestamp {
        Timestamp::new(self.clock.now_millis())
    }

    pub fn session_state(&self, connection_id: &ConnectionId) -> Option<SessionState> {
        if !self.connections.contains(connection_id) {
            return None;
        }
        if self.presence.name_of(connection_id).is_some() {
            Some(SessionState::Joined)
        } else {
            Some(SessionState::Connected)
        }
    }

    /// Register a newly accepted connection.
    pub fn connect(&mut self, connection_id: ConnectionId) -> Result<(), RoomError> {
        if self.connections.contains(&connection_id) {
            return Err(RoomError::DuplicateConnection(connection_id));
        }
        self.connections.insert(connection_id);
        Ok(())
    }

    /// Claim `display_name` for `connection_id`.
    ///
    /// On success the sender gets `JoinSuccess` and the history (without its
    /// own join notice), the others get the join notice and everyone gets the
    /// new presence list. A refused name is reported to the sender only.
    pub fn join(&mut self, connection_id: &ConnectionId, display_name: &str) -> Vec<Effect> {
        match self.session_state(connection_id) {
            Some(SessionState::Connected) => {}
            Some(SessionState::Joined) => {
                let error = RoomError::AlreadyJoined(connection_id.clone());
                tracing::debug!("Ignoring join: {}", error);
                return Vec::new();
            }
            None => {
                let error = RoomError::UnknownConnection(connection_id.clone());
                tracing::debug!("Ignoring join: {}", error);
                return Vec::new();
            }
        }

        let display_name = match DisplayName::new(display_name) {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!("Rejecting join from '{}': {}", connection_id, e);
                return vec![Effect::to_sender(ServerEvent::JoinError {
                    reason: e.to_string(),
                })];
            }
        };

        if let Err(e) = self
            .presence
            .try_join(connection_id.clone(), display_name.clone())
        {
            tracing::info!(
                "Rejecting join from '{}' as '{}': {}",
                connection_id,
                display_name,
                e
            );
            return vec![Effect::to_sender(ServerEvent::JoinError {
                reason: e.to_string(),
            })];
        }

        let snapshot = self.history.snapshot();
        let notice = SystemNotice::joined(&display_name, self.now());
        self.history.append(notice.clone().into());

        tracing::info!("'{}' joined as '{}'", connection_id, display_name);

        vec![
            Effect::to_sender(ServerEvent::JoinSuccess),
            Effect::to_sender(ServerEvent::HistorySnapshot { events: snapshot }),
            Effect::to_others(ServerEvent::SystemMessage(notice)),
            Effect::to_all(self.presence_list()),
        ]
    }

    /// Post a chat message from a joined connection to everyone, sender included.
    pub fn post_message(&mut self, connection_id: &ConnectionId, body: impl Into<String>) -> Vec<Effect> {
        let Some(sender_name) = self.presence.name_of(connection_id).cloned() else {
            let error = RoomError::NotJoined(connection_id.clone());
            tracing::debug!("Dropping chat message: {}", error);
            return Vec::new();
        };

        let message = ChatMessage {
            id: EventId::generate(),
            sender_connection_id: connection_id.clone(),
            sender_name,
            body: MessageBody::new(body),
            timestamp: self.now(),
        };
        if let Some(evicted) = self.history.append(message.clone().into()) {
            tracing::trace!("History full, evicted event '{}'", evicted.id());
        }

        vec![Effect::to_all(ServerEvent::ChatMessage(message))]
    }

    /// Delete a message, provided `connection_id` is the connection that posted it.
    ///
    /// Unknown ids, system notices and messages of other connections are
    /// silently ignored.
    pub fn delete_message(&mut self, connection_id: &ConnectionId, message_id: &str) -> Vec<Effect> {
        match self.authorize_delete(connection_id, message_id) {
            Ok(message_id) => {
                self.history.remove_by_id(&message_id);
                tracing::info!("'{}' deleted message '{}'", connection_id, message_id);
                vec![Effect::to_all(ServerEvent::MessageDeleted { message_id })]
            }
            Err(e) => {
                tracing::debug!("Ignoring delete request: {}", e);
                Vec::new()
            }
        }
    }

    fn authorize_delete(
        &self,
        connection_id: &ConnectionId,
        message_id: &str,
    ) -> Result<EventId, RoomError> {
        if self.session_state(connection_id) != Some(SessionState::Joined) {
            return Err(RoomError::NotJoined(connection_id.clone()));
        }
        let event_id = message_id.parse::<EventId>()?;
        let event = self
            .history
            .find(&event_id)
            .ok_or(RoomError::MessageNotFound(event_id))?;
        if !event.is_message_from(connection_id) {
            return Err(RoomError::Unauthorized {
                requester: connection_id.clone(),
                event_id,
            });
        }
        Ok(event_id)
    }

    /// Forget `connection_id`. Runs at most once per connection.
    ///
    /// A joined connection leaves a notice for the others and everyone gets
    /// the new presence list; a connection that never joined leaves no trace.
    pub fn disconnect(&mut self, connection_id: &ConnectionId) -> Vec<Effect> {
        if !self.connections.remove(connection_id) {
            tracing::debug!("Ignoring disconnect of '{}': not live", connection_id);
            return Vec::new();
        }

        let Some(identity) = self.presence.remove(connection_id) else {
            tracing::debug!("'{}' disconnected without joining", connection_id);
            return Vec::new();
        };

        let notice = SystemNotice::left(&identity.display_name, self.now());
        self.history.append(notice.clone().into());

        tracing::info!("'{}' ({}) left", identity.display_name, connection_id);

        vec![
            Effect::to_others(ServerEvent::SystemMessage(notice)),
            Effect::to_all(self.presence_list()),
        ]
    }

    /// Live connections an effect addressed to `audience` must reach.
    pub fn recipients(&self, sender: &ConnectionId, audience: Audience) -> Vec<ConnectionId> {
        match audience {
            Audience::Sender => self
                .connections
                .get(sender)
                .cloned()
                .into_iter()
                .collect(),
            Audience::Others => self
                .connections
                .iter()
                .filter(|id| *id != sender)
                .cloned()
                .collect(),
            Audience::All => self.connections.iter().cloned().collect(),
        }
    }

    fn presence_list(&self) -> ServerEvent {
        ServerEvent::PresenceList {
            names: self.presence.list_names(),
        }
    }

    #[cfg(test)]
    pub fn names(&self) -> Vec<DisplayName> {
        self.presence.list_names()
    }

    #[cfg(test)]
    pub fn history(&self) -> Vec<ChatEvent> {
        self.history.snapshot()
    }

    pub fn summary(&self) -> RoomSnapshot {
        let mut participants = self.presence.list_names();
        participants.sort();
        RoomSnapshot {
            participants,
            connection_count: self.connections.len(),
            history_len: self.history.len(),
            history_limit: self.history.limit(),
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tsudoi_shared::time::SteppingClock;

    use super::*;

    fn create_test_room(limit: usize) -> BroadcastRoom {
        BroadcastRoom::new(
            HistoryLimit::new(limit).unwrap(),
            Arc::new(SteppingClock::new(1_000, 1)),
        )
    }

    fn connected(room: &mut BroadcastRoom, id: &str) -> ConnectionId {
        let connection_id = ConnectionId::new(id);
        room.connect(connection_id.clone()).unwrap();
        connection_id
    }

    fn joined(room: &mut BroadcastRoom, id: &str, name: &str) -> ConnectionId {
        let connection_id = connected(room, id);
        let effects = room.join(&connection_id, name);
        assert_eq!(effects[0].event, ServerEvent::JoinSuccess);
        connection_id
    }

    fn name_set(names: &[DisplayName]) -> HashSet<String> {
        names.iter().map(|n| n.as_str().to_string()).collect()
    }

    fn posted_id(effects: &[Effect]) -> EventId {
        match &effects[0].event {
            ServerEvent::ChatMessage(message) => message.id,
            other => panic!("expected chat message, got {other:?}"),
        }
    }

    #[test]
    fn test_connect_twice_is_rejected() {
        // テスト項目: 同じ接続 ID の二重登録はエラーになる
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = connected(&mut room, "a");

        // when (操作):
        let result = room.connect(a.clone());

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::DuplicateConnection(a.clone())));
        assert_eq!(room.session_state(&a), Some(SessionState::Connected));
    }

    #[test]
    fn test_join_success_effects_in_order() {
        // テスト項目: 参加成功時の効果が順序通りに返される
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = connected(&mut room, "a");

        // when (操作):
        let effects = room.join(&a, "alice");

        // then (期待する結果):
        assert_eq!(effects.len(), 4);
        assert_eq!(effects[0], Effect::to_sender(ServerEvent::JoinSuccess));
        assert_eq!(
            effects[1],
            Effect::to_sender(ServerEvent::HistorySnapshot { events: vec![] })
        );
        match &effects[2] {
            Effect {
                audience: Audience::Others,
                event: ServerEvent::SystemMessage(notice),
            } => assert_eq!(notice.text, "alice has joined"),
            other => panic!("unexpected effect {other:?}"),
        }
        match &effects[3] {
            Effect {
                audience: Audience::All,
                event: ServerEvent::PresenceList { names },
            } => assert_eq!(name_set(names), HashSet::from(["alice".to_string()])),
            other => panic!("unexpected effect {other:?}"),
        }
        assert_eq!(room.session_state(&a), Some(SessionState::Joined));
    }

    #[test]
    fn test_sender_never_sees_own_join_notice_in_snapshot() {
        // テスト項目: 参加者自身の入室通知は履歴スナップショットに含まれない
        // given (前提条件):
        let mut room = create_test_room(10);
        joined(&mut room, "a", "alice");
        let b = connected(&mut room, "b");

        // when (操作):
        let effects = room.join(&b, "bob");

        // then (期待する結果): alice の入室通知のみ含まれる
        let ServerEvent::HistorySnapshot { events } = &effects[1].event else {
            panic!("expected history snapshot");
        };
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], ChatEvent::SystemNotice(n) if n.text == "alice has joined"));
        assert_eq!(room.history().len(), 2);
    }

    #[test]
    fn test_join_with_taken_name() {
        // テスト項目: alice が参加済みの状態で別接続が alice として参加するとエラーになる
        // given (前提条件):
        let mut room = create_test_room(10);
        joined(&mut room, "a", "alice");
        let b = connected(&mut room, "b");

        // when (操作):
        let effects = room.join(&b, "alice");

        // then (期待する結果): 送信者にのみエラーが返り、参加者一覧は alice のみ
        assert_eq!(
            effects,
            vec![Effect::to_sender(ServerEvent::JoinError {
                reason: "name already taken".to_string()
            })]
        );
        assert_eq!(room.session_state(&b), Some(SessionState::Connected));
        assert_eq!(name_set(&room.names()), HashSet::from(["alice".to_string()]));
    }

    #[test]
    fn test_join_with_invalid_name() {
        // テスト項目: 空の名前での参加はエラー理由付きで拒否される
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = connected(&mut room, "a");

        // when (操作):
        let effects = room.join(&a, "");

        // then (期待する結果):
        assert_eq!(
            effects,
            vec![Effect::to_sender(ServerEvent::JoinError {
                reason: "display name must not be empty".to_string()
            })]
        );
        assert_eq!(room.session_state(&a), Some(SessionState::Connected));
    }

    #[test]
    fn test_rejoin_is_noop() {
        // テスト項目: 参加済みの接続による再参加は無視される
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");
        let history_len = room.history().len();

        // when (操作):
        let effects = room.join(&a, "alicia");

        // then (期待する結果):
        assert!(effects.is_empty());
        assert_eq!(name_set(&room.names()), HashSet::from(["alice".to_string()]));
        assert_eq!(room.history().len(), history_len);
    }

    #[test]
    fn test_join_from_unknown_connection_is_noop() {
        // テスト項目: 未接続の ID からの参加は無視される
        // given (前提条件):
        let mut room = create_test_room(10);

        // when (操作):
        let effects = room.join(&ConnectionId::new("ghost"), "alice");

        // then (期待する結果):
        assert!(effects.is_empty());
        assert!(room.names().is_empty());
    }

    #[test]
    fn test_distinct_joins_produce_exact_presence() {
        // テスト項目: 異なる名前で参加した全員が一度ずつ参加者一覧に現れる
        // given (前提条件):
        let mut room = create_test_room(10);
        let names = ["alice", "bob", "charlie", "dave"];

        // when (操作):
        let mut last = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let id = connected(&mut room, &format!("c{i}"));
            last = room.join(&id, name);
        }

        // then (期待する結果):
        let ServerEvent::PresenceList { names: listed } = &last[3].event else {
            panic!("expected presence list");
        };
        assert_eq!(listed.len(), names.len());
        assert_eq!(
            name_set(listed),
            names.iter().map(|n| n.to_string()).collect::<HashSet<_>>()
        );
    }

    #[test]
    fn test_message_before_join_is_dropped() {
        // テスト項目: 参加前のメッセージ送信は黙って破棄される
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = connected(&mut room, "a");

        // when (操作):
        let effects = room.post_message(&a, "hi");

        // then (期待する結果):
        assert!(effects.is_empty());
        assert!(room.history().is_empty());
    }

    #[test]
    fn test_message_is_broadcast_to_all_and_recorded() {
        // テスト項目: メッセージは送信者を含む全員に配信され、履歴に追加される
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");

        // when (操作):
        let effects = room.post_message(&a, "hi");

        // then (期待する結果):
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].audience, Audience::All);
        let ServerEvent::ChatMessage(message) = &effects[0].event else {
            panic!("expected chat message");
        };
        assert_eq!(message.sender_name.as_str(), "alice");
        assert_eq!(message.sender_connection_id, a);
        assert_eq!(message.body.as_str(), "hi");
        assert_eq!(room.history().last(), Some(&ChatEvent::Message(message.clone())));
    }

    #[test]
    fn test_any_body_is_broadcast() {
        // テスト項目: 空の本文や長い本文も、参加済みなら全員にブロードキャストされる
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");
        let history_len = room.history().len();

        // when (操作):
        let empty = room.post_message(&a, "");
        let long = room.post_message(&a, "x".repeat(2001));

        // then (期待する結果):
        for (effects, expected) in [(&empty, String::new()), (&long, "x".repeat(2001))] {
            assert_eq!(effects.len(), 1);
            assert_eq!(effects[0].audience, Audience::All);
            let ServerEvent::ChatMessage(message) = &effects[0].event else {
                panic!("expected chat message");
            };
            assert_eq!(message.body.as_str(), expected);
        }
        assert_eq!(room.history().len(), history_len + 2);
    }

    #[test]
    fn test_names_differing_in_whitespace_are_distinct() {
        // テスト項目: "alice" と "alice " は別の名前として両方参加できる
        // given (前提条件):
        let mut room = create_test_room(10);
        joined(&mut room, "a", "alice");
        let b = connected(&mut room, "b");

        // when (操作):
        let effects = room.join(&b, "alice ");

        // then (期待する結果):
        assert_eq!(effects[0].event, ServerEvent::JoinSuccess);
        assert_eq!(
            name_set(&room.names()),
            HashSet::from(["alice".to_string(), "alice ".to_string()])
        );
    }

    #[test]
    fn test_history_keeps_last_limit_messages() {
        // テスト項目: 上限 100 で 101 件送信すると、最初のメッセージが消えて 100 件になる
        // given (前提条件):
        let mut room = create_test_room(100);
        let a = joined(&mut room, "a", "alice");

        // when (操作):
        let ids: Vec<EventId> = (0..101)
            .map(|i| posted_id(&room.post_message(&a, format!("message {i}"))))
            .collect();
        let c = connected(&mut room, "c");
        let effects = room.join(&c, "carol");

        // then (期待する結果):
        let ServerEvent::HistorySnapshot { events } = &effects[1].event else {
            panic!("expected history snapshot");
        };
        assert_eq!(events.len(), 100);
        let snapshot_ids: Vec<EventId> = events.iter().map(|e| e.id()).collect();
        assert!(!snapshot_ids.contains(&ids[0]));
        assert_eq!(snapshot_ids, ids[1..].to_vec());
    }

    #[test]
    fn test_delete_own_message() {
        // テスト項目: A の送信した X を C が履歴で受け取り、A が削除すると後続の参加者には見えない
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");
        let x = posted_id(&room.post_message(&a, "hi"));
        let c = connected(&mut room, "c");
        let join_effects = room.join(&c, "carol");
        let ServerEvent::HistorySnapshot { events } = &join_effects[1].event else {
            panic!("expected history snapshot");
        };
        assert!(events.iter().any(|e| e.id() == x));

        // when (操作):
        let effects = room.delete_message(&a, &x.to_string());

        // then (期待する結果):
        assert_eq!(
            effects,
            vec![Effect::to_all(ServerEvent::MessageDeleted { message_id: x })]
        );
        assert!(room.history().iter().all(|e| e.id() != x));
        let d = connected(&mut room, "d");
        let later = room.join(&d, "dave");
        let ServerEvent::HistorySnapshot { events } = &later[1].event else {
            panic!("expected history snapshot");
        };
        assert!(events.iter().all(|e| e.id() != x));
    }

    #[test]
    fn test_delete_foreign_message_is_denied() {
        // テスト項目: 他の接続のメッセージは削除できず、通知も発生しない
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");
        let b = joined(&mut room, "b", "bob");
        let x = posted_id(&room.post_message(&a, "hi"));
        let before = room.history();

        // when (操作):
        let effects = room.delete_message(&b, &x.to_string());

        // then (期待する結果):
        assert!(effects.is_empty());
        assert_eq!(room.history(), before);
    }

    #[test]
    fn test_delete_is_identity_based_not_name_based() {
        // テスト項目: 同じ名前で再参加した別接続は、以前のメッセージを削除できない
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");
        let x = posted_id(&room.post_message(&a, "hi"));
        room.disconnect(&a);
        let a2 = joined(&mut room, "a2", "alice");

        // when (操作):
        let effects = room.delete_message(&a2, &x.to_string());

        // then (期待する結果):
        assert!(effects.is_empty());
        assert!(room.history().iter().any(|e| e.id() == x));
    }

    #[test]
    fn test_delete_system_notice_unknown_or_malformed_id_is_noop() {
        // テスト項目: システム通知・存在しない ID・不正な ID の削除は無視される
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");
        let notice_id = room.history()[0].id();
        let before = room.history();

        // when (操作):
        let notice = room.delete_message(&a, &notice_id.to_string());
        let unknown = room.delete_message(&a, &EventId::generate().to_string());
        let malformed = room.delete_message(&a, "garbage");

        // then (期待する結果):
        assert!(notice.is_empty());
        assert!(unknown.is_empty());
        assert!(malformed.is_empty());
        assert_eq!(room.history(), before);
    }

    #[test]
    fn test_delete_before_join_is_noop() {
        // テスト項目: 参加前の削除要求は無視される
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");
        let x = posted_id(&room.post_message(&a, "hi"));
        let b = connected(&mut room, "b");

        // when (操作):
        let effects = room.delete_message(&b, &x.to_string());

        // then (期待する結果):
        assert!(effects.is_empty());
        assert!(room.history().iter().any(|e| e.id() == x));
    }

    #[test]
    fn test_disconnect_joined() {
        // テスト項目: 参加済み接続の切断で退室通知と参加者一覧が配信される
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");
        joined(&mut room, "b", "bob");

        // when (操作):
        let effects = room.disconnect(&a);

        // then (期待する結果):
        assert_eq!(effects.len(), 2);
        match &effects[0] {
            Effect {
                audience: Audience::Others,
                event: ServerEvent::SystemMessage(notice),
            } => assert_eq!(notice.text, "alice has left"),
            other => panic!("unexpected effect {other:?}"),
        }
        match &effects[1] {
            Effect {
                audience: Audience::All,
                event: ServerEvent::PresenceList { names },
            } => assert_eq!(name_set(names), HashSet::from(["bob".to_string()])),
            other => panic!("unexpected effect {other:?}"),
        }
        assert_eq!(room.session_state(&a), None);
        assert!(matches!(
            room.history().last(),
            Some(ChatEvent::SystemNotice(n)) if n.text == "alice has left"
        ));
    }

    #[test]
    fn test_disconnect_never_joined_is_silent() {
        // テスト項目: 未参加の接続の切断では何も配信されず、参加者一覧にも現れない
        // given (前提条件):
        let mut room = create_test_room(10);
        joined(&mut room, "a", "alice");
        let b = connected(&mut room, "b");
        let history_len = room.history().len();

        // when (操作):
        let effects = room.disconnect(&b);

        // then (期待する結果):
        assert!(effects.is_empty());
        assert_eq!(room.history().len(), history_len);
        assert_eq!(name_set(&room.names()), HashSet::from(["alice".to_string()]));
        assert_eq!(room.summary().connection_count, 1);
    }

    #[test]
    fn test_disconnect_runs_once() {
        // テスト項目: 二度目の切断は何もしない
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");
        room.disconnect(&a);
        let history_len = room.history().len();

        // when (操作):
        let effects = room.disconnect(&a);

        // then (期待する結果):
        assert!(effects.is_empty());
        assert_eq!(room.history().len(), history_len);
    }

    #[test]
    fn test_recipients_by_audience() {
        // テスト項目: 宛先が Sender / Others / All ごとに正しく解決される
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");
        let b = joined(&mut room, "b", "bob");
        let c = connected(&mut room, "c");

        // when (操作):
        let sender = room.recipients(&a, Audience::Sender);
        let others: HashSet<ConnectionId> =
            room.recipients(&a, Audience::Others).into_iter().collect();
        let all: HashSet<ConnectionId> = room.recipients(&a, Audience::All).into_iter().collect();

        // then (期待する結果): 未参加の接続もブロードキャスト対象に含まれる
        assert_eq!(sender, vec![a.clone()]);
        assert_eq!(others, HashSet::from([b.clone(), c.clone()]));
        assert_eq!(all, HashSet::from([a.clone(), b, c]));
    }

    #[test]
    fn test_recipients_of_departed_sender() {
        // テスト項目: 切断済みの送信者は Sender 宛ての配信対象にならない
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");
        let b = joined(&mut room, "b", "bob");
        room.disconnect(&a);

        // then (期待する結果):
        assert!(room.recipients(&a, Audience::Sender).is_empty());
        assert_eq!(room.recipients(&a, Audience::All), vec![b.clone()]);
        assert_eq!(room.recipients(&a, Audience::Others), vec![b]);
    }

    #[test]
    fn test_summary() {
        // テスト項目: サマリーはソート済みの参加者名と件数を返す
        // given (前提条件):
        let mut room = create_test_room(10);
        joined(&mut room, "b", "bob");
        joined(&mut room, "a", "alice");
        connected(&mut room, "c");

        // when (操作):
        let summary = room.summary();

        // then (期待する結果):
        assert_eq!(
            summary.participants,
            vec![
                DisplayName::new("alice").unwrap(),
                DisplayName::new("bob").unwrap()
            ]
        );
        assert_eq!(summary.connection_count, 3);
        assert_eq!(summary.history_len, 2);
        assert_eq!(summary.history_limit.value(), 10);
    }

    #[test]
    fn test_timestamps_come_from_clock() {
        // テスト項目: イベントのタイムスタンプは注入されたクロックから取得される
        // given (前提条件):
        let mut room = create_test_room(10);
        let a = joined(&mut room, "a", "alice");

        // when (操作):
        let effects = room.post_message(&a, "hi");

        // then (期待する結果): 作成時刻が 1000、入室通知が 1001、メッセージが 1002
        let ServerEvent::ChatMessage(message) = &effects[0].event else {
            panic!("expected chat message");
        };
        assert_eq!(room.summary().created_at, Timestamp::new(1_000));
        assert_eq!(room.history()[0].timestamp(), Timestamp::new(1_001));
        assert_eq!(message.timestamp, Timestamp::new(1_002));
    }
}
