//! Presence table: which connection holds which display name.

use std::collections::HashMap;

use super::{
    entity::Identity,
    error::RoomError,
    value_object::{ConnectionId, DisplayName},
};

/// Identities of all joined connections.
///
/// Invariants: at most one identity per connection, and no two live
/// identities share a display name.
#[derive(Debug, Default)]
pub struct PresenceTable {
    by_connection: HashMap<ConnectionId, Identity>,
    by_name: HashMap<DisplayName, ConnectionId>,
}

impl PresenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `display_name` to `connection_id`.
    ///
    /// Fails with [`RoomError::NameTaken`] when the name belongs to a different
    /// live connection. Binding the same pair twice is accepted.
    pub fn try_join(
        &mut self,
        connection_id: ConnectionId,
        display_name: DisplayName,
    ) -> Result<(), RoomError> {
        match self.by_name.get(&display_name) {
            Some(holder) if holder == &connection_id => return Ok(()),
            Some(_) => return Err(RoomError::NameTaken(display_name)),
            None => {}
        }

        // a connection holds a single name
        if let Some(previous) = self.by_connection.get(&connection_id) {
            self.by_name.remove(&previous.display_name);
        }

        self.by_name
            .insert(display_name.clone(), connection_id.clone());
        self.by_connection.insert(
            connection_id.clone(),
            Identity::new(connection_id, display_name),
        );
        Ok(())
    }

    /// Remove the identity of `connection_id`, if any. Idempotent.
    pub fn remove(&mut self, connection_id: &ConnectionId) -> Option<Identity> {
        let identity = self.by_connection.remove(connection_id)?;
        self.by_name.remove(&identity.display_name);
        Some(identity)
    }

    pub fn name_of(&self, connection_id: &ConnectionId) -> Option<&DisplayName> {
        self.by_connection
            .get(connection_id)
            .map(|identity| &identity.display_name)
    }

    #[cfg(test)]
    pub fn contains_name(&self, display_name: &DisplayName) -> bool {
        self.by_name.contains_key(display_name)
    }

    /// Snapshot of the current names. Order is unspecified.
    pub fn list_names(&self) -> Vec<DisplayName> {
        self.by_connection
            .values()
            .map(|identity| identity.display_name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_connection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_connection.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn name(value: &str) -> DisplayName {
        DisplayName::new(value).unwrap()
    }

    fn conn(value: &str) -> ConnectionId {
        ConnectionId::new(value)
    }

    #[test]
    fn test_try_join_distinct_names() {
        // テスト項目: 異なる名前の参加は全て受け付けられ、名前一覧に一度ずつ現れる
        // given (前提条件):
        let mut table = PresenceTable::new();

        // when (操作):
        for (c, n) in [("c1", "alice"), ("c2", "bob"), ("c3", "charlie")] {
            table.try_join(conn(c), name(n)).unwrap();
        }

        // then (期待する結果):
        let names: HashSet<DisplayName> = table.list_names().into_iter().collect();
        let expected: HashSet<DisplayName> =
            ["alice", "bob", "charlie"].into_iter().map(name).collect();
        assert_eq!(names, expected);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_try_join_name_taken_by_other_connection() {
        // テスト項目: 他の接続が使用中の名前はエラーになり、状態は変わらない
        // given (前提条件):
        let mut table = PresenceTable::new();
        table.try_join(conn("c1"), name("alice")).unwrap();

        // when (操作):
        let result = table.try_join(conn("c2"), name("alice"));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::NameTaken(name("alice"))));
        assert_eq!(table.list_names(), vec![name("alice")]);
        assert_eq!(table.name_of(&conn("c2")), None);
    }

    #[test]
    fn test_try_join_same_pair_is_accepted() {
        // テスト項目: 同じ接続が同じ名前で再登録しても成功する
        // given (前提条件):
        let mut table = PresenceTable::new();
        table.try_join(conn("c1"), name("alice")).unwrap();

        // when (操作):
        let result = table.try_join(conn("c1"), name("alice"));

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_frees_name() {
        // テスト項目: 削除すると名前が解放され、別の接続が使えるようになる
        // given (前提条件):
        let mut table = PresenceTable::new();
        table.try_join(conn("c1"), name("alice")).unwrap();

        // when (操作):
        let removed = table.remove(&conn("c1"));

        // then (期待する結果):
        assert_eq!(removed.map(|i| i.display_name), Some(name("alice")));
        assert!(table.is_empty());
        assert!(!table.contains_name(&name("alice")));
        assert!(table.try_join(conn("c2"), name("alice")).is_ok());
    }

    #[test]
    fn test_remove_is_idempotent() {
        // テスト項目: 存在しない接続の削除は何もしない
        // given (前提条件):
        let mut table = PresenceTable::new();

        // when (操作):
        let first = table.remove(&conn("ghost"));
        let second = table.remove(&conn("ghost"));

        // then (期待する結果):
        assert!(first.is_none());
        assert!(second.is_none());
    }

    #[test]
    fn test_name_of() {
        // テスト項目: 接続 ID から名前を引ける
        // given (前提条件):
        let mut table = PresenceTable::new();
        table.try_join(conn("c1"), name("alice")).unwrap();

        // then (期待する結果):
        assert_eq!(table.name_of(&conn("c1")), Some(&name("alice")));
        assert_eq!(table.name_of(&conn("c2")), None);
    }
}
