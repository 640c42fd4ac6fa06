//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::MutexGuard;

use super::BroadcastRoom;

/// Room Repository trait
///
/// Room の状態（参加者・履歴・接続）への排他的アクセスを提供する。
/// 全ての Room 操作はこのガードを保持している間に実行されるため、
/// 2 つの操作が交互に実行されることはない。
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Room への排他的アクセスを取得
    async fn lock<'a>(&'a self) -> MutexGuard<'a, BroadcastRoom>;
}
