//! Room の効果（宛先付きイベント）を配信する共通処理

use crate::domain::{Audience, BroadcastRoom, ConnectionId, Effect, MessagePusher};

/// 効果を宛先に解決して送信キューに積む
///
/// Room のロックを保持したまま呼び出すこと。宛先は呼び出し時点の接続から
/// 解決され、全ての受信者が同じ順序でブロードキャストを受け取る。
/// 送信の失敗はログに残すだけで、Room の状態には影響しない。
pub(crate) async fn deliver(
    room: &BroadcastRoom,
    message_pusher: &dyn MessagePusher,
    sender: &ConnectionId,
    effects: &[Effect],
) {
    for effect in effects {
        let targets = room.recipients(sender, effect.audience);
        if targets.is_empty() {
            continue;
        }

        let result = match effect.audience {
            Audience::Sender => message_pusher.push_to(sender, &effect.event).await,
            Audience::Others | Audience::All => {
                message_pusher.broadcast(targets, &effect.event).await
            }
        };
        if let Err(e) = result {
            tracing::warn!("Failed to deliver event for '{}': {}", sender, e);
        }
    }
}
