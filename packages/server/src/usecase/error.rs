//! UseCase 層のエラー型

use thiserror::Error;

/// 接続処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// 同じ接続 ID が既に登録されている
    #[error("Connection ID '{0}' is already registered")]
    DuplicateConnectionId(String),
}
