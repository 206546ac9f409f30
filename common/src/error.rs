//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// キーワードが1件も設定されていない（起動時の致命的エラー）
    #[error("Keyword registry is empty: no rules configured")]
    RegistryEmpty,

    #[error("Invalid keyword: {0:?}")]
    InvalidKeyword(String),

    #[error("Duplicate keyword: {0}")]
    DuplicateKeyword(String),

    #[error("Invalid priority: {0} (expected 1-4)")]
    InvalidPriority(u8),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
