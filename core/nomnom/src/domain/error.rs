//! ドメインエラー（thiserror）
//!
//! どれもプロセスを止めない。境界（NomNomApp / CLI）で吸収・表示する。

use super::RestaurantId;

/// レビュー投稿の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("You need to log in to post a review")]
    NoSession,
    #[error("Rating must be between 1 and 5 stars (got {0})")]
    StarsOutOfRange(u8),
    #[error("Review text must be at least {min} characters (got {len})")]
    TextTooShort { len: usize, min: usize },
}

/// カタログに存在しないレストランを参照した
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Restaurant not found: {0}")]
pub struct NotFound(pub RestaurantId);

/// config.json の値が使えない
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("storage_key_prefix may only contain letters, digits, '_' and '-' (got {0:?})")]
    InvalidKeyPrefix(String),
}

/// カタログ構築時の不変条件違反
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate restaurant id in catalog: {0}")]
    DuplicateId(RestaurantId),
}
