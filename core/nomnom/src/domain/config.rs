//! アプリ設定（config.json）
//!
//! ファイルが無ければ既定値。CLI フラグは wiring で上書きする。

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ストレージキーの既定プレフィックス（nom_user / nom_reviews / nom_bookmarks）
pub const DEFAULT_STORAGE_KEY_PREFIX: &str = "nom_";

/// ストレージキーに使える文字（キーはそのままファイル名になる）
pub fn is_storage_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage_key_prefix: String,
    /// JSON カタログのパス。None なら組み込みのモックデータ。
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key_prefix: DEFAULT_STORAGE_KEY_PREFIX.to_string(),
            catalog_path: None,
        }
    }
}

impl AppConfig {
    /// プレフィックスはキーの一部になるので、キーと同じ文字種に限る（空は可）
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.storage_key_prefix.chars().all(is_storage_key_char) {
            return Err(ConfigError::InvalidKeyPrefix(
                self.storage_key_prefix.clone(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: AppConfig = serde_json::from_str(r#"{"catalog_path": "/data/dhaka.json"}"#).unwrap();
        assert_eq!(cfg.storage_key_prefix, "nom_");
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("/data/dhaka.json")));

        let cfg: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_key_prefix_charset() {
        assert!(AppConfig::default().validate().is_ok());
        let mut cfg = AppConfig::default();
        cfg.storage_key_prefix = String::new();
        assert!(cfg.validate().is_ok());
        cfg.storage_key_prefix = "dev-2_".to_string();
        assert!(cfg.validate().is_ok());
        for bad in ["nom.", "a/b", "nom ", "ノム_"] {
            cfg.storage_key_prefix = bad.to_string();
            assert_eq!(
                cfg.validate(),
                Err(ConfigError::InvalidKeyPrefix(bad.to_string()))
            );
        }
    }
}
