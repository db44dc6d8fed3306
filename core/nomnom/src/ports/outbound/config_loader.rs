//! 設定読み込み Outbound ポート

use crate::domain::AppConfig;
use common::error::Error;
use std::path::Path;

/// config.json を読み込む。ファイルが無い場合は既定値を返す。
pub trait ConfigLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<AppConfig, Error>;
}
