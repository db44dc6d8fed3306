//! 実行時ディレクトリ（XDG / NOMNOM_HOME 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、ストレージ・ログ・設定ファイルのパス計算に使う。

use super::HomeDir;
use std::path::PathBuf;

const STORAGE_SUBDIR: &str = "storage";
const LOGS_SUBDIR: &str = "logs";
const CONFIG_FILENAME: &str = "config.json";
const LOG_FILENAME: &str = "nomnom.jsonl";

/// 解決済みの config / data / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// ルート 1 つの下に config / data / state を並べる（NOMNOM_HOME 指定時）
    pub fn under(home: &HomeDir) -> Self {
        Self {
            config_dir: home.join("config"),
            data_dir: home.join("data"),
            state_dir: home.join("state"),
        }
    }

    /// ローカルストレージのレコード格納ディレクトリ（data/storage）
    pub fn storage_dir(&self) -> PathBuf {
        self.data_dir.join(STORAGE_SUBDIR)
    }

    /// ログ格納ディレクトリ（state/logs）
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join(LOGS_SUBDIR)
    }

    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILENAME)
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_under_home() {
        let dirs = Dirs::under(&HomeDir::new("/tmp/nomnom"));
        assert_eq!(dirs.storage_dir(), PathBuf::from("/tmp/nomnom/data/storage"));
        assert_eq!(dirs.log_file(), PathBuf::from("/tmp/nomnom/state/logs/nomnom.jsonl"));
        assert_eq!(dirs.config_file(), PathBuf::from("/tmp/nomnom/config/config.json"));
    }
}
