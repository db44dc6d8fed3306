//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・XDG ディレクトリを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` など。
pub trait EnvResolver: Send + Sync {
    /// config / data / state ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. `home_override`（CLI の -d/--home-dir）
    /// 2. NOMNOM_HOME
    /// 3. XDG_CONFIG_HOME / XDG_DATA_HOME / XDG_STATE_HOME 配下の nomnom
    /// 4. $HOME/.config, $HOME/.local/share, $HOME/.local/state 配下の nomnom
    fn resolve_dirs(&self, home_override: Option<&HomeDir>) -> Result<Dirs, Error>;
}
