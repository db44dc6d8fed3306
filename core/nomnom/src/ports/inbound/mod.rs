//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::NomCommand;
use common::error::Error;

/// NomCommand を 1 つ実行して終了コードを返す Inbound ポート
///
/// main の Runner がこの trait を実装し、NomNomApp へ委譲する。
pub trait RunNomCommand {
    fn run(&mut self, cmd: NomCommand) -> Result<i32, Error>;
}
