//! ローカルストレージ Outbound ポート
//!
//! キー → JSON 文字列の永続領域（ブラウザの localStorage 相当）。
//! ストアはこの trait 経由でのみ永続化する。

use common::error::Error;

/// キー・値ストレージ（Outbound ポート）
///
/// 実装は `FileLocalStorage`（1 キー 1 ファイル）や `MemoryLocalStorage`。
pub trait LocalStorage: Send + Sync {
    /// キーが無ければ Ok(None)
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;
    /// キーが無くてもエラーにしない
    fn remove_item(&self, key: &str) -> Result<(), Error>;
}
