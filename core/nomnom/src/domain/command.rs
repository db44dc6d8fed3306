//! nomnom コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、main で match してディスパッチする。

use super::RestaurantId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NomCommand {
    /// ヘルプ表示
    Help,
    /// 一覧（クエリなしならホームのトレンド一覧と同じ全件）
    Search { query: String },
    /// 詳細表示（メニュー・レビュー）
    Show { id: RestaurantId },
    /// ブックマークのトグル
    Bookmark { id: RestaurantId },
    /// ブックマーク一覧
    Bookmarks,
    /// レビュー投稿
    Review {
        id: RestaurantId,
        stars: u8,
        text: String,
    },
    /// ログイン（名前とメールを保存するだけ）
    Login { name: String, email: String },
    Logout,
    /// 現在のセッション表示
    Whoami,
}

impl NomCommand {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            NomCommand::Help => "help",
            NomCommand::Search { .. } => "search",
            NomCommand::Show { .. } => "show",
            NomCommand::Bookmark { .. } => "bookmark",
            NomCommand::Bookmarks => "bookmarks",
            NomCommand::Review { .. } => "review",
            NomCommand::Login { .. } => "login",
            NomCommand::Logout => "logout",
            NomCommand::Whoami => "whoami",
        }
    }
}
