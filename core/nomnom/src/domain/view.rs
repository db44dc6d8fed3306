//! 画面状態（永続化しない）

use super::RestaurantId;
use std::fmt;
use std::str::FromStr;

/// アクティブなタブ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Home,
    Search,
    Details,
    Login,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Search => "search",
            Tab::Details => "details",
            Tab::Login => "login",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Tab::Home),
            "search" => Ok(Tab::Search),
            "details" => Ok(Tab::Details),
            "login" => Ok(Tab::Login),
            other => Err(format!("unknown tab: {}", other)),
        }
    }
}

/// 画面の一時状態。起動時は (home, なし, 閉, "")。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub tab: Tab,
    /// 詳細表示対象のレストラン ID
    pub active: Option<RestaurantId>,
    /// フィルタパネルの開閉（中身は未実装）
    pub filters_open: bool,
    /// 入力中の検索クエリ
    pub query: String,
}
