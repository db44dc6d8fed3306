//! 画面遷移（タブ・詳細対象・フィルタパネル・検索クエリ）
//!
//! 永続化しない。起動時は ViewState::default()。自動遷移はなく、明示的な操作でのみ変わる。

use crate::domain::{RestaurantId, Tab, ViewState};

#[derive(Debug, Default)]
pub struct ViewRouter {
    state: ViewState,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn tab(&self) -> Tab {
        self.state.tab
    }

    /// タブを切り替える。詳細タブでも対象 ID は変えない（無ければ詳細は描画されない）。
    pub fn navigate(&mut self, tab: Tab) {
        self.state.tab = tab;
    }

    pub fn open_details(&mut self, id: RestaurantId) {
        self.state.active = Some(id);
        self.state.tab = Tab::Details;
    }

    /// ホームへ戻る
    pub fn go_back(&mut self) {
        self.state.tab = Tab::Home;
    }

    /// 詳細タブかつ対象 ID があるときだけ Some
    pub fn details_target(&self) -> Option<&RestaurantId> {
        match self.state.tab {
            Tab::Details => self.state.active.as_ref(),
            _ => None,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    /// 検索欄のフォーカス（検索タブへ移る）
    pub fn focus_search(&mut self) {
        self.state.tab = Tab::Search;
    }

    pub fn open_filters(&mut self) {
        self.state.filters_open = true;
    }

    pub fn close_filters(&mut self) {
        self.state.filters_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_details_then_back() {
        let mut router = ViewRouter::new();
        router.open_details("r2".into());
        assert_eq!(router.tab(), Tab::Details);
        assert_eq!(router.details_target(), Some(&RestaurantId::new("r2")));

        router.go_back();
        assert_eq!(router.tab(), Tab::Home);
        assert!(router.details_target().is_none());
        // 戻っても対象 ID は保持される
        assert_eq!(router.state().active, Some(RestaurantId::new("r2")));
    }

    #[test]
    fn test_details_without_active_renders_nothing() {
        let mut router = ViewRouter::new();
        router.navigate(Tab::Details);
        assert_eq!(router.tab(), Tab::Details);
        assert!(router.details_target().is_none());
    }

    #[test]
    fn test_navigation_is_explicit_only() {
        let mut router = ViewRouter::new();
        router.set_query("kacchi");
        assert_eq!(router.tab(), Tab::Home);
        router.focus_search();
        assert_eq!(router.tab(), Tab::Search);
        router.navigate(Tab::Login);
        assert_eq!(router.tab(), Tab::Login);
        assert_eq!(router.query(), "kacchi");
    }

    #[test]
    fn test_filter_panel_toggle() {
        let mut router = ViewRouter::new();
        router.open_filters();
        assert!(router.state().filters_open);
        router.close_filters();
        assert!(!router.state().filters_open);
    }
}
