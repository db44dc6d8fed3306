//! アプリ全体の状態コンテナ
//!
//! カタログ・3 つの永続ストア・画面遷移を束ね、ユーザー操作を受け付ける。
//! レビュー投稿のセッション検査はここで行う（ストアに届く前に弾く）。

use super::bookmark_store::BookmarkStore;
use super::persisted::{StorageKey, StorageRecord};
use super::review_store::ReviewStore;
use super::session_store::SessionStore;
use super::view_router::ViewRouter;
use crate::domain::{
    Catalog, NotFound, Restaurant, RestaurantId, Review, Session, Tab, ValidationError, ViewState,
};
use crate::ports::outbound::LocalStorage;
use common::ports::outbound::{Clock, IdGenerator, Log, LogLevel, LogRecord};
use std::sync::Arc;

/// 起動時に注入する外界のポート
pub struct AppDeps {
    pub storage: Arc<dyn LocalStorage>,
    pub clock: Arc<dyn Clock>,
    pub id_gen: Arc<dyn IdGenerator>,
    pub logger: Arc<dyn Log>,
    /// ストレージキーのプレフィックス（例: "nom_"）
    pub key_prefix: String,
}

/// 一覧の 1 枚
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestaurantCard<'a> {
    pub restaurant: &'a Restaurant,
    pub bookmarked: bool,
}

/// 詳細画面の表示内容
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestaurantDetails<'a> {
    pub restaurant: &'a Restaurant,
    /// 新しい順
    pub reviews: &'a [Review],
    pub bookmarked: bool,
    /// ログイン中なら投稿フォームが有効
    pub can_review: bool,
}

pub struct NomNomApp {
    catalog: Catalog,
    bookmarks: BookmarkStore,
    reviews: ReviewStore,
    session: SessionStore,
    router: ViewRouter,
    logger: Arc<dyn Log>,
}

impl NomNomApp {
    /// 各ストアをストレージから復元して起動する。画面状態は初期値。
    pub fn start(catalog: Catalog, deps: AppDeps) -> Self {
        let record = |key: StorageKey| key.with_prefix(&deps.key_prefix);
        let bookmarks = BookmarkStore::hydrate(StorageRecord::new(
            Arc::clone(&deps.storage),
            record(StorageKey::Bookmarks),
            Arc::clone(&deps.logger),
        ));
        let reviews = ReviewStore::hydrate(
            StorageRecord::new(
                Arc::clone(&deps.storage),
                record(StorageKey::Reviews),
                Arc::clone(&deps.logger),
            ),
            Arc::clone(&deps.clock),
            Arc::clone(&deps.id_gen),
        );
        let session = SessionStore::hydrate(StorageRecord::new(
            Arc::clone(&deps.storage),
            record(StorageKey::User),
            Arc::clone(&deps.logger),
        ));
        Self {
            catalog,
            bookmarks,
            reviews,
            session,
            router: ViewRouter::new(),
            logger: deps.logger,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &ViewState {
        self.router.state()
    }

    // --- 検索 ---

    /// 検索クエリの変更
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.router.set_query(query);
    }

    /// 検索欄にフォーカス（検索タブへ）
    pub fn focus_search(&mut self) {
        self.router.focus_search();
    }

    /// 現在のクエリで絞り込んだ一覧（カタログ順）
    pub fn results(&self) -> Vec<RestaurantCard<'_>> {
        self.catalog
            .search(self.router.query())
            .into_iter()
            .map(|restaurant| RestaurantCard {
                restaurant,
                bookmarked: self.bookmarks.is_bookmarked(&restaurant.id),
            })
            .collect()
    }

    pub fn open_filters(&mut self) {
        self.router.open_filters();
    }

    pub fn close_filters(&mut self) {
        self.router.close_filters();
    }

    // --- ブックマーク ---

    pub fn toggle_bookmark(&mut self, id: &RestaurantId) -> bool {
        self.bookmarks.toggle(id)
    }

    pub fn is_bookmarked(&self, id: &RestaurantId) -> bool {
        self.bookmarks.is_bookmarked(id)
    }

    /// ブックマーク済みのレストラン（カタログ順）。カタログに無い ID は飛ばす。
    pub fn bookmarked_restaurants(&self) -> Vec<&Restaurant> {
        self.catalog
            .restaurants()
            .iter()
            .filter(|r| self.bookmarks.is_bookmarked(&r.id))
            .collect()
    }

    // --- 画面遷移 ---

    pub fn navigate(&mut self, tab: Tab) {
        self.router.navigate(tab);
    }

    /// 詳細を開く。カタログに無い ID ならホームへ戻して NotFound。
    pub fn open_details(&mut self, id: &RestaurantId) -> Result<(), NotFound> {
        if !self.catalog.contains(id) {
            self.router.go_back();
            let _ = self.logger.log(
                &LogRecord::new(LogLevel::Warn, "restaurant not found")
                    .layer("usecase")
                    .kind("navigation")
                    .field("id", id.as_str()),
            );
            return Err(NotFound(id.clone()));
        }
        self.router.open_details(id.clone());
        Ok(())
    }

    pub fn go_back(&mut self) {
        self.router.go_back();
    }

    /// 詳細タブで対象が解決できるときだけ Some
    pub fn details(&self) -> Option<RestaurantDetails<'_>> {
        let id = self.router.details_target()?;
        let restaurant = self.catalog.get(id)?;
        Some(RestaurantDetails {
            restaurant,
            reviews: self.reviews.reviews_for(id),
            bookmarked: self.bookmarks.is_bookmarked(id),
            can_review: self.session.current_session().is_some(),
        })
    }

    // --- レビュー ---

    /// レビューを投稿する。未ログインなら NoSession でストアに触れない。
    pub fn submit_review(
        &mut self,
        restaurant_id: &RestaurantId,
        stars: u8,
        text: &str,
    ) -> Result<Review, ValidationError> {
        let result = match self.session.current_session() {
            None => Err(ValidationError::NoSession),
            Some(session) => {
                let author = session.name.clone();
                self.reviews.add_review(restaurant_id, stars, text, &author)
            }
        };
        if let Err(e) = &result {
            let _ = self.logger.log(
                &LogRecord::new(LogLevel::Info, "review rejected")
                    .layer("usecase")
                    .kind("validation")
                    .field("id", restaurant_id.as_str())
                    .field("reason", e.to_string()),
            );
        }
        result
    }

    pub fn reviews_for(&self, restaurant_id: &RestaurantId) -> &[Review] {
        self.reviews.reviews_for(restaurant_id)
    }

    // --- セッション ---

    /// ログインしてホームへ戻る
    pub fn login(&mut self, name: &str, email: &str) -> Session {
        let session = self.session.login(name, email).clone();
        self.router.navigate(Tab::Home);
        session
    }

    /// ログイン画面のキャンセル（ホームへ）
    pub fn cancel_login(&mut self) {
        self.router.navigate(Tab::Home);
    }

    pub fn logout(&mut self) -> Option<Session> {
        self.session.logout()
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.session.current_session()
    }
}
