//! ユースケース層: ストア・画面遷移・アプリ状態コンテナ

pub mod app;
pub mod bookmark_store;
pub mod persisted;
pub mod review_store;
pub mod session_store;
pub mod view_router;

pub use app::{AppDeps, NomNomApp, RestaurantCard, RestaurantDetails};
pub use bookmark_store::BookmarkStore;
pub use persisted::{StorageKey, StorageRecord};
pub use review_store::{ReviewMap, ReviewStore};
pub use session_store::SessionStore;
pub use view_router::ViewRouter;
