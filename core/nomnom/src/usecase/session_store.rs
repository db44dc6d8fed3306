//! セッションストア（ログイン中ユーザーの保持）
//!
//! 資格情報の検証はしない。本物の認証を入れる場合はこのストアの契約を拡張する。

use super::persisted::StorageRecord;
use crate::domain::Session;

pub struct SessionStore {
    current: Option<Session>,
    record: StorageRecord<Option<Session>>,
}

impl SessionStore {
    /// 保存済みのセッションを復元する（無い・壊れている場合は未ログイン）
    pub fn hydrate(record: StorageRecord<Option<Session>>) -> Self {
        let current = record.load_or(|| None);
        Self { current, record }
    }

    /// 名前・メールをそのまま受け付けて保存する（空文字も可）
    pub fn login(&mut self, name: &str, email: &str) -> &Session {
        let session = self.current.insert(Session::new(name, email));
        self.record.persist(&Some(session.clone()));
        session
    }

    /// ログアウトし、保存済みレコードも消す
    pub fn logout(&mut self) -> Option<Session> {
        let previous = self.current.take();
        self.record.clear();
        previous
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::MemoryLocalStorage;
    use crate::ports::outbound::LocalStorage;
    use common::adapter::NoopLog;
    use std::sync::Arc;

    fn store(storage: &Arc<MemoryLocalStorage>) -> SessionStore {
        SessionStore::hydrate(StorageRecord::new(storage.clone(), "nom_user", Arc::new(NoopLog)))
    }

    #[test]
    fn test_no_session_initially() {
        let storage = Arc::new(MemoryLocalStorage::new());
        assert!(store(&storage).current_session().is_none());
    }

    #[test]
    fn test_login_persists_and_survives_restart() {
        let storage = Arc::new(MemoryLocalStorage::new());
        let mut s = store(&storage);
        let session = s.login("Asha", "a@x.com").clone();
        assert_eq!(session, Session::new("Asha", "a@x.com"));
        assert_eq!(
            storage.get_item("nom_user").unwrap().as_deref(),
            Some(r#"{"name":"Asha","email":"a@x.com"}"#)
        );

        let restarted = store(&storage);
        assert_eq!(restarted.current_session(), Some(&session));
    }

    #[test]
    fn test_empty_credentials_accepted() {
        let storage = Arc::new(MemoryLocalStorage::new());
        let mut s = store(&storage);
        s.login("", "");
        assert_eq!(s.current_session(), Some(&Session::new("", "")));
    }

    #[test]
    fn test_relogin_replaces_session() {
        let storage = Arc::new(MemoryLocalStorage::new());
        let mut s = store(&storage);
        s.login("Asha", "a@x.com");
        s.login("Rafi", "r@x.com");
        assert_eq!(store(&storage).current_session().map(|s| s.name.as_str()), Some("Rafi"));
    }

    #[test]
    fn test_logout_clears_persisted_session() {
        let storage = Arc::new(MemoryLocalStorage::new());
        let mut s = store(&storage);
        s.login("Asha", "a@x.com");
        assert_eq!(s.logout().map(|s| s.name), Some("Asha".to_string()));
        assert!(s.current_session().is_none());
        assert_eq!(storage.get_item("nom_user").unwrap(), None);
        assert!(store(&storage).current_session().is_none());
    }

    #[test]
    fn test_stored_null_means_logged_out() {
        let storage = Arc::new(MemoryLocalStorage::new());
        storage.set_item("nom_user", "null").unwrap();
        assert!(store(&storage).current_session().is_none());
    }
}
