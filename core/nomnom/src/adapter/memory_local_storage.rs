//! メモリ上のローカルストレージ（テスト・一時実行用）

use crate::ports::outbound::LocalStorage;
use common::error::Error;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryLocalStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, Error> {
        self.items
            .lock()
            .map_err(|_| Error::system("local storage lock poisoned"))
    }
}

impl LocalStorage for MemoryLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        self.lock()?.remove(key);
        Ok(())
    }
}
