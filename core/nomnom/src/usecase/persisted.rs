//! ストア共通の永続化レコード（1 キー = 1 JSON 値）
//!
//! 読み込みで欠損・破損・ストレージ不調があれば既定値に落とし、warn を記録する。
//! 書き込み失敗はメモリ上の状態を残したまま error を記録し、呼び出し元へは伝えない。

use crate::ports::outbound::LocalStorage;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

/// ストレージキーの論理名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    User,
    Reviews,
    Bookmarks,
}

impl StorageKey {
    pub fn name(&self) -> &'static str {
        match self {
            StorageKey::User => "user",
            StorageKey::Reviews => "reviews",
            StorageKey::Bookmarks => "bookmarks",
        }
    }

    /// プレフィックス付きの実キー（例: nom_reviews）
    pub fn with_prefix(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.name())
    }
}

/// 型付きの永続化レコード
pub struct StorageRecord<T> {
    storage: Arc<dyn LocalStorage>,
    key: String,
    logger: Arc<dyn Log>,
    _value: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> StorageRecord<T> {
    pub fn new(storage: Arc<dyn LocalStorage>, key: impl Into<String>, logger: Arc<dyn Log>) -> Self {
        Self {
            storage,
            key: key.into(),
            logger,
            _value: PhantomData,
        }
    }

    /// 保存値を読む。無い・読めない・壊れている場合は `fallback()`。
    /// JSON の null も「無い」とみなす。
    pub fn load_or(&self, fallback: impl FnOnce() -> T) -> T {
        self.load_checked_or(fallback, |_| Ok(()))
    }

    /// `load_or` に加え、読めた値を `check` で検査する。不合格は破損と同じ扱い。
    pub fn load_checked_or(
        &self,
        fallback: impl FnOnce() -> T,
        check: impl FnOnce(&T) -> Result<(), Error>,
    ) -> T {
        let loaded = self.try_load().and_then(|value| match value {
            Some(v) => check(&v).map(|()| Some(v)),
            None => Ok(None),
        });
        match loaded {
            Ok(Some(value)) => value,
            Ok(None) => fallback(),
            Err(e) => {
                self.log(LogLevel::Warn, "stored record unreadable, using default", &e);
                fallback()
            }
        }
    }

    fn try_load(&self) -> Result<Option<T>, Error> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };
        let value: Option<T> = serde_json::from_str(&raw)?;
        Ok(value)
    }

    /// 保存する（エラーは呼び出し元へ返す）
    pub fn save(&self, value: &T) -> Result<(), Error> {
        let json = serde_json::to_string(value)?;
        self.storage.set_item(&self.key, &json)
    }

    /// 変更フック用: 保存し、失敗は記録して握りつぶす
    pub fn persist(&self, value: &T) {
        if let Err(e) = self.save(value) {
            self.log(LogLevel::Error, "failed to persist record", &e);
        }
    }

    /// レコードを削除する（失敗は記録して握りつぶす）
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(&self.key) {
            self.log(LogLevel::Error, "failed to remove record", &e);
        }
    }

    fn log(&self, level: LogLevel, message: &str, error: &Error) {
        let _ = self.logger.log(
            &LogRecord::new(level, message)
                .layer("usecase")
                .kind("persistence")
                .field("key", self.key.as_str())
                .field("error", error.to_string()),
        );
    }
}
