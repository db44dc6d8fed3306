//! ブックマークストア（変更のたびに集合全体を保存）

use super::persisted::StorageRecord;
use crate::domain::{BookmarkSet, RestaurantId};

pub struct BookmarkStore {
    set: BookmarkSet,
    record: StorageRecord<BookmarkSet>,
}

impl BookmarkStore {
    /// 保存済みの集合から復元する（無い・壊れている場合は空）
    pub fn hydrate(record: StorageRecord<BookmarkSet>) -> Self {
        let set = record.load_or(BookmarkSet::new);
        Self { set, record }
    }

    /// トグルして保存する。戻り値は操作後にブックマークされているか。
    pub fn toggle(&mut self, id: &RestaurantId) -> bool {
        let saved = self.set.toggle(id);
        self.on_change();
        saved
    }

    pub fn is_bookmarked(&self, id: &RestaurantId) -> bool {
        self.set.contains(id)
    }

    pub fn ids(&self) -> &BookmarkSet {
        &self.set
    }

    fn on_change(&self) {
        self.record.persist(&self.set);
    }
}
