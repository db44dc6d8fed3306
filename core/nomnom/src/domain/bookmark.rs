//! ブックマーク集合
//!
//! JSON ではレストラン ID の配列。重複は読み込み時に畳む。

use super::RestaurantId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkSet(BTreeSet<RestaurantId>);

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 含まれていれば外し、なければ加える。戻り値は操作後に含まれているか。
    pub fn toggle(&mut self, id: &RestaurantId) -> bool {
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &RestaurantId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RestaurantId> for BookmarkSet {
    fn from_iter<T: IntoIterator<Item = RestaurantId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut set: BookmarkSet = [RestaurantId::new("r2"), RestaurantId::new("r7")].into_iter().collect();
        let before = set.clone();
        for id in ["r1", "r2", "r7", "unknown"] {
            let id = RestaurantId::new(id);
            let first = set.toggle(&id);
            let second = set.toggle(&id);
            assert_ne!(first, second);
            assert_eq!(set, before);
        }
    }

    #[test]
    fn test_serializes_as_list() {
        let set: BookmarkSet = [RestaurantId::new("r3"), RestaurantId::new("r1")].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["r1","r3"]"#);
    }

    #[test]
    fn test_duplicates_collapse_on_load() {
        let set: BookmarkSet = serde_json::from_str(r#"["r1","r1","r2"]"#).unwrap();
        assert_eq!(set.len(), 2);
    }
}
