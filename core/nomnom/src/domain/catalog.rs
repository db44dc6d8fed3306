//! カタログ（不変のレストラン一覧）
//!
//! ID の一意性を構築時に検査し、以後は読み取り専用。

use super::error::CatalogError;
use super::search;
use super::{Restaurant, RestaurantId};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// ID が重複していれば CatalogError::DuplicateId
    pub fn new(restaurants: Vec<Restaurant>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(restaurants.len());
        for r in &restaurants {
            if !seen.insert(&r.id) {
                return Err(CatalogError::DuplicateId(r.id.clone()));
            }
        }
        Ok(Self { restaurants })
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn get(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &RestaurantId) -> bool {
        self.get(id).is_some()
    }

    /// 検索フィルタ（search::filter）をこのカタログに適用する
    pub fn search(&self, query: &str) -> Vec<&Restaurant> {
        search::filter(&self.restaurants, query)
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
