//! レビューストア（レストラン ID → 新しい順のレビュー一覧）
//!
//! 追記のみ。編集・削除の操作は持たない。

use super::persisted::StorageRecord;
use crate::domain::review::{author_display_name, validate_text};
use crate::domain::{RestaurantId, Review, ReviewId, Stars, ValidationError};
use chrono::{DateTime, Utc};
use common::error::Error;
use common::ports::outbound::{Clock, IdGenerator};
use std::collections::BTreeMap;
use std::sync::Arc;

pub type ReviewMap = BTreeMap<RestaurantId, Vec<Review>>;

pub struct ReviewStore {
    reviews: ReviewMap,
    record: StorageRecord<ReviewMap>,
    clock: Arc<dyn Clock>,
    id_gen: Arc<dyn IdGenerator>,
}

impl ReviewStore {
    /// 保存済みのマップから復元する（無い・壊れている場合は空）
    ///
    /// ID が u64 の上限に達している記録は次の ID を採番できないので破損扱い。
    pub fn hydrate(
        record: StorageRecord<ReviewMap>,
        clock: Arc<dyn Clock>,
        id_gen: Arc<dyn IdGenerator>,
    ) -> Self {
        let reviews = record.load_checked_or(ReviewMap::new, |map| {
            match max_review_id(map) {
                Some(id) if id.get() == u64::MAX => {
                    Err(Error::invalid_data("review id at upper bound"))
                }
                _ => Ok(()),
            }
        });
        Self {
            reviews,
            record,
            clock,
            id_gen,
        }
    }

    /// レビューを先頭に追加して保存する
    ///
    /// 星の範囲と本文の長さはここでも検査する。セッションの有無は呼び出し側（NomNomApp）が検査する。
    pub fn add_review(
        &mut self,
        restaurant_id: &RestaurantId,
        stars: u8,
        text: &str,
        author: &str,
    ) -> Result<Review, ValidationError> {
        let stars = Stars::new(stars)?;
        validate_text(text)?;

        let now_ms = self.clock.now_ms();
        let created_at = i64::try_from(now_ms)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or_default();
        // ID は保存済みの最大値より必ず大きい
        let floor = self
            .max_id()
            .map_or(0, |id| id.get().saturating_add(1));
        let review = Review {
            id: ReviewId::new(self.id_gen.next_id().max(floor)),
            author: author_display_name(author),
            stars,
            text: text.to_string(),
            created_at,
        };
        self.reviews
            .entry(restaurant_id.clone())
            .or_default()
            .insert(0, review.clone());
        self.on_change();
        Ok(review)
    }

    /// 新しい順。未投稿のレストランは空スライス。
    pub fn reviews_for(&self, restaurant_id: &RestaurantId) -> &[Review] {
        self.reviews
            .get(restaurant_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn count_for(&self, restaurant_id: &RestaurantId) -> usize {
        self.reviews_for(restaurant_id).len()
    }

    /// 保存済みを含む最大のレビュー ID
    pub fn max_id(&self) -> Option<ReviewId> {
        max_review_id(&self.reviews)
    }

    pub fn all(&self) -> &ReviewMap {
        &self.reviews
    }

    fn on_change(&self) {
        self.record.persist(&self.reviews);
    }
}

fn max_review_id(map: &ReviewMap) -> Option<ReviewId> {
    map.values().flatten().map(|r| r.id).max()
}
