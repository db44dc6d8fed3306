//! テスト用のレストラン生成ヘルパー

use super::{PriceTier, Restaurant, RestaurantId};

pub(crate) fn restaurant(id: &str, name: &str, area: &str, cuisine: &[&str]) -> Restaurant {
    Restaurant {
        id: RestaurantId::new(id),
        name: name.to_string(),
        area: area.to_string(),
        cuisine: cuisine.iter().map(|c| c.to_string()).collect(),
        price: PriceTier::Moderate,
        rating: 4.0,
        review_count: 0,
        tags: Vec::new(),
        image: String::new(),
        menu: Vec::new(),
        description: String::new(),
    }
}
