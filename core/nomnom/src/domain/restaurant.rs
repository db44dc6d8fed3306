//! レストランのドメイン型（カタログから供給される不変レコード）

use serde::{Deserialize, Serialize};
use std::fmt;

/// レストラン ID（カタログ内で一意）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(String);

impl RestaurantId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RestaurantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// 価格帯。JSON では "$" / "$$" / "$$$"。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Cheap,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Expensive,
}

impl PriceTier {
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceTier::Cheap => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Expensive => "$$$",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// メニュー 1 品（価格は通貨単位の整数）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: u32,
}

/// レストラン 1 件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub area: String,
    #[serde(default)]
    pub cuisine: Vec<String>,
    pub price: PriceTier,
    /// 平均評価
    pub rating: f32,
    /// カタログ側のレビュー件数（ユーザー投稿分は含まない）
    #[serde(rename = "reviews")]
    pub review_count: u32,
    /// 設備・雰囲気タグ（"Kid friendly" など）
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "img")]
    pub image: String,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    #[serde(default)]
    pub description: String,
}
