//! レビューのドメイン型と検証
//!
//! 投稿後は編集・削除しない。ID は作成時刻由来で単調増加。

use super::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 本文の最小文字数（前後空白を除いた文字数）
pub const MIN_REVIEW_TEXT_LEN: usize = 5;

/// 作者名が空のときの表示名
pub const GUEST_NAME: &str = "Guest";

/// レビュー ID（作成時刻ミリ秒由来）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(u64);

impl ReviewId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// 星の数（1〜5）。範囲外の値は構築もデシリアライズもできない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stars(u8);

impl Stars {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(ValidationError::StarsOutOfRange(stars))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Stars {
    type Error = ValidationError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stars> for u8 {
    fn from(s: Stars) -> Self {
        s.0
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 本文が最小文字数を満たすか検査する
pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    let len = text.trim().chars().count();
    if len < MIN_REVIEW_TEXT_LEN {
        return Err(ValidationError::TextTooShort {
            len,
            min: MIN_REVIEW_TEXT_LEN,
        });
    }
    Ok(())
}

/// 作者の表示名（空白のみなら Guest）
pub fn author_display_name(name: &str) -> String {
    if name.trim().is_empty() {
        GUEST_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// レビュー 1 件。JSON のキーは `id` / `user` / `stars` / `text` / `date`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    #[serde(rename = "user")]
    pub author: String,
    pub stars: Stars,
    pub text: String,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}
