//! NomNom: レストラン検索・ブックマーク・レビューの状態と永続化
//!
//! カタログは不変の入力。ブックマーク・レビュー・セッションの 3 ストアは
//! 変更のたびにローカルストレージへ保存し、起動時に復元する。

pub mod adapter;
pub mod domain;
pub mod ports;
pub mod usecase;
pub mod wiring;

#[cfg(test)]
mod tests;
