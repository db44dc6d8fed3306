//! NomNom 共通ライブラリ
//!
//! エラー型・実行時ディレクトリ・外界を抽象化するポートと標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（ディレクトリ）
pub mod domain;

/// Outbound ポート（trait）
pub mod ports;

/// ポートの標準実装
pub mod adapter;
