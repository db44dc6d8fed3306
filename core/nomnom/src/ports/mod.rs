//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（ストレージ・カタログ・設定）に依頼するための trait

pub mod inbound;
pub mod outbound;
