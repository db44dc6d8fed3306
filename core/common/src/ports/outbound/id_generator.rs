//! ID 生成 Outbound ポート
//!
//! usecase は IdGenerator を注入し、テストでは固定 ID を返す実装を渡せる。

/// 単調増加する数値 ID を生成する抽象（Outbound ポート）
///
/// 返す値は生成時刻（ミリ秒）由来で、同一インスタンス内では必ず前回より大きい。
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> u64;
}
