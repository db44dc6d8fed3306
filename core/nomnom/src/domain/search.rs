//! 検索フィルタ（純粋関数）
//!
//! クエリを trim + 小文字化し、名前・エリア・料理タグ（空白区切りで連結）の
//! いずれかに部分一致するレストランを元の順序のまま返す。

use super::Restaurant;

/// クエリの正規化（前後空白の除去と小文字化）
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// `restaurants` のうちクエリに一致するものを順序を保って返す。空クエリは全件。
pub fn filter<'a>(restaurants: &'a [Restaurant], query: &str) -> Vec<&'a Restaurant> {
    let q = normalize_query(query);
    if q.is_empty() {
        return restaurants.iter().collect();
    }
    restaurants.iter().filter(|r| matches(r, &q)).collect()
}

/// 正規化済みクエリ `q` が一致するか
fn matches(r: &Restaurant, q: &str) -> bool {
    r.name.to_lowercase().contains(q)
        || r.area.to_lowercase().contains(q)
        || r.cuisine.join(" ").to_lowercase().contains(q)
}
