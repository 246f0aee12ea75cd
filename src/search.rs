//! 検索パイプライン
//!
//! クエリ正規化と部分一致マッチング。すべて同期・純粋関数。

pub mod matcher;
pub mod query;

pub use matcher::search;
pub use query::{Query, MIN_QUERY_LEN};
