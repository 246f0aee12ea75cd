//! 部分一致マッチャ
//!
//! 正規化済みクエリで商品を絞り込む。
//! name / description / category / keywords のいずれかに
//! case-insensitive な部分一致があれば採用（OR結合）。
//! 結果はカタログ順を保持し、関連度ソートは行わない。

use super::query::Query;
use crate::catalog::{Catalog, Product};

/// カタログを検索してマッチした商品をカタログ順で返す
pub fn search<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|p| matches(p, query))
        .collect()
}

fn matches(product: &Product, query: &Query) -> bool {
    let term = query.as_str();
    product.name.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
        || product.category.to_lowercase().contains(term)
        || product
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(term))
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;

#[cfg(test)]
#[path = "matcher_proptests.rs"]
mod proptests;
