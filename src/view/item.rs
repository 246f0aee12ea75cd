//! 検索結果の表示レコード

use super::highlight::{highlight, Segment};
use super::stars::StarLine;
use crate::catalog::Product;
use serde::Serialize;

/// 1件分の検索結果
///
/// 描画後は破棄される一時レコード。activation時の遷移先情報
/// （url / 準備中フラグ）も保持する。
#[derive(Debug, Clone, Serialize)]
pub struct ResultItem {
    pub id: String,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub coming_soon: bool,
    pub name_segments: Vec<Segment>,
    pub description_segments: Vec<Segment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<StarLine>,
}

impl ResultItem {
    /// 商品と検索語から表示レコードを構築
    pub fn build(product: &Product, term: &str) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            url: product.url.clone(),
            icon: product.icon.clone(),
            coming_soon: product.is_coming_soon(),
            name_segments: highlight(&product.name, term),
            description_segments: highlight(&product.description, term),
            rating: product.rating,
            stars: product.rating.map(StarLine::from_rating),
        }
    }
}

/// マッチ一覧を表示レコード列へ変換（順序はそのまま）
pub fn build_items(products: &[&Product], term: &str) -> Vec<ResultItem> {
    products.iter().map(|p| ResultItem::build(p, term)).collect()
}

/// グリフ識別子を端末用の1文字に対応づける
pub fn icon_glyph(icon: &str) -> char {
    match icon {
        "fas fa-leaf" | "fas fa-seedling" => '❀',
        "fas fa-brain" => '✺',
        "fas fa-heartbeat" | "fas fa-heart" => '♥',
        "fas fa-bolt" => '↯',
        "fas fa-fire" => '♨',
        "fas fa-moon" => '☾',
        "fas fa-coffee" => '☕',
        "fas fa-tooth" => '✚',
        _ => '✦',
    }
}

#[cfg(test)]
#[path = "item_test.rs"]
mod tests;
