//! 商品カタログ
//!
//! 起動時に一度だけ読み込み、以降は読み取り専用。
//! 同梱カタログ（default.json）またはユーザー指定のJSONファイルから構築し、
//! 利用側にはコンストラクタ経由で注入する。

pub mod product;

pub use product::Product;

use crate::error::{RabError, Result};
use serde::Deserialize;
use std::path::Path;

/// 同梱カタログ
const DEFAULT_CATALOG: &str = include_str!("catalog/default.json");

/// 評価値の上限
const MAX_RATING: f64 = 5.0;

/// catalog.json のルート構造
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// 商品カタログ（ロード後は不変）
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// 同梱カタログを読み込む
    pub fn load_default() -> Result<Self> {
        Self::from_json(DEFAULT_CATALOG)
    }

    /// JSONファイルから読み込む
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        validate(&file.products)?;
        Ok(Self {
            products: file.products,
        })
    }

    /// カタログ順の商品一覧
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// IDで商品を検索
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// 同一カテゴリの別商品（カタログ順）
    pub fn related(&self, product: &Product) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .collect()
    }

    /// カタログなしで起動する場合の空カタログ
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
        }
    }
}

/// ロード時の整合性チェック
///
/// - rating は [0, 5] の範囲内
/// - id は一意
fn validate(products: &[Product]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();

    for product in products {
        if let Some(rating) = product.rating {
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(RabError::InvalidCatalog(format!(
                    "rating {} out of range [0, 5] for product '{}'",
                    rating, product.id
                )));
            }
        }

        if !seen.insert(product.id.as_str()) {
            return Err(RabError::InvalidCatalog(format!(
                "duplicate product id '{}'",
                product.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
impl Catalog {
    /// テスト用コンストラクタ（バリデーション済み前提）
    pub fn for_test(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
