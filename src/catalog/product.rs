//! 商品レコード

use serde::{Deserialize, Serialize};

/// 「準備中」を表すURLセンチネル
pub const COMING_SOON_URL: &str = "#";

/// 商品レコード（ロード後は不変）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// 一意なスラグ
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// 0〜5の評価値。準備中の商品は省略
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// レビューページのパス。`"#"` は準備中
    pub url: String,
    /// 表示用グリフ識別子（検索対象外）
    pub icon: String,
    /// 検索専用のフリーテキスト（順序は意味を持たない）
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Product {
    /// レビューページが準備中かどうか
    pub fn is_coming_soon(&self) -> bool {
        self.url == COMING_SOON_URL
    }
}
