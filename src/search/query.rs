//! 検索クエリの正規化
//!
//! 前後の空白を除去し小文字化する。正規化後2文字未満は「検索なし」。

/// 検索を実行する最小文字数
pub const MIN_QUERY_LEN: usize = 2;

/// 正規化済み検索クエリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
}

impl Query {
    /// 入力文字列からクエリを構築
    ///
    /// trim後の文字数が `MIN_QUERY_LEN` 未満なら `None`
    /// （呼び出し側は結果パネルを隠す）。
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            return None;
        }
        Some(Self {
            text: trimmed.to_lowercase(),
        })
    }

    /// 正規化済みテキスト
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
