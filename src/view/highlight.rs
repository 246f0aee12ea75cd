//! 検索語ハイライト
//!
//! テキストをハイライト区間と通常区間の列に分割する。
//! 元テキストの大文字小文字はそのまま保持される。

use regex::Regex;
use serde::Serialize;

/// テキスト区間
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// 検索語の全出現箇所をハイライト区間として切り出す
///
/// case-insensitive にマッチし、同じ (text, term) に対して常に同じ結果を返す。
pub fn highlight(text: &str, term: &str) -> Vec<Segment> {
    if term.is_empty() {
        return vec![Segment::plain(text)];
    }

    let pattern = format!("(?i){}", regex::escape(term));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return vec![Segment::plain(text)],
    };

    let mut segments = Vec::new();
    let mut last = 0;

    for m in re.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::plain(&text[last..m.start()]));
        }
        segments.push(Segment::marked(m.as_str()));
        last = m.end();
    }

    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }

    if segments.is_empty() {
        segments.push(Segment::plain(text));
    }

    segments
}

#[cfg(test)]
#[path = "highlight_test.rs"]
mod tests;
