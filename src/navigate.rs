//! レビューURL解決
//!
//! クリーンURL → `.html` 付きURL → 強制クリーンURL の順で解決する。
//! 存在確認は HEAD リクエストで行い、プローブ失敗は到達不能として扱う。

use crate::config::HttpConfig;
use std::future::Future;
use std::pin::Pin;

/// URL存在確認プローブ
pub trait UrlProbe: Send + Sync {
    /// HEAD リクエストが成功ステータスを返すか
    fn head_ok<'a>(&'a self, url: &'a str) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>>;
}

/// reqwest による実プローブ
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(config: &HttpConfig) -> Self {
        Self {
            client: config.build_client(),
        }
    }
}

impl UrlProbe for HttpProbe {
    fn head_ok<'a>(&'a self, url: &'a str) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async move {
            match self.client.head(url).send().await {
                Ok(response) => response.status().is_success(),
                Err(_) => false,
            }
        })
    }
}

/// URL解決の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// クリーンURLがそのまま使える
    Clean(String),
    /// `.html` 付きURLへフォールバック
    HtmlFallback(String),
    /// どちらも確認できず、クリーンURLを強制使用
    Forced(String),
}

impl Resolution {
    /// 遷移先URL
    pub fn url(&self) -> &str {
        match self {
            Resolution::Clean(url) => url,
            Resolution::HtmlFallback(url) => url,
            Resolution::Forced(url) => url,
        }
    }
}

/// レビューページのURLを解決する
pub async fn resolve_review_url(base_url: &str, path: &str, probe: &dyn UrlProbe) -> Resolution {
    let clean = join_url(base_url, path);

    if probe.head_ok(&clean).await {
        return Resolution::Clean(clean);
    }

    let html = format!("{clean}.html");
    if probe.head_ok(&html).await {
        return Resolution::HtmlFallback(html);
    }

    Resolution::Forced(clean)
}

/// ベースURLとパスを `/` 1つで連結
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
#[path = "navigate_test.rs"]
mod tests;
