//! HTTP設定とアプリケーション設定
//!
//! 設定ファイル（~/.rab/config.toml）は任意。
//! 優先順位: CLIフラグ > 環境変数 > 設定ファイル > デフォルト

use crate::error::{RabError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// レビューサイトのデフォルトURL
pub const DEFAULT_BASE_URL: &str = "https://reviewandbuy.site";

/// ベースURL上書き用の環境変数
pub const BASE_URL_ENV: &str = "RAB_BASE_URL";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(10)),
            user_agent: "rab-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// config.toml のルート構造
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    base_url: Option<String>,
    catalog: Option<PathBuf>,
}

/// アプリケーション設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// レビューサイトのベースURL
    pub base_url: String,
    /// カタログファイルのパス（未指定なら同梱カタログ）
    pub catalog: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            catalog: None,
        }
    }
}

impl AppConfig {
    /// デフォルトパス（~/.rab/config.toml）から読み込む
    pub fn load() -> Result<Self> {
        let home = std::env::var("HOME")
            .map_err(|_| RabError::Config("HOME environment variable not set".to_string()))?;
        let path = PathBuf::from(home).join(".rab").join("config.toml");
        Self::load_from(&path)
    }

    /// 指定パスから読み込む（ファイルがなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<ConfigFile>(&content)
                .map_err(|e| RabError::Config(format!("Failed to parse {}: {}", path.display(), e)))?
        } else {
            ConfigFile::default()
        };

        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            base_url,
            catalog: file.catalog,
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
