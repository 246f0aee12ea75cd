use crate::navigate::Resolution;
use owo_colors::OwoColorize;

/// CLI通知メッセージ
pub struct Notice {
    pub prefix: String,
    pub message: String,
}

impl Notice {
    /// レビューページ準備中のお知らせ
    pub fn coming_soon(name: &str) -> Self {
        Self {
            prefix: "•".yellow().to_string(),
            message: format!("{} review is coming soon!", name),
        }
    }

    /// URL解決結果の表示
    pub fn resolved(resolution: &Resolution) -> Self {
        let url = resolution.url();
        match resolution {
            Resolution::Clean(_) => Self {
                prefix: "✓".green().to_string(),
                message: url.to_string(),
            },
            Resolution::HtmlFallback(_) => Self {
                prefix: "✓".green().to_string(),
                message: format!("{url} (.html fallback)"),
            },
            Resolution::Forced(_) => Self {
                prefix: "✗".red().to_string(),
                message: format!("{url} (unreachable, forcing clean URL)"),
            },
        }
    }

    pub fn print(&self) {
        println!("{} {}", self.prefix, self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coming_soon_notice_names_the_product() {
        let notice = Notice::coming_soon("Spirulina Tablets");
        assert!(notice.message.contains("Spirulina Tablets review is coming soon!"));
    }

    #[test]
    fn forced_resolution_is_flagged() {
        let notice = Notice::resolved(&Resolution::Forced("https://x.example/r".to_string()));
        assert!(notice.message.contains("forcing clean URL"));
    }
}
