//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.
//! Templates use `{name}` placeholders filled by [`t_args`].

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en-US", alias = "en")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh-CN", alias = "zh")]
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Field shape checks
    map.insert("form-invalid-email", ("Invalid email address", "邮箱地址无效"));
    map.insert("form-not-number", ("Must be a number", "必须是数字"));
    map.insert("form-invalid-url", ("Invalid URL", "URL 无效"));
    map.insert("form-invalid-date", ("Invalid date", "日期无效"));
    map.insert("form-invalid-boolean", ("Must be true or false", "必须是布尔值"));
    map.insert("form-invalid-value", ("Invalid value", "值无效"));

    // Bounds
    map.insert("form-min-number", ("Must be at least {min}", "不能小于 {min}"));
    map.insert("form-max-number", ("Must be at most {max}", "不能大于 {max}"));
    map.insert("form-min-length", ("Must be at least {min} characters", "至少需要 {min} 个字符"));
    map.insert("form-max-length", ("Must be at most {max} characters", "最多 {max} 个字符"));
    map.insert("form-min-items", ("Select at least {min}", "至少选择 {min} 项"));
    map.insert("form-max-items", ("Select at most {max}", "最多选择 {max} 项"));

    // Pattern / custom / required
    map.insert("form-invalid-format", ("Invalid format", "格式无效"));
    map.insert("form-validation-failed", ("Validation failed", "校验失败"));
    map.insert("form-field-required", ("This field is required", "此项为必填项"));
    map.insert("form-named-required", ("{field} is required", "{field}为必填项"));

    // Form chrome
    map.insert("form-submit", ("Submit", "提交"));
    map.insert("form-submitting", ("Submitting...", "提交中..."));
    map.insert("form-illustration", ("Form illustration", "表单插图"));
    map.insert("form-file-selected", ("File selected", "已选择文件"));

    // Sections
    map.insert("overview-key-highlights", ("Key Highlights", "核心亮点"));
    map.insert("overview-media-alt", ("Project overview", "项目概览"));
    map.insert(
        "overview-video-unsupported",
        ("Your browser does not support the video tag.", "您的浏览器不支持视频播放。"),
    );

    map.insert("info-image-alt", ("Section image", "栏目图片"));

    // Navigation
    map.insert("nav-logo-alt", ("Logo", "标志"));
    map.insert("nav-toggle-menu", ("Toggle menu", "切换菜单"));
    map.insert("footer-logo-alt", ("Logo", "标志"));

    // Carousel
    map.insert("carousel-fullscreen", ("View in fullscreen", "全屏查看"));
    map.insert("carousel-close-fullscreen", ("Close fullscreen", "退出全屏"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> String {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => en.to_string(),
            Locale::ZhCN => zh.to_string(),
        }
    } else {
        // Fallback: return the key itself
        key.to_string()
    }
}

/// Translate a key and fill its `{name}` placeholders
pub fn t_args(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(locale, key), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}
