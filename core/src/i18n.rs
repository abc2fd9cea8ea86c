//! 多語言文字欄位
//!
//! 每個具名實體的文字欄位都是「語言代碼 -> 字串」的固定映射。
//! 只有 `ko` 是必填；其餘語言缺少時後備到 `ko`。

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// 支援的語言
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Language {
    /// 韓文（預設語言）
    #[default]
    Ko,
    En,
    Ja,
}

/// 多語言文字
///
/// 序列化格式固定為 `{"ko": "...", "en": "...", "ja": "..."}`；
/// 缺少的語言反序列化為空字串。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub ko: String,
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ja: String,
}

impl LocalizedText {
    /// 以預設語言建立文字
    pub fn korean(text: impl Into<String>) -> Self {
        Self {
            ko: text.into(),
            ..Self::default()
        }
    }

    /// 取得指定語言的文字
    ///
    /// # 後備機制
    /// 指定語言為空時後備到 `ko`
    pub fn get(&self, language: Language) -> &str {
        let text = match language {
            Language::Ko => &self.ko,
            Language::En => &self.en,
            Language::Ja => &self.ja,
        };
        if text.is_empty() {
            &self.ko
        } else {
            text
        }
    }

    /// 預設語言是否已填寫
    pub fn has_default_locale(&self) -> bool {
        !self.ko.trim().is_empty()
    }
}
