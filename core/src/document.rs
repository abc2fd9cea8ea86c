//! 遊戲資料文件（canonical JSON 契約）
//!
//! 欄位名稱是契約而非實作細節：匯出/匯入必須使用完全相同的
//! snake_case key（`monmus_list`、`map_nodes` 等）。
//! 缺少的頂層欄位一律以空值補齊，`load` 不因缺少選填區段而失敗。

use crate::attribute::Attribute;
use crate::i18n::LocalizedText;
use crate::item::Item;
use crate::monmus::Monmus;
use crate::skill::Skill;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 目前的文件版本
pub const DOCUMENT_VERSION: &str = "1.0.0";

/// 整份遊戲資料
///
/// `map_nodes`、`events`、`npcs`、`quests` 沒有對應的編輯器，
/// 以不透明 JSON 值保存並原樣往返（round-trip-only）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub game_title: LocalizedText,
    #[serde(default)]
    pub game_description: LocalizedText,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub monmus_list: Vec<Monmus>,
    #[serde(default)]
    pub map_nodes: Vec<Value>,
    #[serde(default)]
    pub events: Vec<Value>,
    #[serde(default)]
    pub npcs: Vec<Value>,
    #[serde(default)]
    pub quests: Vec<Value>,
    #[serde(default)]
    pub settings: IndexMap<String, Value>,
}

fn default_version() -> String {
    DOCUMENT_VERSION.to_string()
}

impl Default for GameData {
    fn default() -> Self {
        Self {
            version: default_version(),
            game_title: LocalizedText::default(),
            game_description: LocalizedText::default(),
            author: String::new(),
            attributes: Vec::new(),
            skills: Vec::new(),
            items: Vec::new(),
            monmus_list: Vec::new(),
            map_nodes: Vec::new(),
            events: Vec::new(),
            npcs: Vec::new(),
            quests: Vec::new(),
            settings: IndexMap::new(),
        }
    }
}

impl GameData {
    /// 從 JSON 字串解析文件
    ///
    /// 只有在輸入不是合法文件（例如根節點不是 JSON 物件）時失敗。
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// 序列化為 pretty-printed JSON（匯出下載用的格式）
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
