//! 道具
//!
//! 類別與使用情境是封閉詞彙表，wire 上以 snake_case 字串表示。

use crate::i18n::LocalizedText;
use crate::id::EntityId;
use crate::store::Entity;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString};

/// 道具類別
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemCategory {
    #[default]
    Potion,
    Ball,
    Battle,
    Key,
}

/// 道具可使用的情境
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UsageContext {
    Battle,
    Field,
    #[default]
    Both,
}

/// 道具定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub category: ItemCategory,
    #[serde(default)]
    pub usage_context: UsageContext,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub effects: Vec<Value>,
}

impl Default for Item {
    /// 新增表單的草稿預設值
    fn default() -> Self {
        Self {
            id: 0,
            name: LocalizedText::default(),
            description: LocalizedText::default(),
            category: ItemCategory::Potion,
            usage_context: UsageContext::Both,
            price: 100,
            effects: Vec::new(),
        }
    }
}

/// 道具的部分更新
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub category: Option<ItemCategory>,
    pub usage_context: Option<UsageContext>,
    pub price: Option<i64>,
    pub effects: Option<Vec<Value>>,
}

impl Entity for Item {
    type Patch = ItemPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn into_patch(self) -> ItemPatch {
        ItemPatch {
            name: Some(self.name),
            description: Some(self.description),
            category: Some(self.category),
            usage_context: Some(self.usage_context),
            price: Some(self.price),
            effects: Some(self.effects),
        }
    }

    fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(usage_context) = patch.usage_context {
            self.usage_context = usage_context;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(effects) = patch.effects {
            self.effects = effects;
        }
    }

    fn collection_name() -> &'static str {
        "items"
    }
}
