//! 技能
//!
//! `attribute_type_id` 是指向屬性的外鍵，但不做驗證：屬性被刪除後
//! 技能允許留下懸空參照，讀取端視為「未知屬性」而非錯誤。

use crate::i18n::LocalizedText;
use crate::id::EntityId;
use crate::store::Entity;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 技能定義
///
/// `effects` 的元素形狀尚未定案，保持為不透明 JSON 值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: EntityId,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default = "default_attribute_type_id")]
    pub attribute_type_id: EntityId,
    /// 威力（非負）
    #[serde(default)]
    pub power: u32,
    /// 命中率（慣例 0–100）
    #[serde(default = "default_accuracy")]
    pub accuracy: i32,
    /// 使用次數（正整數）
    #[serde(default = "default_pp")]
    pub pp: u32,
    #[serde(default)]
    pub effects: Vec<Value>,
}

fn default_attribute_type_id() -> EntityId {
    1
}

fn default_accuracy() -> i32 {
    100
}

fn default_pp() -> u32 {
    10
}

impl Default for Skill {
    /// 新增表單的草稿預設值
    fn default() -> Self {
        Self {
            id: 0,
            name: LocalizedText::default(),
            description: LocalizedText::default(),
            attribute_type_id: default_attribute_type_id(),
            power: 50,
            accuracy: default_accuracy(),
            pp: default_pp(),
            effects: Vec::new(),
        }
    }
}

/// 技能的部分更新
#[derive(Debug, Clone, Default)]
pub struct SkillPatch {
    pub name: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub attribute_type_id: Option<EntityId>,
    pub power: Option<u32>,
    pub accuracy: Option<i32>,
    pub pp: Option<u32>,
    pub effects: Option<Vec<Value>>,
}

impl Entity for Skill {
    type Patch = SkillPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn into_patch(self) -> SkillPatch {
        SkillPatch {
            name: Some(self.name),
            description: Some(self.description),
            attribute_type_id: Some(self.attribute_type_id),
            power: Some(self.power),
            accuracy: Some(self.accuracy),
            pp: Some(self.pp),
            effects: Some(self.effects),
        }
    }

    fn apply(&mut self, patch: SkillPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(attribute_type_id) = patch.attribute_type_id {
            self.attribute_type_id = attribute_type_id;
        }
        if let Some(power) = patch.power {
            self.power = power;
        }
        if let Some(accuracy) = patch.accuracy {
            self.accuracy = accuracy;
        }
        if let Some(pp) = patch.pp {
            self.pp = pp;
        }
        if let Some(effects) = patch.effects {
            self.effects = effects;
        }
    }

    fn collection_name() -> &'static str {
        "skills"
    }
}
