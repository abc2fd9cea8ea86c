//! 屬性（元素分類）
//!
//! 屬性之間的相剋倍率是有方向的：`matchups` 只描述「此屬性攻擊對方屬性」
//! 的倍率，允許對自身定義倍率。

use crate::i18n::LocalizedText;
use crate::id::EntityId;
use crate::store::Entity;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 相剋倍率的慣例值：缺少條目視為 1.0（普通）
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// 屬性定義
///
/// `matchups` 的 key 是對方屬性 ID 的字串形式（wire 契約如此），
/// value 為浮點倍率（慣例 0–4，2.0 = 效果絕佳、0.5 = 效果不彰）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: EntityId,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub matchups: IndexMap<String, f64>,
}

impl Attribute {
    /// 攻擊指定屬性時的倍率（缺少條目為 1.0）
    pub fn multiplier_against(&self, target: EntityId) -> f64 {
        self.matchups
            .get(&target.to_string())
            .copied()
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }

    /// 設定對指定屬性的倍率
    pub fn set_matchup(&mut self, target: EntityId, multiplier: f64) {
        self.matchups.insert(target.to_string(), multiplier);
    }
}

/// 屬性的部分更新
///
/// 只有 `Some` 的欄位會被合併；`id` 不在此列，編輯永遠不會改變 ID。
#[derive(Debug, Clone, Default)]
pub struct AttributePatch {
    pub name: Option<LocalizedText>,
    pub matchups: Option<IndexMap<String, f64>>,
}

impl Entity for Attribute {
    type Patch = AttributePatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn into_patch(self) -> AttributePatch {
        AttributePatch {
            name: Some(self.name),
            matchups: Some(self.matchups),
        }
    }

    fn apply(&mut self, patch: AttributePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(matchups) = patch.matchups {
            self.matchups = matchups;
        }
    }

    fn collection_name() -> &'static str {
        "attributes"
    }
}
