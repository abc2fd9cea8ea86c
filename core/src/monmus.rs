//! Monmus（可收服的生物）
//!
//! 一隻 Monmus 最多帶兩個屬性；這個上限屬於資料模型本身，
//! 不是表單層的防呆。

use crate::error::ValidationError;
use crate::i18n::LocalizedText;
use crate::id::EntityId;
use crate::store::Entity;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 一隻 Monmus 可持有的屬性數量上限
pub const MAX_ATTRIBUTE_TYPES: usize = 2;

/// 六項基礎數值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(default = "default_hp")]
    pub hp: u32,
    #[serde(default = "default_stat")]
    pub attack: u32,
    #[serde(default = "default_stat")]
    pub defense: u32,
    #[serde(default = "default_stat")]
    pub sp_attack: u32,
    #[serde(default = "default_stat")]
    pub sp_defense: u32,
    #[serde(default = "default_stat")]
    pub speed: u32,
}

fn default_hp() -> u32 {
    100
}

fn default_stat() -> u32 {
    50
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            hp: default_hp(),
            attack: default_stat(),
            defense: default_stat(),
            sp_attack: default_stat(),
            sp_defense: default_stat(),
            speed: default_stat(),
        }
    }
}

/// Monmus 定義
///
/// `learnable_skills`、`evolution_conditions`、`abilities` 的元素形狀
/// 尚未定案，保持為不透明 JSON 值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monmus {
    pub id: EntityId,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    /// 圖鑑編號（僅供顯示排序，不要求唯一）
    #[serde(default = "default_pokedex_number")]
    pub pokedex_number: u32,
    /// 屬性 ID 列表（0–2 個，不重複）
    #[serde(default)]
    pub attribute_types: Vec<EntityId>,
    #[serde(default)]
    pub base_stats: BaseStats,
    /// 身高（m）
    #[serde(default = "default_height")]
    pub height: f64,
    /// 體重（kg）
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default = "default_exp_yield")]
    pub exp_yield: u32,
    #[serde(default = "default_catch_rate")]
    pub catch_rate: u32,
    #[serde(default)]
    pub learnable_skills: Vec<Value>,
    #[serde(default)]
    pub evolution_conditions: Vec<Value>,
    #[serde(default)]
    pub abilities: Vec<Value>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_pokedex_number() -> u32 {
    1
}

fn default_height() -> f64 {
    1.0
}

fn default_weight() -> f64 {
    10.0
}

fn default_exp_yield() -> u32 {
    100
}

fn default_catch_rate() -> u32 {
    45
}

impl Default for Monmus {
    /// 新增表單的草稿預設值
    fn default() -> Self {
        Self {
            id: 0,
            name: LocalizedText::default(),
            description: LocalizedText::default(),
            pokedex_number: default_pokedex_number(),
            attribute_types: Vec::new(),
            base_stats: BaseStats::default(),
            height: default_height(),
            weight: default_weight(),
            exp_yield: default_exp_yield(),
            catch_rate: default_catch_rate(),
            learnable_skills: Vec::new(),
            evolution_conditions: Vec::new(),
            abilities: Vec::new(),
            image_url: None,
        }
    }
}

impl Monmus {
    /// 切換一個屬性：已持有則移除，未持有則加入
    ///
    /// 已持有兩個屬性時拒絕加入第三個，草稿保持原狀。
    pub fn toggle_attribute_type(
        &mut self,
        attribute_id: EntityId,
    ) -> Result<(), ValidationError> {
        if let Some(position) = self
            .attribute_types
            .iter()
            .position(|&existing| existing == attribute_id)
        {
            self.attribute_types.remove(position);
            return Ok(());
        }

        if self.attribute_types.len() >= MAX_ATTRIBUTE_TYPES {
            return Err(ValidationError::TooManyAttributeTypes {
                max: MAX_ATTRIBUTE_TYPES,
            });
        }

        self.attribute_types.push(attribute_id);
        Ok(())
    }
}

/// Monmus 的部分更新
///
/// `image_url` 是雙層 Option：`Some(None)` 表示清除圖片。
#[derive(Debug, Clone, Default)]
pub struct MonmusPatch {
    pub name: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub pokedex_number: Option<u32>,
    pub attribute_types: Option<Vec<EntityId>>,
    pub base_stats: Option<BaseStats>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub exp_yield: Option<u32>,
    pub catch_rate: Option<u32>,
    pub learnable_skills: Option<Vec<Value>>,
    pub evolution_conditions: Option<Vec<Value>>,
    pub abilities: Option<Vec<Value>>,
    pub image_url: Option<Option<String>>,
}

impl Entity for Monmus {
    type Patch = MonmusPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn into_patch(self) -> MonmusPatch {
        MonmusPatch {
            name: Some(self.name),
            description: Some(self.description),
            pokedex_number: Some(self.pokedex_number),
            attribute_types: Some(self.attribute_types),
            base_stats: Some(self.base_stats),
            height: Some(self.height),
            weight: Some(self.weight),
            exp_yield: Some(self.exp_yield),
            catch_rate: Some(self.catch_rate),
            learnable_skills: Some(self.learnable_skills),
            evolution_conditions: Some(self.evolution_conditions),
            abilities: Some(self.abilities),
            image_url: Some(self.image_url),
        }
    }

    fn apply(&mut self, patch: MonmusPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(pokedex_number) = patch.pokedex_number {
            self.pokedex_number = pokedex_number;
        }
        if let Some(attribute_types) = patch.attribute_types {
            self.attribute_types = attribute_types;
        }
        if let Some(base_stats) = patch.base_stats {
            self.base_stats = base_stats;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(exp_yield) = patch.exp_yield {
            self.exp_yield = exp_yield;
        }
        if let Some(catch_rate) = patch.catch_rate {
            self.catch_rate = catch_rate;
        }
        if let Some(learnable_skills) = patch.learnable_skills {
            self.learnable_skills = learnable_skills;
        }
        if let Some(evolution_conditions) = patch.evolution_conditions {
            self.evolution_conditions = evolution_conditions;
        }
        if let Some(abilities) = patch.abilities {
            self.abilities = abilities;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }

    fn collection_name() -> &'static str {
        "monmus_list"
    }
}
