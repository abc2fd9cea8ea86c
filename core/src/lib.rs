//! Monmus 文字 RPG 遊戲資料核心函式庫
//!
//! 此函式庫實作編輯器所依賴的遊戲資料模型，包括：
//! - 多語言文字欄位（ko / en / ja）
//! - 屬性、技能、道具、Monmus 等實體定義
//! - 遊戲資料文件（canonical JSON 契約）與整份匯入/匯出
//! - 集合存放與 ID 政策
//! - 參照完整性檢查（懸空參照僅產生警告）

pub mod attribute;
pub mod document;
pub mod error;
pub mod i18n;
pub mod id;
pub mod item;
pub mod monmus;
pub mod skill;
pub mod store;
pub mod validation;

// 重新導出常用類型
pub use attribute::{Attribute, AttributePatch};
pub use document::GameData;
pub use error::{Result, StoreError, ValidationError};
pub use i18n::{Language, LocalizedText};
pub use id::{next_id, CollectionKind, EntityId};
pub use item::{Item, ItemCategory, ItemPatch, UsageContext};
pub use monmus::{BaseStats, Monmus, MonmusPatch, MAX_ATTRIBUTE_TYPES};
pub use skill::{Skill, SkillPatch};
pub use store::{Collection, Entity, ExtraCollection, GameDataStore};
pub use validation::{validate_document, ValidationReport};
