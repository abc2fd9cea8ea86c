//! 遊戲資料存放
//!
//! `GameDataStore` 是可明確建構的聚合體（非全域單例），持有整份
//! 文件的記憶體狀態。單執行緒、單一寫入者：所有變更由 UI 動作
//! 同步觸發，資料層不需要鎖。

use crate::attribute::Attribute;
use crate::document::{GameData, DOCUMENT_VERSION};
use crate::error::{Result, StoreError};
use crate::i18n::LocalizedText;
use crate::id::EntityId;
use crate::item::Item;
use crate::monmus::Monmus;
use crate::skill::Skill;
use indexmap::IndexMap;
use serde_json::Value;

/// 可存放於集合中的實體
///
/// `Patch` 是型別化的部分更新：只有 `Some` 的欄位會被合併，
/// 未知欄位在型別上就無法表達（取代原始的 object-spread 合併）。
pub trait Entity: Clone + std::fmt::Debug {
    type Patch;

    fn id(&self) -> EntityId;

    /// 指派 ID（僅在新增時由呼叫端使用一次；編輯永遠不會重新指派）
    fn assign_id(&mut self, id: EntityId);

    /// 將整筆記錄轉為「所有欄位皆出現」的 patch
    fn into_patch(self) -> Self::Patch;

    /// 淺層合併 patch；`id` 不受影響
    fn apply(&mut self, patch: Self::Patch);

    /// wire 契約中此集合的 key（`"attributes"`、`"monmus_list"` 等）
    fn collection_name() -> &'static str;
}

/// 依插入順序存放的實體集合
///
/// 插入順序 = 顯示順序 = 匯出順序。
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    records: Vec<T>,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Entity> Collection<T> {
    /// 新增一筆記錄（ID 必須已由分配器取得）
    ///
    /// ID 重複時拒絕而非靜默覆蓋。
    pub fn add(&mut self, record: T) -> Result<()> {
        if self.contains(record.id()) {
            return Err(StoreError::DuplicateId {
                collection: T::collection_name(),
                id: record.id().to_string(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// 以 patch 更新指定記錄
    ///
    /// 找不到目標是錯誤（沒有可合併的對象）。
    pub fn update(&mut self, id: EntityId, patch: T::Patch) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(StoreError::NotFound {
                collection: T::collection_name(),
                id: id.to_string(),
            })?;
        record.apply(patch);
        Ok(())
    }

    /// 刪除指定記錄；不存在時為冪等的 no-op
    ///
    /// 不做串聯刪除：指向被刪記錄的外鍵成為懸空參照，由讀取端容忍。
    pub fn delete(&mut self, id: EntityId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        self.records.len() != before
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// 完整的有序集合（唯讀；修改僅能透過上述操作）
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.records.iter().map(|record| record.id())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }
}

/// 無編輯器的保留集合（`map_nodes`、`events`、`npcs`、`quests`）
///
/// 記錄是不透明 JSON 值，以其 `"id"` 欄位（JSON 等值比較）為 key——
/// 地圖/事件節點慣用字串 ID、NPC/任務慣用整數 ID。
/// 操作契約與 `Collection` 相同。
#[derive(Debug, Clone)]
pub struct ExtraCollection {
    name: &'static str,
    records: Vec<Value>,
}

impl ExtraCollection {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            records: Vec::new(),
        }
    }

    fn record_id(record: &Value) -> &Value {
        record.get("id").unwrap_or(&Value::Null)
    }

    /// 新增一筆記錄；帶有 `"id"` 的記錄不得與既有 ID 重複
    pub fn add(&mut self, record: Value) -> Result<()> {
        let id = Self::record_id(&record);
        if !id.is_null() && self.get(id).is_some() {
            return Err(StoreError::DuplicateId {
                collection: self.name,
                id: id.to_string(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// 淺層合併 patch 物件的欄位（`"id"` 除外）
    pub fn update(&mut self, id: &Value, patch: Value) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|record| Self::record_id(record) == id)
            .ok_or(StoreError::NotFound {
                collection: self.name,
                id: id.to_string(),
            })?;

        if let (Some(target), Value::Object(fields)) = (record.as_object_mut(), patch) {
            for (key, value) in fields {
                if key != "id" {
                    target.insert(key, value);
                }
            }
        }
        Ok(())
    }

    /// 刪除指定記錄；不存在時為冪等的 no-op
    pub fn delete(&mut self, id: &Value) -> bool {
        let before = self.records.len();
        self.records.retain(|record| Self::record_id(record) != id);
        self.records.len() != before
    }

    pub fn get(&self, id: &Value) -> Option<&Value> {
        self.records
            .iter()
            .find(|record| Self::record_id(record) == id)
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn replace(&mut self, records: Vec<Value>) {
        self.records = records;
    }
}

/// 整份遊戲資料的記憶體存放
#[derive(Debug, Clone)]
pub struct GameDataStore {
    version: String,
    game_title: LocalizedText,
    game_description: LocalizedText,
    author: String,
    attributes: Collection<Attribute>,
    skills: Collection<Skill>,
    items: Collection<Item>,
    monmus_list: Collection<Monmus>,
    map_nodes: ExtraCollection,
    events: ExtraCollection,
    npcs: ExtraCollection,
    quests: ExtraCollection,
    settings: IndexMap<String, Value>,
}

impl Default for GameDataStore {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            game_title: LocalizedText::default(),
            game_description: LocalizedText::default(),
            author: String::new(),
            attributes: Collection::default(),
            skills: Collection::default(),
            items: Collection::default(),
            monmus_list: Collection::default(),
            map_nodes: ExtraCollection::new("map_nodes"),
            events: ExtraCollection::new("events"),
            npcs: ExtraCollection::new("npcs"),
            quests: ExtraCollection::new("quests"),
            settings: IndexMap::new(),
        }
    }
}

impl GameDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 遊戲中繼資料 ====================

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn game_title(&self) -> &LocalizedText {
        &self.game_title
    }

    pub fn set_game_title(&mut self, title: LocalizedText) {
        self.game_title = title;
    }

    pub fn game_description(&self) -> &LocalizedText {
        &self.game_description
    }

    pub fn set_game_description(&mut self, description: LocalizedText) {
        self.game_description = description;
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    // ==================== 各集合 ====================

    pub fn attributes(&self) -> &Collection<Attribute> {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Collection<Attribute> {
        &mut self.attributes
    }

    pub fn skills(&self) -> &Collection<Skill> {
        &self.skills
    }

    pub fn skills_mut(&mut self) -> &mut Collection<Skill> {
        &mut self.skills
    }

    pub fn items(&self) -> &Collection<Item> {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Collection<Item> {
        &mut self.items
    }

    pub fn monmus_list(&self) -> &Collection<Monmus> {
        &self.monmus_list
    }

    pub fn monmus_list_mut(&mut self) -> &mut Collection<Monmus> {
        &mut self.monmus_list
    }

    pub fn map_nodes(&self) -> &ExtraCollection {
        &self.map_nodes
    }

    pub fn map_nodes_mut(&mut self) -> &mut ExtraCollection {
        &mut self.map_nodes
    }

    pub fn events(&self) -> &ExtraCollection {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut ExtraCollection {
        &mut self.events
    }

    pub fn npcs(&self) -> &ExtraCollection {
        &self.npcs
    }

    pub fn npcs_mut(&mut self) -> &mut ExtraCollection {
        &mut self.npcs
    }

    pub fn quests(&self) -> &ExtraCollection {
        &self.quests
    }

    pub fn quests_mut(&mut self) -> &mut ExtraCollection {
        &mut self.quests
    }

    pub fn settings(&self) -> &IndexMap<String, Value> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut IndexMap<String, Value> {
        &mut self.settings
    }

    // ==================== 整份文件操作 ====================

    /// 匯出整份文件的快照（canonical 欄位命名）
    pub fn export(&self) -> GameData {
        GameData {
            version: self.version.clone(),
            game_title: self.game_title.clone(),
            game_description: self.game_description.clone(),
            author: self.author.clone(),
            attributes: self.attributes.records().to_vec(),
            skills: self.skills.records().to_vec(),
            items: self.items.records().to_vec(),
            monmus_list: self.monmus_list.records().to_vec(),
            map_nodes: self.map_nodes.records().to_vec(),
            events: self.events.records().to_vec(),
            npcs: self.npcs.records().to_vec(),
            quests: self.quests.records().to_vec(),
            settings: self.settings.clone(),
        }
    }

    /// 以整份文件取代記憶體狀態（全有或全無）
    ///
    /// 缺少的區段已在解析時補成空值，此處不會失敗。
    pub fn load(&mut self, data: GameData) {
        self.version = data.version;
        self.game_title = data.game_title;
        self.game_description = data.game_description;
        self.author = data.author;
        self.attributes = Collection::from_records(data.attributes);
        self.skills = Collection::from_records(data.skills);
        self.items = Collection::from_records(data.items);
        self.monmus_list = Collection::from_records(data.monmus_list);
        self.map_nodes.replace(data.map_nodes);
        self.events.replace(data.events);
        self.npcs.replace(data.npcs);
        self.quests.replace(data.quests);
        self.settings = data.settings;
    }

    /// 回到全新專案的空白狀態
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::skill::SkillPatch;
    use serde_json::json;

    fn attribute(id: EntityId, ko_name: &str) -> Attribute {
        Attribute {
            id,
            name: LocalizedText::korean(ko_name),
            ..Attribute::default()
        }
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = GameDataStore::new();
        store.attributes_mut().add(attribute(1, "불")).unwrap();

        let result = store.attributes_mut().add(attribute(1, "물"));
        assert_eq!(
            result,
            Err(StoreError::DuplicateId {
                collection: "attributes",
                id: "1".to_string()
            })
        );
        // 失敗時狀態不變
        assert_eq!(store.attributes().len(), 1);
        assert_eq!(store.attributes().get(1).unwrap().name.ko, "불");
    }

    #[test]
    fn test_update_preserves_id_and_absent_fields() {
        let mut store = GameDataStore::new();
        store
            .skills_mut()
            .add(Skill {
                id: 4,
                name: LocalizedText::korean("불꽃"),
                power: 40,
                ..Skill::default()
            })
            .unwrap();

        store
            .skills_mut()
            .update(
                4,
                SkillPatch {
                    accuracy: Some(85),
                    ..SkillPatch::default()
                },
            )
            .unwrap();

        let skill = store.skills().get(4).unwrap();
        assert_eq!(skill.id, 4);
        assert_eq!(skill.accuracy, 85);
        assert_eq!(skill.name.ko, "불꽃");
        assert_eq!(skill.power, 40);
    }

    #[test]
    fn test_update_missing_record_is_error() {
        let mut store = GameDataStore::new();
        let result = store.skills_mut().update(99, SkillPatch::default());
        assert_eq!(
            result,
            Err(StoreError::NotFound {
                collection: "skills",
                id: "99".to_string()
            })
        );
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = GameDataStore::new();
        store.attributes_mut().add(attribute(1, "불")).unwrap();
        store.attributes_mut().add(attribute(2, "물")).unwrap();

        assert!(store.attributes_mut().delete(1));
        let after_first: Vec<_> = store.attributes().ids().collect();

        // 第二次刪除同一 ID：結果集合相同，不是錯誤
        assert!(!store.attributes_mut().delete(1));
        let after_second: Vec<_> = store.attributes().ids().collect();
        assert_eq!(after_first, after_second);
        assert_eq!(after_second, vec![2]);
    }

    #[test]
    fn test_deleting_attribute_leaves_referencing_skill_untouched() {
        let mut store = GameDataStore::new();
        store.attributes_mut().add(attribute(1, "불")).unwrap();
        store
            .skills_mut()
            .add(Skill {
                id: 1,
                name: LocalizedText::korean("불꽃"),
                attribute_type_id: 1,
                ..Skill::default()
            })
            .unwrap();

        store.attributes_mut().delete(1);

        // 懸空外鍵被容忍：技能原樣保留
        let skill = store.skills().get(1).unwrap();
        assert_eq!(skill.attribute_type_id, 1);
        assert_eq!(skill.name.ko, "불꽃");
    }

    #[test]
    fn test_insertion_order_is_export_order() {
        let mut store = GameDataStore::new();
        for (id, name) in [(3, "풀"), (1, "불"), (2, "물")] {
            store.attributes_mut().add(attribute(id, name)).unwrap();
        }

        let exported = store.export();
        let ids: Vec<_> = exported.attributes.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_matchup_export_scenario() {
        let mut store = GameDataStore::new();
        store.attributes_mut().add(attribute(1, "불")).unwrap();

        let mut water = attribute(2, "물");
        water.set_matchup(1, 0.5);
        store.attributes_mut().add(water).unwrap();

        let exported = store.export();
        assert!(exported.attributes[0].matchups.is_empty());
        assert_eq!(exported.attributes[1].matchups.get("1"), Some(&0.5));
    }

    #[test]
    fn test_extra_collection_contract() {
        let mut store = GameDataStore::new();
        let field_id = json!("field_1");

        store
            .map_nodes_mut()
            .add(json!({"id": "field_1", "type": "field", "connections": []}))
            .unwrap();

        // 重複 ID 拒絕
        assert!(store.map_nodes_mut().add(json!({"id": "field_1"})).is_err());

        // 淺層合併，id 不受影響
        store
            .map_nodes_mut()
            .update(&field_id, json!({"type": "town", "id": "hacked"}))
            .unwrap();
        let node = store.map_nodes().get(&field_id).unwrap();
        assert_eq!(node["type"], "town");
        assert_eq!(node["id"], "field_1");
        assert_eq!(node["connections"], json!([]));

        // 冪等刪除
        assert!(store.map_nodes_mut().delete(&field_id));
        assert!(!store.map_nodes_mut().delete(&field_id));
        assert!(store.map_nodes().is_empty());
    }

    #[test]
    fn test_reset_restores_empty_default() {
        let mut store = GameDataStore::new();
        store.set_author("author");
        store.attributes_mut().add(attribute(1, "불")).unwrap();
        store.settings_mut().insert("difficulty".into(), json!(2));

        store.reset();

        assert_eq!(store.export(), GameData::default());
    }
}
