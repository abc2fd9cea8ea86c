//! 可編輯實體的通用 trait 定義

use monmus_core::{
    Attribute, CollectionKind, Entity, Item, Monmus, Skill, ValidationError,
    MAX_ATTRIBUTE_TYPES,
};

/// 所有可在編輯器中編輯的實體必須實現的基本 trait
pub trait EditorEntity: Entity + Default {
    /// 取得顯示名稱（預設語言，用於列表顯示和訊息）
    fn display_name(&self) -> &str;

    /// 設定顯示名稱（用於複製功能）
    fn set_display_name(&mut self, name: String);

    /// 實體類型名稱（用於訊息顯示，如「屬性」、「技能」）
    fn type_name() -> &'static str;

    /// 對應的 ID 分配集合
    fn kind() -> CollectionKind;

    /// 驗證草稿（confirm 時呼叫）
    ///
    /// 預設規則：預設語言名稱必填。
    fn validate(&self) -> Result<(), ValidationError> {
        if self.display_name().trim().is_empty() {
            return Err(ValidationError::EmptyDefaultName);
        }
        Ok(())
    }
}

impl EditorEntity for Attribute {
    fn display_name(&self) -> &str {
        &self.name.ko
    }

    fn set_display_name(&mut self, name: String) {
        self.name.ko = name;
    }

    fn type_name() -> &'static str {
        "屬性"
    }

    fn kind() -> CollectionKind {
        CollectionKind::Attributes
    }
}

impl EditorEntity for Skill {
    fn display_name(&self) -> &str {
        &self.name.ko
    }

    fn set_display_name(&mut self, name: String) {
        self.name.ko = name;
    }

    fn type_name() -> &'static str {
        "技能"
    }

    fn kind() -> CollectionKind {
        CollectionKind::Skills
    }
}

impl EditorEntity for Item {
    fn display_name(&self) -> &str {
        &self.name.ko
    }

    fn set_display_name(&mut self, name: String) {
        self.name.ko = name;
    }

    fn type_name() -> &'static str {
        "道具"
    }

    fn kind() -> CollectionKind {
        CollectionKind::Items
    }
}

impl EditorEntity for Monmus {
    fn display_name(&self) -> &str {
        &self.name.ko
    }

    fn set_display_name(&mut self, name: String) {
        self.name.ko = name;
    }

    fn type_name() -> &'static str {
        "Monmus"
    }

    fn kind() -> CollectionKind {
        CollectionKind::Monmus
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.ko.trim().is_empty() {
            return Err(ValidationError::EmptyDefaultName);
        }
        if self.attribute_types.len() > MAX_ATTRIBUTE_TYPES {
            return Err(ValidationError::TooManyAttributeTypes {
                max: MAX_ATTRIBUTE_TYPES,
            });
        }
        Ok(())
    }
}
