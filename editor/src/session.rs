//! 泛型編輯 session
//!
//! 每個集合同一時間最多只有一個進行中的編輯（單一草稿欄位）。
//! 草稿驗證失敗時拒絕提交、草稿保持原狀；成功後回到瀏覽模式。

use crate::allocator::{allocate_or_fallback, IdAllocator};
use crate::constants::COPY_SUFFIX;
use crate::editor_entity::EditorEntity;
use crate::message::MessageState;
use monmus_core::{Collection, EntityId};

/// 編輯模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// 瀏覽模式
    #[default]
    Browsing,
    /// 新增模式
    Creating,
    /// 編輯模式（儲存目標 ID）
    Editing(EntityId),
}

/// 單一集合的編輯 session
#[derive(Debug, Default)]
pub struct CollectionEditor<T: EditorEntity> {
    pub message: MessageState,
    pub edit_mode: EditMode,
    /// 編輯中的草稿（暫存）
    pub draft: Option<T>,
}

impl<T: EditorEntity> CollectionEditor<T> {
    pub fn new() -> Self {
        Self {
            message: MessageState::default(),
            edit_mode: EditMode::Browsing,
            draft: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit_mode != EditMode::Browsing
    }

    /// 開始新增：以呼叫端準備的草稿進入新增模式
    pub fn start_creating(&mut self, draft: T) {
        self.draft = Some(draft);
        self.edit_mode = EditMode::Creating;
    }

    /// 開始編輯既有記錄
    pub fn start_editing(&mut self, id: EntityId, collection: &Collection<T>) {
        // Fail Fast: 驗證目標存在
        let Some(record) = collection.get(id) else {
            self.message
                .set_error(format!("找不到要編輯的{}：ID {}", T::type_name(), id));
            return;
        };

        self.draft = Some(record.clone());
        self.edit_mode = EditMode::Editing(id);
    }

    /// 複製既有記錄作為新草稿
    pub fn start_copying(&mut self, id: EntityId, collection: &Collection<T>) {
        // Fail Fast: 驗證來源存在
        let Some(record) = collection.get(id) else {
            self.message
                .set_error(format!("找不到要複製的{}：ID {}", T::type_name(), id));
            return;
        };

        let mut copied = record.clone();
        let copied_name = format!("{}{}", copied.display_name(), COPY_SUFFIX);
        copied.set_display_name(copied_name);
        self.draft = Some(copied);
        self.edit_mode = EditMode::Creating;
    }

    /// 取消編輯
    pub fn cancel(&mut self) {
        self.edit_mode = EditMode::Browsing;
        self.draft = None;
    }

    /// 確認編輯：新增模式下分配 ID 後加入集合，編輯模式下以
    /// 完整 patch 更新目標
    ///
    /// 任何失敗都讓集合與草稿保持原狀，只設置錯誤訊息。
    pub fn confirm(
        &mut self,
        collection: &mut Collection<T>,
        allocator: &mut dyn IdAllocator,
    ) {
        // Fail Fast: 驗證是否正在編輯
        if self.edit_mode == EditMode::Browsing {
            self.message.set_error("目前不在編輯模式");
            return;
        }

        // Fail Fast: 驗證草稿存在
        let Some(draft) = self.draft.as_ref() else {
            self.message
                .set_error(format!("編輯中的{}不存在", T::type_name()));
            self.edit_mode = EditMode::Browsing;
            return;
        };

        if let Err(error) = draft.validate() {
            self.message.set_error(error.to_string());
            return;
        }

        match self.edit_mode {
            EditMode::Creating => {
                let mut record = draft.clone();
                let id = allocate_or_fallback(allocator, T::kind(), collection.ids());
                record.assign_id(id);
                let name = record.display_name().to_string();

                if let Err(error) = collection.add(record) {
                    self.message.set_error(error.to_string());
                    return;
                }
                self.message
                    .set_success(format!("成功新增{}：{}", T::type_name(), name));
            }
            EditMode::Editing(id) => {
                let record = draft.clone();
                let name = record.display_name().to_string();

                if let Err(error) = collection.update(id, record.into_patch()) {
                    self.message.set_error(error.to_string());
                    return;
                }
                self.message
                    .set_success(format!("成功編輯{}：{}", T::type_name(), name));
            }
            EditMode::Browsing => {}
        }

        self.edit_mode = EditMode::Browsing;
        self.draft = None;
    }

    /// 刪除指定記錄（不存在時為冪等的 no-op）
    pub fn delete(&mut self, id: EntityId, collection: &mut Collection<T>) {
        let name = collection
            .get(id)
            .map(|record| record.display_name().to_string());

        if collection.delete(id) {
            self.message.set_success(format!(
                "成功刪除{}：{}",
                T::type_name(),
                name.unwrap_or_default()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::SequentialAllocator;
    use monmus_core::{Attribute, LocalizedText, Monmus};

    #[test]
    fn test_create_flow_allocates_id_and_appends() {
        let mut collection: Collection<Attribute> = Collection::default();
        let mut editor = CollectionEditor::new();
        let mut allocator = SequentialAllocator::new();

        let mut draft = Attribute::default();
        draft.name = LocalizedText::korean("불");
        editor.start_creating(draft);
        editor.confirm(&mut collection, &mut allocator);

        assert!(!editor.message.is_error, "{}", editor.message.message);
        assert_eq!(editor.edit_mode, EditMode::Browsing);
        assert!(editor.draft.is_none());
        assert_eq!(collection.records()[0].id, 1);
        assert_eq!(collection.records()[0].name.ko, "불");
    }

    #[test]
    fn test_empty_default_name_rejected() {
        let mut collection: Collection<Attribute> = Collection::default();
        let mut editor = CollectionEditor::new();
        let mut allocator = SequentialAllocator::new();

        editor.start_creating(Attribute::default());
        editor.confirm(&mut collection, &mut allocator);

        assert!(editor.message.is_error);
        assert!(collection.is_empty());
        // 草稿保持原狀，等待使用者修正後重新提交
        assert!(editor.draft.is_some());
        assert_eq!(editor.edit_mode, EditMode::Creating);
    }

    #[test]
    fn test_editing_updates_without_reassigning_id() {
        let mut collection: Collection<Attribute> = Collection::default();
        let mut editor = CollectionEditor::new();
        let mut allocator = SequentialAllocator::new();

        collection
            .add(Attribute {
                id: 3,
                name: LocalizedText::korean("불"),
                ..Attribute::default()
            })
            .unwrap();

        editor.start_editing(3, &collection);
        editor.draft.as_mut().unwrap().name.en = "Fire".to_string();
        editor.confirm(&mut collection, &mut allocator);

        assert!(!editor.message.is_error);
        let record = collection.get(3).unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.name.en, "Fire");
    }

    #[test]
    fn test_copy_appends_suffix() {
        let mut collection: Collection<Attribute> = Collection::default();
        let mut editor = CollectionEditor::new();

        collection
            .add(Attribute {
                id: 1,
                name: LocalizedText::korean("불"),
                ..Attribute::default()
            })
            .unwrap();

        editor.start_copying(1, &collection);
        assert_eq!(editor.draft.as_ref().unwrap().name.ko, "불-copy");
        assert_eq!(editor.edit_mode, EditMode::Creating);
    }

    #[test]
    fn test_confirm_outside_edit_mode_is_error() {
        let mut collection: Collection<Attribute> = Collection::default();
        let mut editor = CollectionEditor::new();
        let mut allocator = SequentialAllocator::new();

        editor.confirm(&mut collection, &mut allocator);

        assert!(editor.message.is_error);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_monmus_attribute_bound_checked_at_confirm() {
        let mut collection: Collection<Monmus> = Collection::default();
        let mut editor = CollectionEditor::new();
        let mut allocator = SequentialAllocator::new();

        let mut draft = Monmus::default();
        draft.name = LocalizedText::korean("이무기");
        // 草稿被外部直接塞入三個屬性時，confirm 仍會擋下
        draft.attribute_types = vec![1, 2, 3];
        editor.start_creating(draft);
        editor.confirm(&mut collection, &mut allocator);

        assert!(editor.message.is_error);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_delete_is_silent_on_missing() {
        let mut collection: Collection<Attribute> = Collection::default();
        let mut editor = CollectionEditor::new();

        editor.delete(42, &mut collection);
        assert!(!editor.message.visible);
    }
}
