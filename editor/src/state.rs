//! 編輯器應用程式狀態

use crate::allocator::{IdAllocator, SequentialAllocator};
use crate::io;
use crate::session::CollectionEditor;
use anyhow::Context;
use monmus_core::{Attribute, GameDataStore, Item, Language, Monmus, Skill};
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumIter};

/// 編輯器標籤頁
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, Display)]
pub enum EditorTab {
    #[default]
    #[strum(to_string = "遊戲資訊")]
    GameInfo,
    #[strum(to_string = "屬性")]
    Attribute,
    #[strum(to_string = "技能")]
    Skill,
    #[strum(to_string = "道具")]
    Item,
    #[strum(to_string = "Monmus")]
    Monmus,
}

/// 編輯器應用程式狀態
///
/// 存放本體以依賴注入的方式持有，不是全域單例；
/// 測試可以建立多個互不影響的實例。
#[derive(Debug)]
pub struct EditorApp {
    pub current_tab: EditorTab,
    pub language: Language,
    pub store: GameDataStore,
    pub allocator: Box<dyn IdAllocator>,
    pub attribute_editor: CollectionEditor<Attribute>,
    pub skill_editor: CollectionEditor<Skill>,
    pub item_editor: CollectionEditor<Item>,
    pub monmus_editor: CollectionEditor<Monmus>,
}

impl EditorApp {
    /// 以指定的 ID 分配器建立編輯器
    pub fn new(allocator: Box<dyn IdAllocator>) -> Self {
        Self {
            current_tab: EditorTab::default(),
            language: Language::default(),
            store: GameDataStore::new(),
            allocator,
            attribute_editor: CollectionEditor::new(),
            skill_editor: CollectionEditor::new(),
            item_editor: CollectionEditor::new(),
            monmus_editor: CollectionEditor::new(),
        }
    }

    /// 建立使用行程內分配器的編輯器（外部分配服務不可用時）
    pub fn with_local_allocator() -> Self {
        Self::new(Box::new(SequentialAllocator::new()))
    }

    /// 新專案：清空存放並放棄所有進行中的編輯
    pub fn new_project(&mut self) {
        self.store.reset();
        self.attribute_editor.cancel();
        self.skill_editor.cancel();
        self.item_editor.cancel();
        self.monmus_editor.cancel();
    }

    /// 各集合的確認提交（存放與 session 是不同欄位，可同時借用）
    pub fn confirm_attribute(&mut self) {
        self.attribute_editor
            .confirm(self.store.attributes_mut(), self.allocator.as_mut());
    }

    pub fn confirm_skill(&mut self) {
        self.skill_editor
            .confirm(self.store.skills_mut(), self.allocator.as_mut());
    }

    pub fn confirm_item(&mut self) {
        self.item_editor
            .confirm(self.store.items_mut(), self.allocator.as_mut());
    }

    pub fn confirm_monmus(&mut self) {
        self.monmus_editor
            .confirm(self.store.monmus_list_mut(), self.allocator.as_mut());
    }

    /// 匯入檔案並整份取代存放狀態，同時重新對齊分配器
    ///
    /// 解析失敗時存放狀態與分配器都保持原樣。
    pub fn import_from_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let data = io::import_file(path)
            .with_context(|| format!("匯入失敗：{}", path.display()))?;
        self.allocator.resync(&data);
        self.store.load(data);
        Ok(())
    }

    /// 匯出整份文件到指定目錄
    pub fn export_to(&self, directory: &Path) -> anyhow::Result<PathBuf> {
        io::export_file(&self.store, directory)
            .with_context(|| format!("匯出失敗：{}", directory.display()))
    }
}
