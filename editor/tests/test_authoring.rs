//! 從建立到匯出的完整編輯流程測試

use editor::{CollectionEditor, EditorApp, SequentialAllocator};
use monmus_core::{validate_document, Attribute, LocalizedText, Monmus, Skill};
use std::path::PathBuf;

fn korean_name<T: editor::EditorEntity>(name: &str) -> T {
    let mut draft = T::default();
    draft.set_display_name(name.to_string());
    draft
}

fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("monmus-editor-{}-{}", label, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn authoring_flow_from_empty_project_to_export() {
    let mut app = EditorApp::with_local_allocator();

    // 建立兩個屬性
    for name in ["불", "물"] {
        app.attribute_editor
            .start_creating(korean_name::<Attribute>(name));
        app.confirm_attribute();
        assert!(
            !app.attribute_editor.message.is_error,
            "{}",
            app.attribute_editor.message.message
        );
    }
    assert_eq!(
        app.store.attributes().ids().collect::<Vec<_>>(),
        vec![1, 2]
    );

    // 物剋火：水屬性對火屬性倍率 2.0
    app.attribute_editor.start_editing(2, app.store.attributes());
    app.attribute_editor.draft.as_mut().unwrap().set_matchup(1, 2.0);
    app.confirm_attribute();
    assert_eq!(
        app.store.attributes().get(2).unwrap().multiplier_against(1),
        2.0
    );

    // 建立指向火屬性的技能
    let mut skill_draft = korean_name::<Skill>("불꽃");
    skill_draft.attribute_type_id = 1;
    app.skill_editor.start_creating(skill_draft);
    app.confirm_skill();
    assert_eq!(app.store.skills().get(1).unwrap().attribute_type_id, 1);

    // 建立帶屬性的 Monmus
    let mut monmus_draft = korean_name::<Monmus>("이무기");
    monmus_draft.toggle_attribute_type(2).unwrap();
    app.monmus_editor.start_creating(monmus_draft);
    app.confirm_monmus();
    assert_eq!(app.store.monmus_list().len(), 1);

    // 刪除火屬性：技能留下懸空參照，檢查只給警告
    app.attribute_editor.delete(1, app.store.attributes_mut());
    assert!(app.store.skills().get(1).is_some());

    let report = validate_document(&app.store.export());
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);

    // 匯出後再匯入，內容不變
    let dir = temp_dir("roundtrip");
    let path = app.export_to(&dir).unwrap();
    let before = app.store.export();

    let mut second = EditorApp::with_local_allocator();
    second.import_from_file(&path).unwrap();
    assert_eq!(second.store.export(), before);

    // 匯入後分配器已對齊：下一個屬性 ID 接在既有最大值之後
    second
        .attribute_editor
        .start_creating(korean_name::<Attribute>("풀"));
    second.confirm_attribute();
    assert_eq!(
        second.store.attributes().ids().max().unwrap(),
        3
    );

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn failed_import_leaves_store_untouched() {
    let dir = temp_dir("bad-import");
    let path = dir.join("broken.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let mut app = EditorApp::with_local_allocator();
    app.attribute_editor
        .start_creating(korean_name::<Attribute>("불"));
    app.confirm_attribute();
    let before = app.store.export();

    assert!(app.import_from_file(&path).is_err());
    assert_eq!(app.store.export(), before);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn new_project_discards_state_and_drafts() {
    let mut app = EditorApp::with_local_allocator();
    app.attribute_editor
        .start_creating(korean_name::<Attribute>("불"));
    app.confirm_attribute();
    app.skill_editor
        .start_creating(korean_name::<Skill>("불꽃"));

    app.new_project();

    assert!(app.store.attributes().is_empty());
    assert!(app.skill_editor.draft.is_none());
    assert!(!app.skill_editor.is_editing());
}

#[test]
fn one_draft_slot_per_collection() {
    let mut collection = monmus_core::Collection::<Attribute>::default();
    let mut editor: CollectionEditor<Attribute> = CollectionEditor::new();
    let mut allocator = SequentialAllocator::new();

    collection
        .add(Attribute {
            id: 1,
            name: LocalizedText::korean("불"),
            ..Attribute::default()
        })
        .unwrap();

    // 開啟第二個編輯會直接取代第一個草稿：同一集合同一時間只有一個編輯
    editor.start_creating(korean_name::<Attribute>("물"));
    editor.start_editing(1, &collection);
    assert_eq!(editor.draft.as_ref().unwrap().name.ko, "불");

    editor.confirm(&mut collection, &mut allocator);
    assert_eq!(collection.len(), 1);
}
