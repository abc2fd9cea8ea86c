//! 參照完整性檢查
//!
//! 懸空參照是允許的存放狀態；此處只產生警告供作者參考，
//! 永遠不會阻止任何操作。

use crate::document::GameData;
use crate::id::EntityId;
use std::collections::HashSet;

/// 檢查結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 對整份文件做唯讀的參照檢查
///
/// 與懸空參照容忍原則一致：未知參照一律是警告而非錯誤。
pub fn validate_document(data: &GameData) -> ValidationReport {
    let mut report = ValidationReport::default();

    let attribute_ids: HashSet<EntityId> = data.attributes.iter().map(|attr| attr.id).collect();
    let skill_ids: HashSet<EntityId> = data.skills.iter().map(|skill| skill.id).collect();

    for monmus in &data.monmus_list {
        for attribute_id in &monmus.attribute_types {
            if !attribute_ids.contains(attribute_id) {
                report.warnings.push(format!(
                    "Monmus「{}」（ID {}）參照了不存在的屬性 ID {}",
                    monmus.name.ko, monmus.id, attribute_id
                ));
            }
        }

        // learnable_skills 是不透明值；只在元素帶有 skill_id 欄位時檢查
        for learnable in &monmus.learnable_skills {
            let Some(skill_id) = learnable.get("skill_id").and_then(|id| id.as_u64()) else {
                continue;
            };
            if !skill_ids.contains(&(skill_id as EntityId)) {
                report.warnings.push(format!(
                    "Monmus「{}」（ID {}）參照了不存在的技能 ID {}",
                    monmus.name.ko, monmus.id, skill_id
                ));
            }
        }
    }

    for skill in &data.skills {
        if !attribute_ids.contains(&skill.attribute_type_id) {
            report.warnings.push(format!(
                "技能「{}」（ID {}）參照了不存在的屬性 ID {}",
                skill.name.ko, skill.id, skill.attribute_type_id
            ));
        }
    }

    report
}
