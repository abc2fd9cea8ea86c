//! 錯誤處理系統
//!
//! 資料層只回傳型別化錯誤，失敗時狀態保持不變；
//! 不記錄、不重試，由觸發操作的呼叫端處理。

use thiserror::Error as ThisError;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// 集合操作錯誤
///
/// 刻意的不對稱：`update` 找不到目標是錯誤，`delete` 找不到目標是冪等的 no-op。
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum StoreError {
    #[error("{collection} 中已存在 ID {id}，無法重複新增")]
    DuplicateId { collection: &'static str, id: String },
    #[error("{collection} 中找不到 ID {id}")]
    NotFound { collection: &'static str, id: String },
}

/// 提交前的驗證錯誤
///
/// 驗證失敗時拒絕該次變更，草稿保持原狀。
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum ValidationError {
    #[error("預設語言（ko）名稱不能為空")]
    EmptyDefaultName,
    #[error("最多只能選擇 {max} 個屬性")]
    TooManyAttributeTypes { max: usize },
}
