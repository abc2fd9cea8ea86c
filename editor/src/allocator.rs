//! ID 分配
//!
//! 正式環境的分配器是外部服務（`GET /api/id/{collection}`）；
//! 這裡只定義接縫與本地後備。分配器失敗是一種降級而非錯誤：
//! 呼叫端透明地改用 `max(existing) + 1`。

use indexmap::IndexMap;
use monmus_core::{next_id, CollectionKind, EntityId, GameData};
use thiserror::Error as ThisError;

/// 分配器無法使用
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum AllocationError {
    #[error("ID 分配服務無法使用：{reason}")]
    Unavailable { reason: String },
}

/// ID 分配器接縫
///
/// HTTP 客戶端實作不在此函式庫範圍內；測試與離線情境
/// 使用 [`SequentialAllocator`]。
pub trait IdAllocator: std::fmt::Debug {
    /// 取得指定集合的下一個唯一 ID
    fn next_id(&mut self, kind: CollectionKind) -> Result<EntityId, AllocationError>;

    /// 匯入整份文件後重新對齊計數器
    ///
    /// 遠端分配器在伺服器端自行對齊，預設為 no-op。
    fn resync(&mut self, _data: &GameData) {}
}

/// 向分配器要 ID；失敗時靜默改用本地後備
pub fn allocate_or_fallback<I>(
    allocator: &mut dyn IdAllocator,
    kind: CollectionKind,
    existing: I,
) -> EntityId
where
    I: IntoIterator<Item = EntityId>,
{
    allocator
        .next_id(kind)
        .unwrap_or_else(|_| next_id(existing))
}

/// 行程內的參考實作：每個集合一個單調遞增計數器
#[derive(Debug, Clone, Default)]
pub struct SequentialAllocator {
    counters: IndexMap<CollectionKind, EntityId>,
}

impl SequentialAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 將指定集合的計數器重設為 value
    pub fn reset(&mut self, kind: CollectionKind, value: EntityId) {
        self.counters.insert(kind, value);
    }
}

impl IdAllocator for SequentialAllocator {
    fn next_id(&mut self, kind: CollectionKind) -> Result<EntityId, AllocationError> {
        let counter = self.counters.entry(kind).or_insert(1);
        let current = *counter;
        *counter += 1;
        Ok(current)
    }

    /// 每個集合的計數器跳到 `max(id) + 1`
    fn resync(&mut self, data: &GameData) {
        let collections = [
            (
                CollectionKind::Attributes,
                data.attributes.iter().map(|attr| attr.id).max(),
            ),
            (
                CollectionKind::Skills,
                data.skills.iter().map(|skill| skill.id).max(),
            ),
            (
                CollectionKind::Items,
                data.items.iter().map(|item| item.id).max(),
            ),
            (
                CollectionKind::Monmus,
                data.monmus_list.iter().map(|monmus| monmus.id).max(),
            ),
        ];

        for (kind, max_id) in collections {
            if let Some(max_id) = max_id {
                self.reset(kind, max_id + 1);
            }
        }
    }
}
