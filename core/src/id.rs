//! ID 政策
//!
//! 每個集合內的 ID 唯一、由外部分配器單調遞增發放，刪除後不回收。
//! 分配器無法使用時，所有集合共用同一個本地後備計算。

use strum_macros::{Display, EnumIter, EnumString};

/// 集合內唯一的實體 ID
pub type EntityId = u32;

/// 可分配 ID 的集合種類
///
/// `Display` 輸出即分配器的路徑片段（`/api/id/{collection}`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum CollectionKind {
    Attributes,
    Skills,
    Items,
    Monmus,
}

/// 本地後備的下一個 ID：`max(existing) + 1`，空集合為 `1`
///
/// 分配器失敗時五種編輯器共用此函數，不各自重複實作。
pub fn next_id<I>(existing: I) -> EntityId
where
    I: IntoIterator<Item = EntityId>,
{
    existing.into_iter().max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_is_max_plus_one() {
        assert_eq!(next_id([2, 5, 7]), 8);
        assert_eq!(next_id([7, 5, 2]), 8);
        assert_eq!(next_id([1]), 2);
    }

    #[test]
    fn test_next_id_for_empty_collection() {
        assert_eq!(next_id([]), 1);
    }

    #[test]
    fn test_collection_kind_path_segments() {
        assert_eq!(CollectionKind::Attributes.to_string(), "attributes");
        assert_eq!(CollectionKind::Skills.to_string(), "skills");
        assert_eq!(CollectionKind::Items.to_string(), "items");
        assert_eq!(CollectionKind::Monmus.to_string(), "monmus");
    }
}
