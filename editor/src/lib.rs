//! Monmus 編輯器的 session 層
//!
//! 表單渲染、頁面導覽與佈景主題不在此函式庫範圍內；
//! 這裡只包含編輯器去除 UI 之後剩下的部分：
//! - 每個集合的編輯 session（草稿、驗證、訊息）
//! - ID 分配與本地後備
//! - 檔案匯入/匯出

pub mod allocator;
pub mod constants;
pub mod editor_entity;
pub mod io;
pub mod message;
pub mod session;
pub mod state;

pub use allocator::{allocate_or_fallback, AllocationError, IdAllocator, SequentialAllocator};
pub use editor_entity::EditorEntity;
pub use io::{ExportError, ImportError};
pub use message::MessageState;
pub use session::{CollectionEditor, EditMode};
pub use state::{EditorApp, EditorTab};
