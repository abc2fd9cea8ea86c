// 編輯器相關
pub const COPY_SUFFIX: &str = "-copy";

// 檔案相關
pub const EXPORT_FILE_PREFIX: &str = "game";
pub const FILE_EXTENSION_JSON: &str = "json";
