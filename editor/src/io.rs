//! 檔案匯入/匯出
//!
//! 匯入是全有或全無：解析失敗時存放狀態完全不變。
//! 匯出產生 pretty-printed JSON，檔名帶有時間戳。

use crate::constants::{EXPORT_FILE_PREFIX, FILE_EXTENSION_JSON};
use chrono::{DateTime, Utc};
use monmus_core::{GameData, GameDataStore};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

/// 匯入錯誤（呈現給使用者的失敗通知）
#[derive(Debug, ThisError)]
pub enum ImportError {
    #[error("讀取檔案失敗：{0}")]
    Io(#[from] std::io::Error),
    #[error("不支援的檔案格式：{extension}，請上傳 JSON 檔案")]
    UnsupportedFormat { extension: String },
    #[error("JSON 解析失敗：{0}")]
    Parse(#[from] serde_json::Error),
}

/// 匯出錯誤
#[derive(Debug, ThisError)]
pub enum ExportError {
    #[error("寫入檔案失敗：{0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 序列化失敗：{0}")]
    Serialize(#[from] serde_json::Error),
}

/// 依副檔名解析上傳內容為遊戲資料文件
pub fn parse_document(content: &str, extension: &str) -> Result<GameData, ImportError> {
    let extension = extension.to_ascii_lowercase();

    if extension == FILE_EXTENSION_JSON {
        return Ok(GameData::from_json_str(content)?);
    }

    // 匯入介面也宣稱接受 YAML，但 YAML 解析尚未實作；
    // 在真正支援之前回報不支援，而非靜默誤解析
    Err(ImportError::UnsupportedFormat { extension })
}

/// 讀取並解析檔案
pub fn import_file(path: &Path) -> Result<GameData, ImportError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_string();
    let content = fs::read_to_string(path)?;
    parse_document(&content, &extension)
}

/// 匯入檔案並整份取代存放狀態
///
/// 解析完成之前不碰存放狀態；失敗時存放狀態保持原樣。
pub fn apply_import(store: &mut GameDataStore, path: &Path) -> Result<(), ImportError> {
    let data = import_file(path)?;
    store.load(data);
    Ok(())
}

/// 匯出下載的檔名：`game_{毫秒時間戳}.json`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!(
        "{}_{}.{}",
        EXPORT_FILE_PREFIX,
        now.timestamp_millis(),
        FILE_EXTENSION_JSON
    )
}

/// 將整份文件匯出到指定目錄，回傳寫入的路徑
pub fn export_file(store: &GameDataStore, directory: &Path) -> Result<PathBuf, ExportError> {
    let content = store.export().to_json_pretty()?;
    let path = directory.join(export_file_name(Utc::now()));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}
