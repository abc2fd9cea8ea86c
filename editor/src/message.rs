//! 操作結果訊息
//!
//! 資料層不記錄也不重試；操作結果透過此狀態回報給使用者。

/// 最後一次操作的訊息狀態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    /// 最後的操作訊息（成功或錯誤）
    pub message: String,
    /// 訊息是否為錯誤
    pub is_error: bool,
    /// 訊息是否可見
    pub visible: bool,
}

impl MessageState {
    /// 設置成功訊息
    pub fn set_success(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.is_error = false;
        self.visible = true;
    }

    /// 設置錯誤訊息
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.is_error = true;
        self.visible = true;
    }

    /// 關閉訊息
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
