//! `app` 模組是終端機展示程式的核心。
//!
//! 它負責管理應用程式的整體狀態、處理使用者輸入（鍵盤、滑鼠），
//! 並驅動粒子背景與翻譯服務。
//!
//! 這個 `mod.rs` 檔案作為 `app` 模組的入口點，
//! 負責宣告其所有子模組，並為了方便起見重新導出關鍵類型。

// --- 子模組宣告 ---

/// `init` 模組：負責 `App` 結構的初始化，包括掛載粒子背景。
mod init;
/// `keyboard` 模組：專門處理所有的鍵盤輸入事件。
mod keyboard;
/// `layout` 模組：終端機尺寸改變時重新計算區域。
mod layout;
/// `mouse` 模組：把滑鼠移動轉換成粒子背景的指標位置。
mod mouse;
/// `preferences` 模組：語言切換、快取清除與裝置類型切換。
mod preferences;
/// `state` 模組：定義了 `App` 結構。
mod state;
/// `tick` 模組：處理每一個動畫影格。
mod tick;

pub use state::App;
