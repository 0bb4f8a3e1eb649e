use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::{DEFAULT_KEEP_AS_IS, KeepList, ResourceTree};
use crate::particles::FieldConfig;

/// 設定檔相對於工作區根目錄的位置。
pub const CONFIG_PATH: &str = "config/scai.toml";

/// 應用程式的頂層設定，通常從 `config/scai.toml` 載入。
/// 所有欄位都有預設值，因此設定檔可以只寫需要覆寫的部分。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub i18n: I18nConfig,
    pub field: FieldConfig,
    pub logging: LoggingConfig,
}

/// 翻譯相關設定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// 使用者上次選擇的語言；切換語言時會寫回設定檔。
    pub language: Option<String>,
    /// 沒有偏好設定也無法從系統語系判斷時使用的語言。
    pub default_language: String,
    /// 永遠不翻譯的詞彙（不分大小寫）。
    pub keep_as_is: Vec<String>,
    /// 額外的翻譯資源檔（TOML/YAML/JSON），會覆蓋在內建資源之上。
    pub resources: Option<PathBuf>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: None,
            default_language: String::from("en"),
            keep_as_is: DEFAULT_KEEP_AS_IS.iter().map(|word| word.to_string()).collect(),
            resources: None,
        }
    }
}

impl I18nConfig {
    pub fn keep_list(&self) -> KeepList {
        KeepList::new(&self.keep_as_is)
    }

    /// 建立資源樹：內建資源加上（若有設定）外部資源檔。
    pub fn resource_tree(&self, workspace_root: &Path) -> Result<ResourceTree> {
        let mut tree = ResourceTree::builtin();
        if let Some(path) = &self.resources {
            let path = resolve(workspace_root, path);
            let overlay = ResourceTree::load(&path)
                .with_context(|| format!("讀取翻譯資源失敗: {}", path.display()))?;
            tree.merge(overlay);
        }
        Ok(tree)
    }
}

/// 日誌設定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// 日誌輸出檔案；終端機畫面由 UI 佔用，所以日誌一律寫入檔案。
    pub file: PathBuf,
    /// log4rs 的 YAML 設定檔；存在時優先使用。
    pub config: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            file: PathBuf::from("logs/scai.log"),
            config: Some(PathBuf::from("config/log4rs.yaml")),
        }
    }
}

impl AppConfig {
    /// 從指定的工作區目錄讀取設定。
    /// 如果設定檔不存在，則回傳預設值。
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let config_path = workspace_root.join(CONFIG_PATH);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&config_path)
            .with_context(|| format!("讀取設定失敗: {}", config_path.display()))?;
        toml::from_str(&raw).with_context(|| format!("解析設定失敗: {}", config_path.display()))
    }

    /// 將當前設定儲存到 `config/scai.toml`。
    pub fn save_to_file(&self, workspace_root: &Path) -> Result<()> {
        let config_path = workspace_root.join(CONFIG_PATH);
        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)
                    .with_context(|| format!("建立設定目錄失敗: {}", config_dir.display()))?;
            }
        }
        let serialized = toml::to_string_pretty(self).context("序列化設定失敗")?;
        fs::write(&config_path, serialized)
            .with_context(|| format!("寫入設定失敗: {}", config_path.display()))?;
        Ok(())
    }
}

/// 相對路徑以工作區根目錄為基準。
pub fn resolve(workspace_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace_root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::DeviceSetting;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.field.desktop_cap, 40);
    }

    #[test]
    fn partial_files_keep_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        fs::write(
            dir.path().join(CONFIG_PATH),
            "[i18n]\nlanguage = \"zh\"\n\n[field]\ndevice = \"coarse\"\nmobile_count = 8\n",
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.i18n.language.as_deref(), Some("zh"));
        assert_eq!(config.i18n.default_language, "en");
        assert_eq!(config.field.device, DeviceSetting::Coarse);
        assert_eq!(config.field.mobile_count, 8);
        assert_eq!(config.field.link_distance, 100.0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.i18n.language = Some(String::from("zh"));
        config.field.target_fps = 30;
        config.save_to_file(dir.path()).unwrap();

        assert_eq!(AppConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn resource_overlay_is_merged() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("extra.yaml"), "en:\n  home:\n    title: Overlay\n").unwrap();
        let i18n = I18nConfig {
            resources: Some(PathBuf::from("extra.yaml")),
            ..I18nConfig::default()
        };

        let tree = i18n.resource_tree(dir.path()).unwrap();
        assert_eq!(tree.resolve("en", "home.title"), Some("Overlay"));
        assert_eq!(tree.resolve("zh", "home.title"), Some("SCAI - 科学AI协作框架"));
    }

    #[test]
    fn broken_file_reports_context() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        fs::write(dir.path().join(CONFIG_PATH), "[field\n").unwrap();
        let err = AppConfig::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("解析設定失敗"));
    }
}
