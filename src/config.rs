use crate::error::{EcoClassifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// レジストリファイルを指定する環境変数（設定ファイルより優先）
pub const REGISTRY_ENV: &str = "ECO_CLASSIFY_REGISTRY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 追加のキーワード設定ファイル
    pub registry_path: Option<PathBuf>,
    /// 組み込みテーブルを土台にする
    pub use_builtin: bool,
    /// 出力に残す検出ラベルの件数
    pub top_labels: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_path: None,
            use_builtin: true,
            top_labels: 5,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| EcoClassifyError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("eco-classify").join("config.json"))
    }

    /// 有効なレジストリファイル
    ///
    /// 優先順: コマンドライン引数 > 環境変数 > 設定ファイル
    pub fn registry_file(&self, cli_override: Option<PathBuf>) -> Option<PathBuf> {
        cli_override
            .or_else(|| std::env::var_os(REGISTRY_ENV).map(PathBuf::from))
            .or_else(|| self.registry_path.clone())
    }

    /// レジストリファイルを登録（絶対パスで保存）
    pub fn set_registry(&mut self, path: PathBuf) -> Result<()> {
        self.registry_path = Some(absolute_registry_path(&path)?);
        self.save()
    }
}

/// 実行ディレクトリに依存しないよう絶対パスに解決する
fn absolute_registry_path(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(EcoClassifyError::FileNotFound(path.display().to_string()));
    }
    Ok(path.canonicalize()?)
}
