//! レジストリの読み込み
//!
//! 組み込みテーブルとキーワード設定ファイルを重ねて、起動時に一度だけ
//! KeywordRegistryを構築する。構築に失敗した場合は起動を中止する。

use crate::error::{EcoClassifyError, Result};
use eco_classify_common::{Category, KeywordRegistry, RegistryConfig};
use std::path::Path;

/// レジストリの構築元
#[derive(Debug, Clone, Copy)]
pub struct RegistrySource<'a> {
    /// 組み込みテーブルを土台にする
    pub use_builtin: bool,
    /// 重ねるキーワード設定ファイル
    pub overlay: Option<&'a Path>,
}

/// 設定を合成する（ファイルの内容が組み込みテーブルより優先）
pub fn load_config(source: RegistrySource<'_>) -> Result<RegistryConfig> {
    let mut config = if source.use_builtin {
        RegistryConfig::builtin()
    } else {
        RegistryConfig::default()
    };

    if let Some(path) = source.overlay {
        if !path.exists() {
            return Err(EcoClassifyError::FileNotFound(path.display().to_string()));
        }
        let overlay = RegistryConfig::from_file(path)?;
        tracing::info!(path = %path.display(), rules = overlay.len(), "loaded keyword file");
        config.merge(&overlay);
    } else if !source.use_builtin {
        return Err(EcoClassifyError::NoRegistrySource);
    }

    Ok(config)
}

/// レジストリを構築する
pub fn load_registry(source: RegistrySource<'_>) -> Result<KeywordRegistry> {
    let config = load_config(source)?;
    let registry = KeywordRegistry::from_config(&config)?;

    tracing::info!(
        rules = registry.len(),
        organic = registry.count_by_category(Category::Organic),
        recyclable = registry.count_by_category(Category::Recyclable),
        non_recyclable = registry.count_by_category(Category::NonRecyclable),
        "keyword registry ready"
    );

    Ok(registry)
}
