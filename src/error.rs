use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoClassifyError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("ラベルファイルが見つかりません: {0}")]
    NoLabelFiles(String),

    #[error("レジストリを構築できません。`eco-classify config --set-registry FILE` で設定ファイルを指定するか、組み込みテーブルを有効にしてください")]
    NoRegistrySource,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] eco_classify_common::Error),
}

pub type Result<T> = std::result::Result<T, EcoClassifyError>;
