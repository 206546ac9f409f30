//! Eco Classify Common Library
//!
//! 画像ラベルから廃棄物の分類（有機・リサイクル・非リサイクル）と
//! 信頼度を決定するエンジン。CLIとその他の呼び出し元で共有される。
//!
//! ## 処理フロー
//! 1. KeywordRegistry: 起動時に一度だけ構築する不変のキーワード表
//! 2. スコア集計: ラベルごとに最長一致のキーワードを探し、重み付きスコアを加算
//! 3. 決定: 最高スコアの分類と正規化した信頼度

pub mod builtin;
pub mod classifier;
pub mod decision;
pub mod error;
pub mod parser;
pub mod registry;
pub mod scoring;
pub mod types;

pub use classifier::Classifier;
pub use decision::{resolve, Decision};
pub use error::{Error, Result};
pub use parser::{extract_json, parse_labels};
pub use registry::{KeywordRegistry, RegistryConfig};
pub use scoring::{score_labels, ScoreSheet};
pub use types::{
    Category, CategoryScore, CategoryScores, ClassificationResult, KeywordRule, LabelDetection,
    LabelIssue, MatchedLabel, Priority, SkippedLabel,
};
