//! eco-classify
//!
//! 画像認識ラベルから廃棄物を分類するCLIの本体。
//! 分類エンジンは `eco_classify_common` にあり、ここでは設定・ログ・
//! ラベルファイルの読み込みと一括処理を扱う。

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod rules;
pub mod scanner;
