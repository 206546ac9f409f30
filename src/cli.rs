use clap::{Parser, Subcommand};
use eco_classify_common::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eco-classify")]
#[command(about = "画像ラベルから廃棄物を分類するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// レジストリ指定（各サブコマンド共通）
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RegistryArgs {
    /// キーワード設定ファイル（JSON）
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// 組み込みテーブルを使わない
    #[arg(long)]
    pub no_builtin: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ラベルファイルを1件分類
    Classify {
        /// ラベルJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// レポートID
        #[arg(long)]
        report_id: Option<String>,

        /// 出力に残す検出ラベル数（省略時は設定値）
        #[arg(long)]
        top: Option<usize>,

        #[command(flatten)]
        registry: RegistryArgs,
    },

    /// フォルダ内のラベルファイルを一括分類
    Batch {
        /// ラベルファイルのフォルダ
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力JSONファイル（デフォルト: 入力フォルダ/classification.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// 出力に残す検出ラベル数（省略時は設定値）
        #[arg(long)]
        top: Option<usize>,

        #[command(flatten)]
        registry: RegistryArgs,
    },

    /// キーワードルールを表示
    Rules {
        /// 分類で絞り込み (organic/recyclable/nonRecyclable)
        #[arg(short, long)]
        category: Option<Category>,

        /// テキストがどのルールに一致するかを表示
        #[arg(short, long)]
        lookup: Option<String>,

        #[command(flatten)]
        registry: RegistryArgs,
    },

    /// 設定を表示/編集
    Config {
        /// キーワード設定ファイルを登録
        #[arg(long)]
        set_registry: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
