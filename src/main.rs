use anyhow::Context;
use clap::Parser;
use eco_classify::{batch, cli, config, logging, record, rules};
use cli::{Cli, Commands, RegistryArgs};
use config::Config;
use eco_classify_common::{Category, Classifier, KeywordRegistry};
use record::ClassificationRecord;
use std::path::Path;
use std::sync::Arc;

fn build_registry(config: &Config, args: RegistryArgs) -> anyhow::Result<KeywordRegistry> {
    let overlay = config.registry_file(args.registry);
    let registry = rules::load_registry(rules::RegistrySource {
        use_builtin: config.use_builtin && !args.no_builtin,
        overlay: overlay.as_deref(),
    })
    .context("キーワードレジストリの構築に失敗しました")?;
    Ok(registry)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("書き込み失敗: {}", path.display()))?;
    Ok(())
}

fn print_record(record: &ClassificationRecord) {
    for m in &record.matched_labels {
        println!(
            "  📊 \"{}\" → \"{}\" → {} [優先度: {}, スコア: {:.3}]",
            m.label, m.keyword, m.category, m.priority, m.weighted_score
        );
    }
    for s in &record.skipped_labels {
        println!("  ⚠️  #{} \"{}\" をスキップ: {}", s.index, s.label, s.reason);
    }
    match &record.classification {
        Some(name) => println!("  🎯 {} (信頼度: {:.1}%)", name, record.confidence * 100.0),
        None => println!("  ⚠️  一致するキーワードがありません（分類なし）"),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Classify { input, output, report_id, top, registry } => {
            println!("♻️  eco-classify - 分類\n");

            let registry = build_registry(&config, registry)?;
            let classifier = Classifier::new(Arc::new(registry));
            let top = top.unwrap_or(config.top_labels);

            let record = batch::classify_file(&classifier, &input, top)
                .with_context(|| format!("分類に失敗: {}", input.display()))?
                .with_report_id(report_id);

            println!("[{}]", record.source);
            print_record(&record);

            if let Some(output) = output {
                write_json(&output, &record)?;
                println!("\n✔ 結果を保存: {}", output.display());
            }
        }

        Commands::Batch { folder, output, recursive, top, registry } => {
            println!("♻️  eco-classify - 一括分類\n");

            // 1. スキャン
            println!("[1/3] ラベルファイルをスキャン中...");
            let output = batch::output_path(&folder, output);
            let files = batch::scan_inputs(&folder, recursive, &output)?;
            if files.is_empty() {
                return Err(eco_classify::error::EcoClassifyError::NoLabelFiles(
                    folder.display().to_string(),
                )
                .into());
            }
            println!("✔ {}件のラベルファイルを検出\n", files.len());

            // 2. 分類
            println!("[2/3] 分類中...");
            let registry = build_registry(&config, registry)?;
            let classifier = Classifier::new(Arc::new(registry));
            let top = top.unwrap_or(config.top_labels);
            let outcome = batch::classify_files(&classifier, &files, top, !cli.verbose);
            for category in Category::ALL {
                println!("  {}: {}件", category, outcome.count(category));
            }
            println!("  分類なし: {}件", outcome.unclassified());
            for failure in &outcome.failures {
                println!("  ❌ {}: {}", failure.file_name, failure.error);
            }
            println!("✔ 分類完了\n");

            // 3. 保存
            println!("[3/3] 結果を保存中...");
            batch::write_records(&output, &outcome.records)
                .with_context(|| format!("書き込み失敗: {}", output.display()))?;
            println!("✔ 結果を保存: {}", output.display());

            println!("\n✅ 完了");
        }

        Commands::Rules { category, lookup, registry } => {
            let registry = build_registry(&config, registry)?;

            if let Some(text) = lookup {
                let candidates = registry.candidates(&text);
                if candidates.is_empty() {
                    println!("\"{}\" に一致するキーワードはありません", text);
                }
                for (i, rule) in candidates.iter().enumerate() {
                    let marker = if i == 0 { "→" } else { " " };
                    println!(
                        "{} {:<24} {:<14} 優先度 {}",
                        marker, rule.keyword, rule.category.display_name(), rule.priority
                    );
                }
                return Ok(());
            }

            let mut shown = 0;
            for rule in registry.rules() {
                if category.is_some_and(|c| c != rule.category) {
                    continue;
                }
                println!(
                    "{:<24} {:<14} 優先度 {}",
                    rule.keyword, rule.category.display_name(), rule.priority
                );
                shown += 1;
            }
            println!("\n{}件 / 全{}件", shown, registry.len());
        }

        Commands::Config { set_registry, show } => {
            let mut config = config;

            if let Some(path) = set_registry {
                config.set_registry(path)?;
                println!("✔ キーワード設定ファイルを登録しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  キーワード設定: {}",
                    config
                        .registry_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  組み込みテーブル: {}", if config.use_builtin { "有効" } else { "無効" });
                println!("  検出ラベル数: {}", config.top_labels);
            }
        }
    }

    Ok(())
}
