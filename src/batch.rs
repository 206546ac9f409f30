//! 一括分類
//!
//! ラベルファイルを並列に読み込み・分類する。レジストリは全スレッドで
//! 共有され、各呼び出しは自分の集計だけを持つ。

use crate::error::{EcoClassifyError, Result};
use crate::record::ClassificationRecord;
use crate::scanner::{self, LabelFile};
use eco_classify_common::{parse_labels, Category, Classifier};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// 出力先を指定しない場合のファイル名（入力フォルダ直下）
pub const DEFAULT_OUTPUT_FILE: &str = "classification.json";

/// 失敗したファイル
#[derive(Debug, Clone)]
pub struct BatchFailure {
    pub file_name: String,
    pub error: String,
}

/// 一括分類の結果
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// 入力ファイル順
    pub records: Vec<ClassificationRecord>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn count(&self, category: Category) -> usize {
        self.records
            .iter()
            .filter(|r| r.category == Some(category))
            .count()
    }

    pub fn unclassified(&self) -> usize {
        self.records.iter().filter(|r| r.category.is_none()).count()
    }
}

/// 出力先を決める
pub fn output_path(folder: &Path, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| folder.join(DEFAULT_OUTPUT_FILE))
}

/// 一括分類の対象を列挙する
///
/// 出力先と既定の出力ファイルは、前回の結果を入力として読まないよう除外する。
pub fn scan_inputs(folder: &Path, recursive: bool, output: &Path) -> Result<Vec<LabelFile>> {
    let default_output = folder.join(DEFAULT_OUTPUT_FILE);
    scanner::scan_folder_excluding(folder, recursive, &[output, default_output.as_path()])
}

/// 分類レコードをJSONで書き出す
pub fn write_records(path: &Path, records: &[ClassificationRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// 1ファイルを分類する
pub fn classify_file(
    classifier: &Classifier,
    path: &Path,
    top_labels: usize,
) -> Result<ClassificationRecord> {
    if !path.exists() {
        return Err(EcoClassifyError::FileNotFound(path.display().to_string()));
    }

    let start = Instant::now();
    let content = std::fs::read_to_string(path)?;
    let labels = parse_labels(&content)?;
    let result = classifier.classify(&labels);
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ClassificationRecord::new(
        source,
        &labels,
        result,
        start.elapsed(),
        top_labels,
    ))
}

/// 複数ファイルを並列に分類する
///
/// 読み込みや解析に失敗したファイルは `failures` に記録し、残りの処理を続ける。
pub fn classify_files(
    classifier: &Classifier,
    files: &[LabelFile],
    top_labels: usize,
    show_progress: bool,
) -> BatchOutcome {
    let progress = if show_progress {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<(String, Result<ClassificationRecord>)> = files
        .par_iter()
        .map(|file| {
            let result = classify_file(classifier, &file.path, top_labels);
            progress.inc(1);
            (file.file_name.clone(), result)
        })
        .collect();

    progress.finish_and_clear();

    let mut outcome = BatchOutcome::default();
    for (file_name, result) in results {
        match result {
            Ok(record) => outcome.records.push(record),
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "failed to classify label file");
                outcome.failures.push(BatchFailure {
                    file_name,
                    error: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        classified = outcome.records.len() - outcome.unclassified(),
        unclassified = outcome.unclassified(),
        failed = outcome.failures.len(),
        "batch finished"
    );

    outcome
}
