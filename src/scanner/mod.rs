use crate::error::{EcoClassifyError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct LabelFile {
    pub path: PathBuf,
    pub file_name: String,
}

const LABEL_EXTENSIONS: &[&str] = &["json", "JSON"];

/// フォルダ内のラベルファイル（*.json）を列挙する
///
/// `recursive` が偽なら直下のみ。結果はパス順にソートされる。
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<LabelFile>> {
    scan_folder_excluding(folder, recursive, &[])
}

/// `exclude` に挙げたファイル（一括分類の出力など）を除いて列挙する
pub fn scan_folder_excluding(
    folder: &Path,
    recursive: bool,
    exclude: &[&Path],
) -> Result<Vec<LabelFile>> {
    if !folder.is_dir() {
        return Err(EcoClassifyError::FolderNotFound(folder.display().to_string()));
    }

    let excluded: Vec<PathBuf> = exclude.iter().map(|p| canonical(p)).collect();

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if excluded.contains(&canonical(path)) {
            tracing::debug!(path = %path.display(), "skipping excluded file");
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if is_label_extension(&ext_str) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                files.push(LabelFile {
                    path: path.to_path_buf(),
                    file_name,
                });
            }
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(files)
}

/// まだ存在しないパスはそのまま比較する
fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn is_label_extension(ext: &str) -> bool {
    LABEL_EXTENSIONS.contains(&ext)
}
