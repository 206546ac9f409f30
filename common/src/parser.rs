//! ラベル入力パーサー
//!
//! 画像認識サービスの出力や手書きのラベルファイルからJSONを抽出し、
//! LabelDetectionの列に変換する

use crate::error::{Error, Result};
use crate::types::LabelDetection;
use serde_json::Value;

/// ラッパーオブジェクトでラベル列を持つキー
const LIST_KEYS: [&str; 2] = ["labels", "labelAnnotations"];

/// 文字列からJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 最初の `[` / `{` から対応する最後の `]` / `}` まで
/// 3. エラー
///
/// # Examples
/// ```
/// use eco_classify_common::extract_json;
///
/// let text = "labels:\n[{\"text\": \"banana\", \"confidence\": 0.9}]";
/// let json = extract_json(text).unwrap();
/// assert!(json.starts_with('['));
/// ```
pub fn extract_json(text: &str) -> Result<&str> {
    if let Some(start_marker) = text.find("```json") {
        let start = start_marker + "```json".len();
        if let Some(end_offset) = text[start..].find("```") {
            return Ok(text[start..start + end_offset].trim());
        }
    }

    let start = text.find(&['[', '{'][..]);
    if let Some(start) = start {
        let close = if text[start..].starts_with('[') { ']' } else { '}' };
        if let Some(end) = text.rfind(close) {
            if end > start {
                return Ok(&text[start..=end]);
            }
        }
    }

    Err(Error::Parse("no JSON found in label input".into()))
}

/// ラベル入力をパース
///
/// 配列・`labels`ラッパー・`labelAnnotations` のいずれの形式も受け付ける。
/// 個々のラベルの妥当性はここでは検査しない（分類時にスキップされる）。
/// 形式そのものが違う場合だけエラーになる。
pub fn parse_labels(text: &str) -> Result<Vec<LabelDetection>> {
    let json_str = extract_json(text)?;
    let value: Value = serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("label JSON parse error: {}", e)))?;

    let items = match &value {
        Value::Array(items) => items,
        Value::Object(map) => {
            let list = LIST_KEYS
                .iter()
                .find_map(|key| map.get(*key).map(|v| (*key, v)));
            match list {
                Some((_, Value::Array(items))) => items,
                Some((key, other)) => {
                    return Err(Error::Parse(format!(
                        "`{}` must be an array, found {}",
                        key,
                        json_kind(other)
                    )))
                }
                None => {
                    return Err(Error::Parse(format!(
                        "expected a label array or an object with `labels` / `labelAnnotations`, found keys: {}",
                        map.keys().cloned().collect::<Vec<_>>().join(", ")
                    )))
                }
            }
        }
        other => {
            return Err(Error::Parse(format!(
                "expected a label array or object, found {}",
                json_kind(other)
            )))
        }
    };

    Ok(items.iter().map(LabelDetection::from_value).collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
