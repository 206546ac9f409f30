//! 分類レコード
//!
//! 分類結果に、呼び出し元が保存・表示に使うメタデータ
//! （処理時間・分類日時・上位ラベルなど）を付けたもの。

use eco_classify_common::{
    Category, ClassificationResult, LabelDetection, MatchedLabel, SkippedLabel,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// ルールベース分類器のバージョン
pub const MODEL_VERSION: &str = "keyword-rules-v1";

/// 出力用の分類レコード
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    /// 入力ラベルファイル
    #[serde(default)]
    pub source: String,

    /// 表示名（一致なしはnull）
    pub classification: Option<String>,

    pub category: Option<Category>,

    pub confidence: f64,

    pub model_version: String,

    pub processing_time_ms: u64,

    /// RFC 3339
    pub classified_at: String,

    /// 信頼度の高い順の入力ラベル
    #[serde(default)]
    pub detected_labels: Vec<LabelDetection>,

    #[serde(default)]
    pub matched_labels: Vec<MatchedLabel>,

    #[serde(default)]
    pub skipped_labels: Vec<SkippedLabel>,
}

impl ClassificationRecord {
    pub fn new(
        source: impl Into<String>,
        labels: &[LabelDetection],
        result: ClassificationResult,
        elapsed: Duration,
        top_labels: usize,
    ) -> Self {
        Self {
            report_id: None,
            source: source.into(),
            classification: result.category.map(|c| c.display_name().to_string()),
            category: result.category,
            confidence: result.confidence,
            model_version: MODEL_VERSION.to_string(),
            processing_time_ms: elapsed.as_millis() as u64,
            classified_at: chrono::Utc::now().to_rfc3339(),
            detected_labels: top_detected_labels(labels, top_labels),
            matched_labels: result.matched_labels,
            skipped_labels: result.skipped_labels,
        }
    }

    pub fn with_report_id(mut self, report_id: Option<String>) -> Self {
        self.report_id = report_id;
        self
    }
}

/// 信頼度の高い順に上位n件（同点は入力順）
pub fn top_detected_labels(labels: &[LabelDetection], n: usize) -> Vec<LabelDetection> {
    let mut sorted: Vec<LabelDetection> = labels
        .iter()
        .filter(|l| !l.confidence.is_nan())
        .cloned()
        .collect();
    sorted.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<LabelDetection> {
        vec![
            LabelDetection::new("Trash", 0.6),
            LabelDetection::new("Banana", 0.9),
            LabelDetection::new("Yellow", 0.9),
            LabelDetection::new("Fruit", 0.75),
        ]
    }

    #[test]
    fn test_top_detected_labels() {
        let top = top_detected_labels(&labels(), 3);
        let names: Vec<&str> = top.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(names, vec!["Banana", "Yellow", "Fruit"]);
    }

    #[test]
    fn test_top_detected_labels_short_input() {
        assert_eq!(top_detected_labels(&labels(), 10).len(), 4);
        assert!(top_detected_labels(&[], 5).is_empty());
    }

    #[test]
    fn test_record_unclassified() {
        let record = ClassificationRecord::new(
            "sky.json",
            &[LabelDetection::new("Sky", 0.99)],
            ClassificationResult::default(),
            Duration::from_millis(3),
            5,
        );

        assert!(record.classification.is_none());
        assert_eq!(record.confidence, 0.0);
        assert_eq!(record.model_version, MODEL_VERSION);
        assert_eq!(record.processing_time_ms, 3);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"classification\":null"));
        assert!(!json.contains("reportId"));
    }

    #[test]
    fn test_record_display_name() {
        let result = ClassificationResult {
            category: Some(Category::NonRecyclable),
            confidence: 1.0,
            ..Default::default()
        };
        let record = ClassificationRecord::new("a.json", &[], result, Duration::ZERO, 5)
            .with_report_id(Some("ECO-12345678".to_string()));

        assert_eq!(record.classification.as_deref(), Some("No Reciclable"));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"reportId\":\"ECO-12345678\""));
        assert!(json.contains("\"category\":\"nonRecyclable\""));
    }
}
