//! 分類の型定義
//!
//! CLIとエンジンで共有される型:
//! - LabelDetection: 外部の画像認識サービスが出力したラベル
//! - KeywordRule: キーワード → 分類・優先度
//! - ClassificationResult: 最終出力（分類・信頼度・照合履歴）

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// 廃棄物の分類
///
/// 閉じた集合で、実行時に追加されることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Organic,
    Recyclable,
    NonRecyclable,
}

impl Category {
    /// 優先順（同点時はこの順で勝つ）
    pub const ALL: [Category; 3] = [
        Category::NonRecyclable,
        Category::Recyclable,
        Category::Organic,
    ];

    /// 優先順位（小さいほど強い）
    pub fn precedence(self) -> u8 {
        match self {
            Category::NonRecyclable => 0,
            Category::Recyclable => 1,
            Category::Organic => 2,
        }
    }

    /// 識別子（設定ファイル・JSON出力用）
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Organic => "organic",
            Category::Recyclable => "recyclable",
            Category::NonRecyclable => "nonRecyclable",
        }
    }

    /// 利用者向けの表示名
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Organic => "Orgánico",
            Category::Recyclable => "Reciclable",
            Category::NonRecyclable => "No Reciclable",
        }
    }

    /// 非リサイクルは安全側に倒すため2倍
    pub fn bonus(self) -> f64 {
        match self {
            Category::NonRecyclable => 2.0,
            _ => 1.0,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(&['_', '-'][..], " ");
        match normalized.as_str() {
            "organic" | "orgánico" | "organico" => Ok(Category::Organic),
            "recyclable" | "reciclable" | "aprovechable" => Ok(Category::Recyclable),
            "nonrecyclable" | "non recyclable" | "no reciclable" | "no aprovechable" => {
                Ok(Category::NonRecyclable)
            }
            _ => Err(format!(
                "Unknown category: {}. Use organic, recyclable, or nonRecyclable",
                s
            )),
        }
    }
}

/// キーワードの具体性（1=汎用 〜 4=特定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const LOW: Priority = Priority(1);
    pub const MEDIUM: Priority = Priority(2);
    pub const HIGH: Priority = Priority(3);
    pub const CRITICAL: Priority = Priority(4);

    pub fn new(value: u8) -> crate::Result<Self> {
        Self::try_from(value)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn weight(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u8> for Priority {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=4).contains(&value) {
            Ok(Priority(value))
        } else {
            Err(Error::InvalidPriority(value))
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> u8 {
        priority.0
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 画像認識サービスが検出したラベル
///
/// 認識サービスのネイティブ形式（`description` / `score`）もそのまま受け付ける。
/// 読み込みは項目単位で寛容に行い、テキストや信頼度が欠けた項目も
/// ファイル全体を失敗させずに取り込む（分類時に `validate` でスキップされる）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelDetection {
    pub text: String,
    /// 欠落・数値以外はNaN
    pub confidence: f64,
}

const TEXT_KEYS: [&str; 3] = ["text", "description", "label"];
const CONFIDENCE_KEYS: [&str; 2] = ["confidence", "score"];

impl LabelDetection {
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }

    /// JSON値から1件を取り出す
    ///
    /// オブジェクト以外・文字列でないテキストは空文字、
    /// 数値でない信頼度はNaNとして扱う。
    pub fn from_value(value: &serde_json::Value) -> Self {
        let text = TEXT_KEYS
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .unwrap_or_default();
        let confidence = CONFIDENCE_KEYS
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_f64()))
            .unwrap_or(f64::NAN);
        Self::new(text, confidence)
    }

    /// ラベルの妥当性を確認
    pub fn validate(&self) -> Result<(), LabelIssue> {
        if self.text.trim().is_empty() {
            return Err(LabelIssue::EmptyText);
        }
        if self.confidence.is_nan() {
            return Err(LabelIssue::MissingConfidence);
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(LabelIssue::ConfidenceOutOfRange {
                confidence: self.confidence,
            });
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for LabelDetection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// 不正ラベルの理由
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LabelIssue {
    EmptyText,
    /// 信頼度が無い・null・数値でない
    MissingConfidence,
    #[serde(rename_all = "camelCase")]
    ConfidenceOutOfRange { confidence: f64 },
}

impl std::fmt::Display for LabelIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelIssue::EmptyText => write!(f, "empty label text"),
            LabelIssue::MissingConfidence => write!(f, "confidence missing or not a number"),
            LabelIssue::ConfidenceOutOfRange { confidence } => {
                write!(f, "confidence {} outside [0, 1]", confidence)
            }
        }
    }
}

/// キーワードルール
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub category: Category,
    pub priority: Priority,
}

impl KeywordRule {
    pub fn new(keyword: impl Into<String>, category: Category, priority: Priority) -> Self {
        Self {
            keyword: keyword.into(),
            category,
            priority,
        }
    }

    /// キーワード長（文字数）
    pub fn len(&self) -> usize {
        self.keyword.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty()
    }
}

/// 照合履歴の1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedLabel {
    pub label: String,
    pub keyword: String,
    pub category: Category,
    pub priority: Priority,
    pub weighted_score: f64,
}

/// スキップしたラベル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedLabel {
    /// 入力列での位置
    pub index: usize,
    pub label: String,
    pub reason: LabelIssue,
}

/// 分類ごとの累積
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub score: f64,
    pub count: usize,
}

/// 3分類のスコア集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub organic: CategoryScore,
    pub recyclable: CategoryScore,
    pub non_recyclable: CategoryScore,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> CategoryScore {
        match category {
            Category::Organic => self.organic,
            Category::Recyclable => self.recyclable,
            Category::NonRecyclable => self.non_recyclable,
        }
    }

    /// スコアを加算した新しい集計を返す
    pub fn with_added(mut self, category: Category, weighted_score: f64) -> Self {
        let slot = match category {
            Category::Organic => &mut self.organic,
            Category::Recyclable => &mut self.recyclable,
            Category::NonRecyclable => &mut self.non_recyclable,
        };
        slot.score += weighted_score;
        slot.count += 1;
        self
    }

    /// 全分類の合計スコア
    pub fn total(&self) -> f64 {
        Category::ALL.iter().map(|c| self.get(*c).score).sum()
    }

    pub fn is_zero(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).score == 0.0)
    }
}

/// 分類結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// 一致なしの場合はNone
    pub category: Option<Category>,
    pub confidence: f64,
    #[serde(default)]
    pub matched_labels: Vec<MatchedLabel>,
    #[serde(default)]
    pub skipped_labels: Vec<SkippedLabel>,
    #[serde(default)]
    pub scores: CategoryScores,
}

impl ClassificationResult {
    pub fn is_classified(&self) -> bool {
        self.category.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_precedence_order() {
        assert!(Category::NonRecyclable.precedence() < Category::Recyclable.precedence());
        assert!(Category::Recyclable.precedence() < Category::Organic.precedence());
        assert_eq!(Category::ALL[0], Category::NonRecyclable);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("organic".parse::<Category>(), Ok(Category::Organic));
        assert_eq!("Orgánico".parse::<Category>(), Ok(Category::Organic));
        assert_eq!("No Reciclable".parse::<Category>(), Ok(Category::NonRecyclable));
        assert_eq!("nonRecyclable".parse::<Category>(), Ok(Category::NonRecyclable));
        assert_eq!("non-recyclable".parse::<Category>(), Ok(Category::NonRecyclable));
        assert!("metal".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&Category::NonRecyclable).unwrap();
        assert_eq!(json, "\"nonRecyclable\"");
    }

    #[test]
    fn test_priority_range() {
        assert!(Priority::new(0).is_err());
        assert!(Priority::new(5).is_err());
        assert_eq!(Priority::new(4).unwrap(), Priority::CRITICAL);
        assert!(serde_json::from_str::<Priority>("9").is_err());
        assert_eq!(serde_json::from_str::<Priority>("3").unwrap(), Priority::HIGH);
    }

    #[test]
    fn test_label_detection_aliases() {
        let json = r#"{"description": "Plastic bottle", "score": 0.91}"#;
        let label: LabelDetection = serde_json::from_str(json).unwrap();
        assert_eq!(label.text, "Plastic bottle");
        assert!((label.confidence - 0.91).abs() < 1e-9);
    }

    #[test]
    fn test_label_validate() {
        assert!(LabelDetection::new("banana", 0.5).validate().is_ok());
        assert!(LabelDetection::new("banana", 0.0).validate().is_ok());
        assert!(LabelDetection::new("banana", 1.0).validate().is_ok());
        assert_eq!(
            LabelDetection::new("   ", 0.5).validate(),
            Err(LabelIssue::EmptyText)
        );
        assert!(matches!(
            LabelDetection::new("banana", 1.2).validate(),
            Err(LabelIssue::ConfidenceOutOfRange { .. })
        ));
        assert_eq!(
            LabelDetection::new("banana", f64::NAN).validate(),
            Err(LabelIssue::MissingConfidence)
        );
    }

    #[test]
    fn test_label_detection_lenient_fields() {
        let missing: LabelDetection = serde_json::from_str(r#"{"text": "glass bottle"}"#).unwrap();
        assert_eq!(missing.text, "glass bottle");
        assert_eq!(missing.validate(), Err(LabelIssue::MissingConfidence));

        let null: LabelDetection =
            serde_json::from_str(r#"{"text": "trash", "confidence": null}"#).unwrap();
        assert_eq!(null.validate(), Err(LabelIssue::MissingConfidence));

        let not_object: LabelDetection = serde_json::from_str("42").unwrap();
        assert_eq!(not_object.validate(), Err(LabelIssue::EmptyText));
    }

    #[test]
    fn test_scores_with_added() {
        let scores = CategoryScores::default()
            .with_added(Category::Organic, 1.5)
            .with_added(Category::Organic, 0.5)
            .with_added(Category::NonRecyclable, 2.0);

        assert!((scores.organic.score - 2.0).abs() < 1e-9);
        assert_eq!(scores.organic.count, 2);
        assert_eq!(scores.non_recyclable.count, 1);
        assert!((scores.total() - 4.0).abs() < 1e-9);
        assert!(!scores.is_zero());
        assert!(CategoryScores::default().is_zero());
    }

    #[test]
    fn test_result_serialize() {
        let result = ClassificationResult {
            category: Some(Category::Recyclable),
            confidence: 1.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"category\":\"recyclable\""));
        assert!(json.contains("\"matchedLabels\":[]"));
    }
}
