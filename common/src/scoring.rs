//! スコア集計
//!
//! ラベル列をレジストリと照合し、分類ごとの重み付きスコアを集計する。
//! 呼び出しごとに新しい集計を作って返す純粋関数。

use crate::registry::KeywordRegistry;
use crate::types::{CategoryScores, KeywordRule, LabelDetection, MatchedLabel, SkippedLabel};

/// 集計結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSheet {
    pub scores: CategoryScores,
    /// 入力順の照合履歴
    pub matched: Vec<MatchedLabel>,
    /// 不正としてスキップしたラベル
    pub skipped: Vec<SkippedLabel>,
}

/// 重み付きスコア = 信頼度 × 優先度 × ボーナス
pub fn weighted_score(label: &LabelDetection, rule: &KeywordRule) -> f64 {
    label.confidence * rule.priority.weight() * rule.category.bonus()
}

/// ラベル列のスコアを集計する
///
/// 不正なラベル（空文字・範囲外の信頼度）はスキップし、残りで集計を続ける。
/// どのキーワードにも一致しないラベルは何も加算しない。
pub fn score_labels(registry: &KeywordRegistry, labels: &[LabelDetection]) -> ScoreSheet {
    labels
        .iter()
        .enumerate()
        .fold(ScoreSheet::default(), |mut sheet, (index, label)| {
            if let Err(reason) = label.validate() {
                tracing::warn!(index, label = %label.text, %reason, "skipping invalid label");
                sheet.skipped.push(SkippedLabel {
                    index,
                    label: label.text.clone(),
                    reason,
                });
                return sheet;
            }

            let Some(rule) = registry.lookup(&label.text) else {
                tracing::trace!(label = %label.text, "no keyword matched");
                return sheet;
            };

            let score = weighted_score(label, rule);
            tracing::debug!(
                label = %label.text,
                confidence = label.confidence,
                keyword = %rule.keyword,
                category = rule.category.as_str(),
                priority = rule.priority.get(),
                weighted = score,
                "label matched"
            );

            sheet.scores = sheet.scores.with_added(rule.category, score);
            sheet.matched.push(MatchedLabel {
                label: label.text.clone(),
                keyword: rule.keyword.clone(),
                category: rule.category,
                priority: rule.priority,
                weighted_score: score,
            });
            sheet
        })
}
