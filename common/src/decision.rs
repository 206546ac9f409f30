//! 分類の決定
//!
//! 集計済みスコアから勝者の分類と正規化した信頼度を求める。

use crate::types::{Category, CategoryScores};

/// 同じ分類のラベルが1件増えるごとの信頼度ブースト
pub const COUNT_BOOST_STEP: f64 = 0.15;
/// ブーストの上限（+50%）
pub const COUNT_BOOST_MAX: f64 = 1.5;

/// 決定結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// 一致なしの場合はNone
    pub category: Option<Category>,
    pub confidence: f64,
}

impl Decision {
    pub const UNDETERMINED: Decision = Decision {
        category: None,
        confidence: 0.0,
    };
}

/// 件数によるブースト: min(1 + (count - 1) × 0.15, 1.5)
pub fn count_boost(count: usize) -> f64 {
    let extra = count.saturating_sub(1) as f64;
    (1.0 + extra * COUNT_BOOST_STEP).min(COUNT_BOOST_MAX)
}

/// 最高スコアの分類（同点なら 非リサイクル > リサイクル > 有機）
pub fn best_category(scores: &CategoryScores) -> Option<(Category, f64)> {
    Category::ALL
        .iter()
        .map(|&c| (c, scores.get(c).score))
        .fold(None, |best, (category, score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ if score > 0.0 => Some((category, score)),
            _ => best,
        })
}

/// スコアから分類と信頼度を決定する
pub fn resolve(scores: &CategoryScores) -> Decision {
    let Some((category, max_score)) = best_category(scores) else {
        return Decision::UNDETERMINED;
    };

    let total = scores.total();
    let raw_confidence = max_score / total;
    let boost = count_boost(scores.get(category).count);
    let confidence = (raw_confidence * boost).min(1.0);

    tracing::debug!(
        category = category.as_str(),
        confidence,
        raw_confidence,
        boost,
        organic = scores.organic.score,
        recyclable = scores.recyclable.score,
        non_recyclable = scores.non_recyclable.score,
        "final decision"
    );

    Decision {
        category: Some(category),
        confidence,
    }
}
