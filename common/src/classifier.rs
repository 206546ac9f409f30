//! 分類器
//!
//! レジストリを注入して使う。状態を持たないため、複数スレッドから
//! 同時に呼び出してよい。

use crate::decision::resolve;
use crate::error::Result;
use crate::registry::KeywordRegistry;
use crate::scoring::score_labels;
use crate::types::{ClassificationResult, LabelDetection};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Classifier {
    registry: Arc<KeywordRegistry>,
}

impl Classifier {
    pub fn new(registry: Arc<KeywordRegistry>) -> Self {
        Self { registry }
    }

    /// 組み込みテーブルを使う分類器
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(KeywordRegistry::builtin()?)))
    }

    pub fn registry(&self) -> &KeywordRegistry {
        &self.registry
    }

    /// ラベル列を分類する
    pub fn classify(&self, labels: &[LabelDetection]) -> ClassificationResult {
        let sheet = score_labels(&self.registry, labels);
        let decision = resolve(&sheet.scores);

        if decision.category.is_none() {
            tracing::debug!(labels = labels.len(), "no matching keywords found in labels");
        }

        ClassificationResult {
            category: decision.category,
            confidence: decision.confidence,
            matched_labels: sheet.matched,
            skipped_labels: sheet.skipped,
            scores: sheet.scores,
        }
    }
}
