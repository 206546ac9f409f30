//! キーワードレジストリ
//!
//! キーワード → (分類, 優先度) の不変テーブル。起動時に一度だけ構築し、
//! 分類処理中は読み取り専用で共有する。
//!
//! ## 照合規則
//! 1. ラベルを小文字化し、部分文字列として含まれるキーワードを探す
//! 2. 最も長い（文字数）キーワードが勝つ
//! 3. 同じ長さなら分類の優先順（非リサイクル > リサイクル > 有機）
//! 4. それでも同じならキーワードの辞書順

use crate::builtin::BUILTIN_RULES;
use crate::error::{Error, Result};
use crate::types::{Category, KeywordRule, Priority};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// キーワードの正規化（前後空白除去・小文字化）
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

/// 人が編集するレジストリ設定（分類ごとに キーワード → 優先度）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    #[serde(default)]
    pub organic: BTreeMap<String, u8>,
    #[serde(default)]
    pub recyclable: BTreeMap<String, u8>,
    #[serde(default)]
    pub non_recyclable: BTreeMap<String, u8>,
}

impl RegistryConfig {
    /// 組み込みテーブル
    pub fn builtin() -> Self {
        let mut config = Self::default();
        for (keyword, category, priority) in BUILTIN_RULES {
            config
                .section_mut(*category)
                .insert((*keyword).to_string(), *priority);
        }
        config
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn section(&self, category: Category) -> &BTreeMap<String, u8> {
        match category {
            Category::Organic => &self.organic,
            Category::Recyclable => &self.recyclable,
            Category::NonRecyclable => &self.non_recyclable,
        }
    }

    fn section_mut(&mut self, category: Category) -> &mut BTreeMap<String, u8> {
        match category {
            Category::Organic => &mut self.organic,
            Category::Recyclable => &mut self.recyclable,
            Category::NonRecyclable => &mut self.non_recyclable,
        }
    }

    /// 設定をマージ（後から追加した設定が優先）
    ///
    /// 別の分類へ移されたキーワードは元の分類から削除される。
    pub fn merge(&mut self, other: &RegistryConfig) {
        for category in Category::ALL {
            for (keyword, priority) in other.section(category) {
                let key = normalize_keyword(keyword);
                for section in Category::ALL {
                    self.section_mut(section)
                        .retain(|existing, _| normalize_keyword(existing) != key);
                }
                self.section_mut(category).insert(key, *priority);
            }
        }
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.section(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 不変のキーワードテーブル
///
/// ルールは照合順（長さ降順 → 分類優先順 → 辞書順）に並べて保持するため、
/// `lookup` は最初に含まれたキーワードを返すだけでよい。
#[derive(Debug, Clone)]
pub struct KeywordRegistry {
    rules: Vec<KeywordRule>,
    index: HashMap<String, usize>,
}

impl KeywordRegistry {
    /// ルール列から構築
    ///
    /// キーワードは正規化される。空・重複・空白のみのキーワードはエラー。
    pub fn from_rules(rules: impl IntoIterator<Item = KeywordRule>) -> Result<Self> {
        let mut normalized: Vec<KeywordRule> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for rule in rules {
            let keyword = normalize_keyword(&rule.keyword);
            if keyword.is_empty() {
                return Err(Error::InvalidKeyword(rule.keyword));
            }
            if !seen.insert(keyword.clone()) {
                return Err(Error::DuplicateKeyword(keyword));
            }
            normalized.push(KeywordRule {
                keyword,
                ..rule
            });
        }

        if normalized.is_empty() {
            return Err(Error::RegistryEmpty);
        }

        normalized.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| a.category.precedence().cmp(&b.category.precedence()))
                .then_with(|| a.keyword.cmp(&b.keyword))
        });

        let index = normalized
            .iter()
            .enumerate()
            .map(|(i, rule)| (rule.keyword.clone(), i))
            .collect();

        Ok(Self {
            rules: normalized,
            index,
        })
    }

    /// 設定から構築
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let mut rules = Vec::with_capacity(config.len());
        for category in Category::ALL {
            for (keyword, priority) in config.section(category) {
                rules.push(KeywordRule::new(
                    keyword.as_str(),
                    category,
                    Priority::new(*priority)?,
                ));
            }
        }
        let registry = Self::from_rules(rules)?;
        tracing::debug!(
            rules = registry.len(),
            organic = registry.count_by_category(Category::Organic),
            recyclable = registry.count_by_category(Category::Recyclable),
            non_recyclable = registry.count_by_category(Category::NonRecyclable),
            "keyword registry built"
        );
        Ok(registry)
    }

    /// 組み込みテーブルから構築
    pub fn builtin() -> Result<Self> {
        Self::from_config(&RegistryConfig::builtin())
    }

    /// ラベル文字列に最も特定的に一致するルール
    pub fn lookup(&self, label_text: &str) -> Option<&KeywordRule> {
        let text = label_text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| text.contains(rule.keyword.as_str()))
    }

    /// ラベル文字列に含まれる全ルール（照合順）
    pub fn candidates(&self, label_text: &str) -> Vec<&KeywordRule> {
        let text = label_text.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| text.contains(rule.keyword.as_str()))
            .collect()
    }

    /// キーワードの完全一致
    pub fn get(&self, keyword: &str) -> Option<&KeywordRule> {
        self.index
            .get(&normalize_keyword(keyword))
            .map(|&i| &self.rules[i])
    }

    /// 照合順のルール
    pub fn rules(&self) -> impl Iterator<Item = &KeywordRule> {
        self.rules.iter()
    }

    pub fn count_by_category(&self, category: Category) -> usize {
        self.rules.iter().filter(|r| r.category == category).count()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(keyword: &str, category: Category, priority: u8) -> KeywordRule {
        KeywordRule::new(keyword, category, Priority::new(priority).unwrap())
    }

    #[test]
    fn test_builtin_registry() {
        let registry = KeywordRegistry::builtin().unwrap();
        assert_eq!(registry.len(), BUILTIN_RULES.len());
        assert!(registry.len() > 100);
        assert!(registry.count_by_category(Category::NonRecyclable) > 0);
        assert!(registry.count_by_category(Category::Recyclable) > 0);
        assert!(registry.count_by_category(Category::Organic) > 0);
    }

    #[test]
    fn test_lookup_longest_match() {
        let registry = KeywordRegistry::builtin().unwrap();

        let matched = registry.lookup("Plastic bottle").unwrap();
        assert_eq!(matched.keyword, "plastic bottle");
        assert_eq!(matched.category, Category::Recyclable);
        assert_eq!(matched.priority, Priority::HIGH);

        let matched = registry.lookup("bottle").unwrap();
        assert_eq!(matched.keyword, "bottle");
        assert_eq!(matched.priority, Priority::MEDIUM);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let registry = KeywordRegistry::builtin().unwrap();
        let matched = registry.lookup("CHIP BAG").unwrap();
        assert_eq!(matched.keyword, "chip bag");
        assert_eq!(matched.category, Category::NonRecyclable);
    }

    #[test]
    fn test_lookup_no_match() {
        let registry = KeywordRegistry::builtin().unwrap();
        assert!(registry.lookup("sky").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_lookup_counts_characters_not_bytes() {
        // "cáscara" は7文字（8バイト）、"peeling" は7文字（7バイト）
        // 同じ長さなので分類の優先順で決まる
        let registry = KeywordRegistry::from_rules(vec![
            rule("cáscara", Category::Organic, 2),
            rule("peeling", Category::Recyclable, 1),
        ])
        .unwrap();
        assert_eq!(registry.lookup("Cáscara peeling").unwrap().keyword, "peeling");
        assert_eq!(registry.lookup("Cáscara de banano").unwrap().keyword, "cáscara");
    }

    #[test]
    fn test_tie_break_by_category_precedence() {
        let registry = KeywordRegistry::from_rules(vec![
            rule("tea", Category::Organic, 2),
            rule("pet", Category::Recyclable, 1),
            rule("cup", Category::NonRecyclable, 1),
        ])
        .unwrap();

        assert_eq!(registry.lookup("teapet").unwrap().keyword, "pet");
        assert_eq!(registry.lookup("pet tea cup").unwrap().keyword, "cup");
    }

    #[test]
    fn test_tie_break_by_keyword_order() {
        let registry = KeywordRegistry::from_rules(vec![
            rule("tin", Category::Recyclable, 2),
            rule("can", Category::Recyclable, 2),
        ])
        .unwrap();

        // 同じ長さ・同じ分類 → 辞書順
        assert_eq!(registry.lookup("tin can").unwrap().keyword, "can");
        assert_eq!(registry.lookup("can tin").unwrap().keyword, "can");
    }

    #[test]
    fn test_candidates_in_match_order() {
        let registry = KeywordRegistry::builtin().unwrap();
        let candidates: Vec<&str> = registry
            .candidates("plastic bottle")
            .iter()
            .map(|r| r.keyword.as_str())
            .collect();
        assert_eq!(candidates.first(), Some(&"plastic bottle"));
        assert!(candidates.contains(&"bottle"));
        assert!(candidates.contains(&"plastic"));
    }

    #[test]
    fn test_empty_registry_is_error() {
        let result = KeywordRegistry::from_rules(Vec::new());
        assert!(matches!(result, Err(Error::RegistryEmpty)));

        let result = KeywordRegistry::from_config(&RegistryConfig::default());
        assert!(matches!(result, Err(Error::RegistryEmpty)));
    }

    #[test]
    fn test_duplicate_keyword_is_error() {
        let result = KeywordRegistry::from_rules(vec![
            rule("bottle", Category::Recyclable, 2),
            rule(" Bottle ", Category::NonRecyclable, 1),
        ]);
        assert!(matches!(result, Err(Error::DuplicateKeyword(k)) if k == "bottle"));
    }

    #[test]
    fn test_blank_keyword_is_error() {
        let result = KeywordRegistry::from_rules(vec![rule("  ", Category::Organic, 1)]);
        assert!(matches!(result, Err(Error::InvalidKeyword(_))));
    }

    #[test]
    fn test_invalid_priority_in_config() {
        let config = RegistryConfig::from_json(r#"{"organic": {"banana": 7}}"#).unwrap();
        let result = KeywordRegistry::from_config(&config);
        assert!(matches!(result, Err(Error::InvalidPriority(7))));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "nonRecyclable": {"chip bag": 4},
            "recyclable": {"Bottle": 2}
        }"#;
        let config = RegistryConfig::from_json(json).unwrap();
        assert_eq!(config.len(), 2);
        assert!(config.organic.is_empty());

        let registry = KeywordRegistry::from_config(&config).unwrap();
        assert_eq!(registry.get("bottle").unwrap().category, Category::Recyclable);
        assert_eq!(registry.get("CHIP BAG").unwrap().priority, Priority::CRITICAL);
    }

    #[test]
    fn test_config_merge_moves_keyword() {
        let mut config = RegistryConfig::builtin();
        let before = config.len();

        let overlay = RegistryConfig::from_json(
            r#"{"nonRecyclable": {"Cardboard": 3}, "organic": {"mango": 2}}"#,
        )
        .unwrap();
        config.merge(&overlay);

        assert!(!config.recyclable.contains_key("cardboard"));
        assert_eq!(config.non_recyclable.get("cardboard"), Some(&3));
        assert_eq!(config.organic.get("mango"), Some(&2));
        assert_eq!(config.len(), before + 1);
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KeywordRegistry>();
    }
}
