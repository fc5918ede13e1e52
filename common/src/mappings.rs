//! キーワードテーブル
//!
//! 採用要件テキストから検索条件を抽出するための辞書群。
//! テーブルの並び順はそのまま抽出結果の順序・優先順位になる。

use crate::error::{Error, Result};
use crate::types::AgeRange;
use serde::{Deserialize, Serialize};

/// カテゴリコードと表記ゆれ（同義語）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub code: String,
    pub synonyms: Vec<String>,
}

/// カテゴリコード → 同義語の順序付きテーブル
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordTable {
    entries: Vec<KeywordEntry>,
}

impl KeywordTable {
    pub fn new(entries: Vec<KeywordEntry>) -> Self {
        Self { entries }
    }

    fn from_static(entries: &[(&str, &[&str])]) -> Self {
        Self::new(
            entries
                .iter()
                .map(|(code, synonyms)| KeywordEntry {
                    code: code.to_string(),
                    synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 同義語のいずれかを含むカテゴリコードを定義順で返す
    pub fn matching_codes(&self, text: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.synonyms.iter().any(|s| text.contains(s.as_str())))
            .map(|entry| entry.code.clone())
            .collect()
    }

    /// コードの代表表記（最初の同義語）
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .and_then(|entry| entry.synonyms.first())
            .map(|s| s.as_str())
    }

    /// 同じコードは同義語を追加、新しいコードは末尾に追加
    fn merge(&mut self, other: &KeywordTable) {
        for incoming in &other.entries {
            match self.entries.iter_mut().find(|e| e.code == incoming.code) {
                Some(existing) => {
                    for synonym in &incoming.synonyms {
                        if !existing.synonyms.contains(synonym) {
                            existing.synonyms.push(synonym.clone());
                        }
                    }
                }
                None => self.entries.push(incoming.clone()),
            }
        }
    }

    fn validate(&self, table_name: &str) -> Result<()> {
        for entry in &self.entries {
            if entry.code.trim().is_empty() {
                return Err(Error::Config(format!("{}: コードが空です", table_name)));
            }
            if entry.synonyms.iter().any(|s| s.is_empty()) {
                return Err(Error::Config(format!(
                    "{}: '{}' に空の同義語があります",
                    table_name, entry.code
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.code.as_str()) {
                return Err(Error::Config(format!(
                    "{}: コード '{}' が重複しています",
                    table_name, entry.code
                )));
            }
        }

        Ok(())
    }
}

/// 曖昧な年齢表現（「30代前半」など）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyAgeEntry {
    pub phrase: String,
    pub min: u32,
    pub max: u32,
}

impl FuzzyAgeEntry {
    pub fn range(&self) -> AgeRange {
        AgeRange::new(self.min, self.max)
    }
}

/// 曖昧な経験表現（「中堅」など）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyExperienceEntry {
    pub phrase: String,
    pub label: String,
}

/// 抽出に使う辞書一式
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMappings {
    /// 職種
    #[serde(default)]
    pub job_categories: KeywordTable,
    /// 勤務地
    #[serde(default)]
    pub locations: KeywordTable,
    /// 年齢パターン（正規表現、上から順に試す）
    #[serde(default)]
    pub age_patterns: Vec<String>,
    /// 曖昧な年齢表現（パターンより優先）
    #[serde(default)]
    pub fuzzy_age: Vec<FuzzyAgeEntry>,
    /// 曖昧な経験表現
    #[serde(default)]
    pub fuzzy_experience: Vec<FuzzyExperienceEntry>,
}

const JOB_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "corporate_sales",
        &[
            "法人営業",
            "BtoB営業",
            "B2B営業",
            "企業営業",
            "法人向け営業",
            "コーポレート営業",
            "法人セールス",
            "企業向けセールス",
        ],
    ),
    (
        "account_planner",
        &[
            "企画営業",
            "アカウント営業",
            "提案営業",
            "ソリューション営業",
            "アカウントプランナー",
            "営業企画",
        ],
    ),
    (
        "inside_sales",
        &[
            "インサイドセールス",
            "内勤営業",
            "テレセールス",
            "電話営業",
            "オンライン営業",
            "リモート営業",
        ],
    ),
    (
        "engineer",
        &[
            "エンジニア",
            "SE",
            "プログラマー",
            "開発者",
            "システムエンジニア",
            "フロントエンド",
            "バックエンド",
            "フルスタック",
        ],
    ),
    (
        "designer",
        &[
            "デザイナー",
            "UI/UX",
            "グラフィック",
            "Webデザイナー",
            "プロダクトデザイナー",
            "UIデザイナー",
            "UXデザイナー",
        ],
    ),
];

const LOCATIONS: &[(&str, &[&str])] = &[
    ("tokyo", &["東京", "都内", "東京都", "23区", "東京23区", "トーキョー"]),
    ("kanagawa", &["神奈川", "横浜", "川崎", "神奈川県"]),
    ("osaka", &["大阪", "関西", "大阪府", "大阪市"]),
    ("kanto", &["関東", "首都圏", "関東圏", "東京近郊"]),
];

const AGE_PATTERNS: &[&str] = &[
    // 25〜35歳, 25歳から35歳, 25-35歳
    // 区切りは文字クラスではなく選択なので、2文字の「から」と全角の「～」も受け付ける
    r"([0-9]{1,2})歳?(?:から|〜|～|-)([0-9]{1,2})歳",
    r"([0-9]{1,2})-([0-9]{1,2})歳",
    // 30代
    r"([0-9]{1,2})代",
    r"20代|30代|40代",
];

// 「30代前半」が「30代」より先に判定されるよう、具体的な表現を先に並べる
const FUZZY_AGE: &[(&str, u32, u32)] = &[
    ("20代前半", 20, 25),
    ("20代後半", 26, 29),
    ("20代", 20, 29),
    ("30代前半", 30, 35),
    ("30代後半", 36, 39),
    ("30代", 30, 39),
    ("30歳前後", 28, 32),
    ("若手", 22, 30),
    ("シニア", 35, 50),
];

const FUZZY_EXPERIENCE: &[(&str, &str)] = &[
    ("新人", "1年未満"),
    ("若手", "1-3年"),
    ("中堅", "3-7年"),
    ("ベテラン", "7年以上"),
    ("経験者", "1年以上"),
];

impl KeywordMappings {
    /// 組み込み辞書
    pub fn builtin() -> Self {
        Self {
            job_categories: KeywordTable::from_static(JOB_CATEGORIES),
            locations: KeywordTable::from_static(LOCATIONS),
            age_patterns: AGE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            fuzzy_age: FUZZY_AGE
                .iter()
                .map(|(phrase, min, max)| FuzzyAgeEntry {
                    phrase: phrase.to_string(),
                    min: *min,
                    max: *max,
                })
                .collect(),
            fuzzy_experience: FUZZY_EXPERIENCE
                .iter()
                .map(|(phrase, label)| FuzzyExperienceEntry {
                    phrase: phrase.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let mappings: Self = serde_json::from_str(json)?;
        mappings.validate()?;
        Ok(mappings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 辞書をマージ（後から追加した設定が優先）
    ///
    /// 職種・勤務地は同義語を追加、年齢・経験は同じ表現を上書きする。
    /// 新しい曖昧年齢表現は、それが含む既存の表現（「30代中盤」なら「30代」）の
    /// 直前に挿入し、該当がなければ末尾に追加する。新しい経験表現は末尾に追加する。
    ///
    /// 年齢パターンは末尾に追加されるため、組み込みの `([0-9]{1,2})代` などに
    /// 一致する入力では追加パターンは評価されない。
    pub fn merge(&mut self, other: &KeywordMappings) {
        self.job_categories.merge(&other.job_categories);
        self.locations.merge(&other.locations);

        for pattern in &other.age_patterns {
            if !self.age_patterns.contains(pattern) {
                self.age_patterns.push(pattern.clone());
            }
        }

        for incoming in &other.fuzzy_age {
            if let Some(existing) = self
                .fuzzy_age
                .iter_mut()
                .find(|e| e.phrase == incoming.phrase)
            {
                *existing = incoming.clone();
                continue;
            }

            // 含まれる短い表現より前に置く
            match self
                .fuzzy_age
                .iter()
                .position(|e| incoming.phrase.contains(e.phrase.as_str()))
            {
                Some(index) => self.fuzzy_age.insert(index, incoming.clone()),
                None => self.fuzzy_age.push(incoming.clone()),
            }
        }

        for incoming in &other.fuzzy_experience {
            match self
                .fuzzy_experience
                .iter_mut()
                .find(|e| e.phrase == incoming.phrase)
            {
                Some(existing) => *existing = incoming.clone(),
                None => self.fuzzy_experience.push(incoming.clone()),
            }
        }
    }

    /// 空の同義語・表現は全文に一致してしまうため拒否する
    pub fn validate(&self) -> Result<()> {
        self.job_categories.validate("jobCategories")?;
        self.locations.validate("locations")?;

        for entry in &self.fuzzy_age {
            if entry.phrase.is_empty() {
                return Err(Error::Config("fuzzyAge: 空の表現があります".into()));
            }
            if entry.min > entry.max {
                return Err(Error::Config(format!(
                    "fuzzyAge: '{}' の範囲が不正です ({} > {})",
                    entry.phrase, entry.min, entry.max
                )));
            }
        }

        if self.fuzzy_experience.iter().any(|e| e.phrase.is_empty()) {
            return Err(Error::Config("fuzzyExperience: 空の表現があります".into()));
        }

        if self.age_patterns.iter().any(|p| p.is_empty()) {
            return Err(Error::Config("agePatterns: 空のパターンがあります".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_order() {
        let mappings = KeywordMappings::builtin();
        let codes: Vec<&str> = mappings
            .job_categories
            .entries()
            .iter()
            .map(|e| e.code.as_str())
            .collect();
        assert_eq!(
            codes,
            vec!["corporate_sales", "account_planner", "inside_sales", "engineer", "designer"]
        );
        assert_eq!(mappings.locations.len(), 4);
        assert_eq!(mappings.age_patterns.len(), 4);
        assert!(mappings.validate().is_ok());
    }

    #[test]
    fn test_specific_age_phrase_precedes_decade() {
        let mappings = KeywordMappings::builtin();
        let position = |phrase: &str| {
            mappings
                .fuzzy_age
                .iter()
                .position(|e| e.phrase == phrase)
                .unwrap()
        };
        assert!(position("30代前半") < position("30代"));
        assert!(position("20代後半") < position("20代"));
    }

    #[test]
    fn test_matching_codes_dedup_within_category() {
        let table = KeywordTable::from_static(LOCATIONS);
        // 「東京」「東京都」「東京23区」はすべてtokyo、「東京近郊」はkanto
        let codes = table.matching_codes("東京23区か東京近郊");
        assert_eq!(codes, vec!["tokyo", "kanto"]);
    }

    #[test]
    fn test_display_name() {
        let mappings = KeywordMappings::builtin();
        assert_eq!(mappings.job_categories.display_name("engineer"), Some("エンジニア"));
        assert_eq!(mappings.locations.display_name("osaka"), Some("大阪"));
        assert_eq!(mappings.locations.display_name("hokkaido"), None);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "jobCategories": [{"code": "nurse", "synonyms": ["看護師", "ナース"]}],
            "fuzzyExperience": [{"phrase": "即戦力", "label": "3年以上"}]
        }"#;
        let mappings = KeywordMappings::from_json(json).unwrap();
        assert_eq!(mappings.job_categories.entries()[0].code, "nurse");
        assert!(mappings.locations.is_empty());
        assert!(mappings.age_patterns.is_empty());
        assert_eq!(mappings.fuzzy_experience[0].label, "3年以上");
    }

    #[test]
    fn test_from_json_rejects_empty_synonym() {
        let json = r#"{"locations": [{"code": "fukuoka", "synonyms": ["福岡", ""]}]}"#;
        let err = KeywordMappings::from_json(json).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_duplicate_code() {
        let json = r#"{"locations": [
            {"code": "tokyo", "synonyms": ["東京"]},
            {"code": "tokyo", "synonyms": ["都内"]}
        ]}"#;
        assert!(KeywordMappings::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_rejects_inverted_range() {
        let json = r#"{"fuzzyAge": [{"phrase": "アラフォー", "min": 44, "max": 36}]}"#;
        assert!(KeywordMappings::from_json(json).is_err());
    }

    #[test]
    fn test_json_roundtrip_keeps_order() {
        let mappings = KeywordMappings::builtin();
        let json = mappings.to_json().unwrap();
        assert!(json.find("corporate_sales").unwrap() < json.find("designer").unwrap());
        assert_eq!(KeywordMappings::from_json(&json).unwrap(), mappings);
    }

    #[test]
    fn test_merge() {
        let mut mappings = KeywordMappings::builtin();
        let custom = KeywordMappings::from_json(
            r#"{
                "jobCategories": [
                    {"code": "engineer", "synonyms": ["SRE", "エンジニア"]},
                    {"code": "nurse", "synonyms": ["看護師"]}
                ],
                "fuzzyAge": [
                    {"phrase": "若手", "min": 22, "max": 28},
                    {"phrase": "アラフォー", "min": 37, "max": 43}
                ]
            }"#,
        )
        .unwrap();

        mappings.merge(&custom);

        let engineer = &mappings.job_categories.entries()[3];
        assert_eq!(engineer.code, "engineer");
        assert_eq!(engineer.synonyms.last().map(String::as_str), Some("SRE"));
        assert_eq!(engineer.synonyms.iter().filter(|s| *s == "エンジニア").count(), 1);
        assert_eq!(mappings.job_categories.entries().last().unwrap().code, "nurse");

        let young = mappings.fuzzy_age.iter().find(|e| e.phrase == "若手").unwrap();
        assert_eq!(young.range(), AgeRange::new(22, 28));
        assert_eq!(mappings.fuzzy_age.last().unwrap().phrase, "アラフォー");
    }

    #[test]
    fn test_merge_places_specific_phrase_first() {
        let mut mappings = KeywordMappings::builtin();
        let custom = KeywordMappings::from_json(
            r#"{"fuzzyAge": [{"phrase": "30代中盤", "min": 33, "max": 37}]}"#,
        )
        .unwrap();

        mappings.merge(&custom);

        let position = |phrase: &str| {
            mappings
                .fuzzy_age
                .iter()
                .position(|e| e.phrase == phrase)
                .unwrap()
        };
        assert!(position("30代中盤") < position("30代"));
        assert!(position("30代後半") < position("30代中盤"));

        let extractor = crate::ConditionExtractor::new(mappings).unwrap();
        assert_eq!(extractor.extract("30代中盤の方").age_range, Some(AgeRange::new(33, 37)));
        assert_eq!(extractor.extract("30代の方").age_range, Some(AgeRange::new(30, 39)));
        assert_eq!(extractor.extract("30代前半").age_range, Some(AgeRange::new(30, 35)));
    }

    #[test]
    fn test_merged_age_pattern_is_shadowed_by_builtin_decade() {
        let mut mappings = KeywordMappings::builtin();
        mappings.merge(&KeywordMappings {
            age_patterns: vec![r"([0-9]{1,2})代半ば".into()],
            ..Default::default()
        });
        assert_eq!(mappings.age_patterns.last().map(String::as_str), Some(r"([0-9]{1,2})代半ば"));

        let extractor = crate::ConditionExtractor::new(mappings).unwrap();
        assert_eq!(extractor.extract("40代半ば").age_range, Some(AgeRange::new(40, 49)));
    }

    #[test]
    fn test_age_pattern_separators() {
        let extractor = crate::ConditionExtractor::builtin();
        for text in ["25〜35歳", "25～35歳", "25から35歳", "25歳から35歳", "25-35歳"] {
            assert_eq!(extractor.extract(text).age_range, Some(AgeRange::new(25, 35)), "{}", text);
        }
    }
}
