//! 検索条件抽出
//!
//! 採用要件の自由記述から職種・勤務地・年齢・経験を抽出する。
//!
//! ## 抽出ルール
//! 1. 職種・勤務地: 同義語の部分一致（大文字小文字は区別、正規化なし）
//! 2. 年齢: 曖昧表現テーブル → 年齢パターンの順に試し、最初の一致のみ採用
//! 3. 経験: 曖昧表現テーブルで一致したものをすべて追加
//!
//! 抽出は失敗しない。何も一致しなければ空の条件を返す。

use crate::error::Result;
use crate::mappings::KeywordMappings;
use crate::types::{AgeRange, ParsedConditions};
use regex::Regex;

/// 検索条件抽出器
///
/// 辞書と年齢パターンは生成時に一度だけ構築され、以後は読み取り専用。
/// `extract` は `&self` のみを取るため、複数スレッドから共有して呼び出せる。
#[derive(Debug, Clone)]
pub struct ConditionExtractor {
    mappings: KeywordMappings,
    age_patterns: Vec<Regex>,
}

lazy_static::lazy_static! {
    static ref BUILTIN: ConditionExtractor =
        ConditionExtractor::new(KeywordMappings::builtin()).unwrap();
}

impl ConditionExtractor {
    /// 辞書を検証し、年齢パターンをコンパイルする
    pub fn new(mappings: KeywordMappings) -> Result<Self> {
        mappings.validate()?;

        let age_patterns = mappings
            .age_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            mappings,
            age_patterns,
        })
    }

    /// 組み込み辞書の抽出器（プロセス内で共有）
    pub fn builtin() -> &'static ConditionExtractor {
        &BUILTIN
    }

    pub fn mappings(&self) -> &KeywordMappings {
        &self.mappings
    }

    /// テキストから検索条件を抽出
    ///
    /// # Examples
    /// ```
    /// use scout_chat_common::ConditionExtractor;
    ///
    /// let conditions = ConditionExtractor::builtin().extract("都内の法人営業");
    /// assert_eq!(conditions.job_categories, vec!["corporate_sales"]);
    /// assert_eq!(conditions.locations, vec!["tokyo"]);
    /// ```
    pub fn extract(&self, text: &str) -> ParsedConditions {
        if text.trim().is_empty() {
            return ParsedConditions::default();
        }

        ParsedConditions {
            job_categories: self.mappings.job_categories.matching_codes(text),
            locations: self.mappings.locations.matching_codes(text),
            age_range: self
                .fuzzy_age(text)
                .or_else(|| self.pattern_age(text)),
            experience: self.experience(text),
        }
    }

    /// 曖昧な年齢表現（定義順で最初の一致）
    fn fuzzy_age(&self, text: &str) -> Option<AgeRange> {
        self.mappings
            .fuzzy_age
            .iter()
            .find(|entry| text.contains(entry.phrase.as_str()))
            .map(|entry| entry.range())
    }

    /// 年齢パターン（最初に一致したパターンのみ評価し、以降は試さない）
    fn pattern_age(&self, text: &str) -> Option<AgeRange> {
        let captures = self
            .age_patterns
            .iter()
            .find_map(|pattern| pattern.captures(text))?;

        let number = |i: usize| {
            captures
                .get(i)
                .and_then(|m| m.as_str().parse::<u32>().ok())
        };

        match (number(1), number(2)) {
            (Some(min), Some(max)) => Some(AgeRange::new(min, max)),
            (Some(decade), None) => AgeRange::decade(decade),
            // キャプチャなしのパターン（「30代」など）は先頭の数字を年代とみなす
            _ => leading_number(captures.get(0)?.as_str()).and_then(AgeRange::decade),
        }
    }

    fn experience(&self, text: &str) -> Vec<String> {
        self.mappings
            .fuzzy_experience
            .iter()
            .filter(|entry| text.contains(entry.phrase.as_str()))
            .map(|entry| entry.label.clone())
            .collect()
    }
}

/// 文字列先頭のASCII数字を数値化
fn leading_number(s: &str) -> Option<u32> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// 組み込み辞書で検索条件を抽出
pub fn extract_conditions(text: &str) -> ParsedConditions {
    ConditionExtractor::builtin().extract(text)
}
