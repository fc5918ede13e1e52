//! 抽出結果の表示用データ
//!
//! 条件バッジと模擬候補者数を生成する。候補者数は実検索ではなく、
//! 抽出された条件の種類に応じて基準値を絞り込んだ目安値。

use scout_chat_common::{KeywordMappings, KeywordTable, ParsedConditions};

/// 職種条件による絞り込み率
const JOB_NARROWING: f64 = 0.2;
/// 年齢条件による絞り込み率
const AGE_NARROWING: f64 = 0.3;

/// 候補者数の区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountTier {
    /// 100名未満
    Few,
    Normal,
    /// 200名超
    Many,
}

impl CountTier {
    pub fn of(count: u32) -> Self {
        if count < 100 {
            CountTier::Few
        } else if count > 200 {
            CountTier::Many
        } else {
            CountTier::Normal
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CountTier::Few => Some("候補者が少なめです。条件の緩和を検討してください"),
            CountTier::Normal => None,
            CountTier::Many => Some("候補者が十分にいます"),
        }
    }
}

/// 模擬候補者数
pub fn estimate_candidates(base: u32, conditions: &ParsedConditions) -> u32 {
    let mut count = base as f64;
    if !conditions.job_categories.is_empty() {
        count *= 1.0 - JOB_NARROWING;
    }
    if conditions.age_range.is_some() {
        count *= 1.0 - AGE_NARROWING;
    }
    count.floor() as u32
}

fn labelled(table: &KeywordTable, codes: &[String]) -> Vec<String> {
    codes
        .iter()
        .map(|code| match table.display_name(code) {
            Some(name) => format!("{}({})", name, code),
            None => code.clone(),
        })
        .collect()
}

/// 条件の表示行（職種・勤務地・年齢・経験）
pub fn condition_lines(conditions: &ParsedConditions, mappings: &KeywordMappings) -> Vec<String> {
    if conditions.is_empty() {
        return vec!["条件を抽出できませんでした".to_string()];
    }

    let mut lines = Vec::new();
    if !conditions.job_categories.is_empty() {
        lines.push(format!(
            "職種: {}",
            labelled(&mappings.job_categories, &conditions.job_categories).join(", ")
        ));
    }
    if !conditions.locations.is_empty() {
        lines.push(format!(
            "勤務地: {}",
            labelled(&mappings.locations, &conditions.locations).join(", ")
        ));
    }
    if let Some(range) = conditions.age_range {
        lines.push(format!("年齢: {}", range));
    }
    if !conditions.experience.is_empty() {
        lines.push(format!("経験: {}", conditions.experience.join(", ")));
    }
    lines
}

/// バッジ表示用の文字列（コードと経験ラベル）
pub fn badges(conditions: &ParsedConditions) -> Vec<String> {
    let mut badges: Vec<String> = conditions
        .job_categories
        .iter()
        .chain(conditions.locations.iter())
        .cloned()
        .collect();
    if let Some(range) = conditions.age_range {
        badges.push(format!("{}-{}", range.min, range.max));
    }
    badges.extend(conditions.experience.iter().cloned());
    badges
}
