//! 抽出結果の型定義
//!
//! CLIと表示層で共有される型:
//! - AgeRange: 年齢範囲（両端を含む）
//! - ParsedConditions: 1メッセージから抽出した検索条件

use serde::{Deserialize, Serialize};

/// 年齢範囲（min, maxともに含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// 年代（20代など）を範囲に変換: 30 → 30〜39
    ///
    /// 上限が `u32` を超える場合は `None`
    pub fn decade(start: u32) -> Option<Self> {
        start.checked_add(9).map(|max| Self { min: start, max })
    }
}

impl std::fmt::Display for AgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}〜{}歳", self.min, self.max)
    }
}

/// 抽出された検索条件
///
/// - `job_categories` / `locations`: テーブル定義順、重複なし
/// - `age_range`: 最大1件（最初に一致したもの）
/// - `experience`: テーブル定義順、重複あり得る
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConditions {
    #[serde(default)]
    pub job_categories: Vec<String>,

    #[serde(default)]
    pub locations: Vec<String>,

    #[serde(default)]
    pub age_range: Option<AgeRange>,

    #[serde(default)]
    pub experience: Vec<String>,
}

impl ParsedConditions {
    /// 条件が1つも抽出されていないか
    pub fn is_empty(&self) -> bool {
        self.job_categories.is_empty()
            && self.locations.is_empty()
            && self.age_range.is_none()
            && self.experience.is_empty()
    }

    /// 抽出された条件の種類数（職種・勤務地・年齢・経験）
    pub fn filter_count(&self) -> usize {
        [
            !self.job_categories.is_empty(),
            !self.locations.is_empty(),
            self.age_range.is_some(),
            !self.experience.is_empty(),
        ]
        .iter()
        .filter(|&&present| present)
        .count()
    }
}
