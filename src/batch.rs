//! 一括抽出
//!
//! テキストファイルの各行（採用要件1件）から条件を並列に抽出する。

use crate::error::{Result, ScoutError};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use scout_chat_common::{ConditionExtractor, ParsedConditions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 1行分の抽出結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub text: String,
    pub conditions: ParsedConditions,
}

/// 入力ファイルから空行を除いた要件を読み込む
pub fn read_requirements(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ScoutError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect())
}

/// 並列に抽出（結果は入力順）
pub fn extract_batch(extractor: &ConditionExtractor, texts: &[String]) -> Vec<BatchEntry> {
    extract_batch_with_progress(extractor, texts, None)
}

fn extract_batch_with_progress(
    extractor: &ConditionExtractor,
    texts: &[String],
    progress: Option<&ProgressBar>,
) -> Vec<BatchEntry> {
    texts
        .par_iter()
        .map(|text| {
            let entry = BatchEntry {
                text: text.clone(),
                conditions: extractor.extract(text),
            };
            if let Some(pb) = progress {
                pb.inc(1);
            }
            entry
        })
        .collect()
}

/// ファイルを読み込んで抽出し、JSONで保存
pub fn run_batch(extractor: &ConditionExtractor, input: &Path, output: &Path) -> Result<Vec<BatchEntry>> {
    let texts = read_requirements(input)?;
    println!("✔ {}件の採用要件を検出", texts.len());

    let pb = ProgressBar::new(texts.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let entries = extract_batch_with_progress(extractor, &texts, Some(&pb));
    pb.finish_and_clear();

    let unmatched = entries.iter().filter(|e| e.conditions.is_empty()).count();
    if unmatched > 0 {
        log::warn!("{}件は条件を抽出できませんでした", unmatched);
    }

    let json = serde_json::to_string_pretty(&entries)?;
    std::fs::write(output, json)?;
    println!("✔ 結果を保存: {}", output.display());

    Ok(entries)
}
