//! 採用要件チャット・検索条件抽出デモ
//!
//! 条件抽出そのものは `scout_chat_common` にあり、このクレートは
//! 設定・チャット履歴・対話ループ・一括抽出・表示を担う。

pub mod batch;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod presentation;
pub mod transcript;

pub use scout_chat_common::{extract_conditions, ConditionExtractor, ParsedConditions};
