//! Scout Chat Common Library
//!
//! CLIと表示層で共有される型と検索条件抽出器

pub mod types;
pub mod error;
pub mod mappings;
pub mod extractor;

pub use types::{AgeRange, ParsedConditions};
pub use error::{Error, Result};
pub use mappings::{FuzzyAgeEntry, FuzzyExperienceEntry, KeywordEntry, KeywordMappings, KeywordTable};
pub use extractor::{ConditionExtractor, extract_conditions};
