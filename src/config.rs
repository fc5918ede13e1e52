use crate::error::{Result, ScoutError};
use scout_chat_common::{ConditionExtractor, KeywordMappings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// カスタムキーワード辞書（組み込み辞書にマージ）
    pub mappings_path: Option<PathBuf>,
    /// 「入力中...」の表示時間
    pub typing_delay_ms: u64,
    /// 候補者数の更新までの待ち時間
    pub count_update_delay_ms: u64,
    /// 条件なしの候補者数
    pub base_candidate_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mappings_path: None,
            typing_delay_ms: 1500,
            count_update_delay_ms: 1000,
            base_candidate_count: 127,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::info!("設定を読み込みました: {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ScoutError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("scout-chat").join("config.json"))
    }

    pub fn set_mappings_path(&mut self, path: Option<PathBuf>) -> Result<()> {
        if let Some(ref p) = path {
            if !p.exists() {
                return Err(ScoutError::FileNotFound(p.display().to_string()));
            }
        }
        self.mappings_path = path;
        self.save()
    }

    pub fn set_typing_delay(&mut self, ms: u64) -> Result<()> {
        self.typing_delay_ms = ms;
        self.save()
    }

    /// 使用する辞書を決定する
    ///
    /// 優先順位: 引数で指定したファイル → 設定ファイルの `mappings_path` → 組み込み辞書。
    /// カスタム辞書は組み込み辞書にマージされる。
    pub fn resolve_mappings(&self, override_path: Option<&Path>) -> Result<KeywordMappings> {
        let mut mappings = KeywordMappings::builtin();

        let custom_path = override_path.or(self.mappings_path.as_deref());
        if let Some(path) = custom_path {
            if !path.exists() {
                return Err(ScoutError::FileNotFound(path.display().to_string()));
            }
            let custom = KeywordMappings::from_file(path)
                .map_err(|e| ScoutError::InvalidMappings(format!("{}: {}", path.display(), e)))?;
            log::info!("カスタム辞書をマージ: {}", path.display());
            mappings.merge(&custom);
        }

        Ok(mappings)
    }

    /// 辞書から抽出器を構築
    pub fn build_extractor(&self, override_path: Option<&Path>) -> Result<ConditionExtractor> {
        let mappings = self.resolve_mappings(override_path)?;
        Ok(ConditionExtractor::new(mappings)?)
    }
}
