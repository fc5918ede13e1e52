use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("キーワード辞書が不正: {0}")]
    InvalidMappings(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] scout_chat_common::Error),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
