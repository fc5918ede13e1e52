//! チャット履歴
//!
//! 追記のみのメッセージログ。対話状態は持たない。

use chrono::{DateTime, Local};
use scout_chat_common::ParsedConditions;
use serde::{Deserialize, Serialize};

pub const GREETING: &str = "こんにちは！スカウト候補検索です。どのような人材をお探しですか？";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "あなた"),
            Sender::Assistant => write!(f, "AI"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_conditions: Option<ParsedConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// 挨拶メッセージから始まる履歴
    pub fn with_greeting() -> Self {
        let mut transcript = Self::new();
        transcript.push(Sender::Assistant, GREETING.to_string(), None, None);
        transcript
    }

    pub fn push(
        &mut self,
        sender: Sender,
        content: String,
        parsed_conditions: Option<ParsedConditions>,
        candidate_count: Option<u32>,
    ) -> &ChatMessage {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            sender,
            content,
            timestamp: Local::now(),
            parsed_conditions,
            candidate_count,
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
