//! 対話式チャット
//!
//! 入力1件ごとに条件抽出を1回呼び出し、結果と模擬候補者数を履歴に追記する。
//! 待ち時間は表示用の演出のみで、抽出結果には影響しない。

use crate::error::{Result, ScoutError};
use crate::presentation::{self, CountTier};
use crate::transcript::{ChatMessage, Sender, Transcript};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use scout_chat_common::ConditionExtractor;
use std::time::Duration;

pub const RESULT_HEADER: &str = "以下の条件で人材を検索しました：";

/// チャットの表示設定
#[derive(Debug, Clone, Copy)]
pub struct ChatOptions {
    pub typing_delay: Duration,
    pub count_update_delay: Duration,
    pub base_candidate_count: u32,
}

impl ChatOptions {
    /// 待ち時間なし
    pub fn instant(base_candidate_count: u32) -> Self {
        Self {
            typing_delay: Duration::ZERO,
            count_update_delay: Duration::ZERO,
            base_candidate_count,
        }
    }
}

pub struct ChatSession<'a> {
    extractor: &'a ConditionExtractor,
    transcript: Transcript,
    base_candidate_count: u32,
}

impl<'a> ChatSession<'a> {
    pub fn new(extractor: &'a ConditionExtractor, base_candidate_count: u32) -> Self {
        Self {
            extractor,
            transcript: Transcript::with_greeting(),
            base_candidate_count,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// ユーザー入力を処理し、AI応答を返す
    ///
    /// 空白のみの入力は無視する（履歴も変更しない）。
    pub fn submit(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        self.transcript
            .push(Sender::User, text.to_string(), None, None);

        let conditions = self.extractor.extract(text);
        let count = presentation::estimate_candidates(self.base_candidate_count, &conditions);
        log::debug!(
            "抽出: {}種類の条件 (職種{}件 勤務地{}件 年齢{:?} 経験{}件) → {}名",
            conditions.filter_count(),
            conditions.job_categories.len(),
            conditions.locations.len(),
            conditions.age_range,
            conditions.experience.len(),
            count
        );

        Some(self.transcript.push(
            Sender::Assistant,
            RESULT_HEADER.to_string(),
            Some(conditions),
            Some(count),
        ))
    }
}

/// 入力コマンド
enum ChatAction {
    Message(String),
    History,
    Quit,
}

fn parse_action(input: &str) -> ChatAction {
    match input.trim() {
        "/quit" | "/exit" | "/q" => ChatAction::Quit,
        "/history" | "/h" => ChatAction::History,
        _ => ChatAction::Message(input.to_string()),
    }
}

fn print_message(message: &ChatMessage, extractor: &ConditionExtractor) {
    println!("[{}] {}", message.sender, message.content);
    if let Some(ref conditions) = message.parsed_conditions {
        for line in presentation::condition_lines(conditions, extractor.mappings()) {
            println!("  {}", line);
        }
    }
}

async fn wait_with_spinner(message: &str, delay: Duration) {
    if delay.is_zero() {
        return;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    tokio::time::sleep(delay).await;
    spinner.finish_and_clear();
}

/// 対話ループ
pub async fn run_chat(extractor: &ConditionExtractor, options: ChatOptions) -> Result<()> {
    let mut session = ChatSession::new(extractor, options.base_candidate_count);

    if let Some(greeting) = session.transcript().last() {
        print_message(greeting, extractor);
    }
    println!("例: 「BtoB営業の経験がある30代の方を都内で探しています」");
    println!("操作: /history 履歴表示  /quit 終了\n");

    loop {
        let input: String = Input::new()
            .with_prompt("採用要件")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ScoutError::Prompt(e.to_string()))?;

        match parse_action(&input) {
            ChatAction::Quit => break,
            ChatAction::History => {
                for message in session.transcript().messages() {
                    print_message(message, extractor);
                }
                println!();
            }
            ChatAction::Message(text) => {
                let Some(reply) = session.submit(&text).cloned() else {
                    continue;
                };

                wait_with_spinner("入力中...", options.typing_delay).await;
                print_message(&reply, extractor);

                if let Some(count) = reply.candidate_count {
                    println!("  条件に合致する候補者を検索中です...");
                    wait_with_spinner("候補者数を更新中...", options.count_update_delay).await;
                    println!("  候補者数: {}名", count);
                    if let Some(hint) = CountTier::of(count).hint() {
                        println!("  ※ {}", hint);
                    }
                }
                if let Some(ref conditions) = reply.parsed_conditions {
                    let badges = presentation::badges(conditions);
                    if !badges.is_empty() {
                        println!("  [{}]", badges.join("] ["));
                    }
                }
                println!();
            }
        }
    }

    println!("{}件のメッセージでチャットを終了します", session.transcript().len());
    Ok(())
}
