use clap::Parser;
use scout_chat::{batch, chat, cli, config, error, presentation};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::Result;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = Config::load()?;

    match cli.command {
        Commands::Extract { text, format } => {
            let extractor = config.build_extractor(cli.mappings.as_deref())?;
            let conditions = extractor.extract(&text);

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&conditions)?);
                }
                OutputFormat::Text => {
                    for line in presentation::condition_lines(&conditions, extractor.mappings()) {
                        println!("{}", line);
                    }
                }
            }
        }

        Commands::Chat { fast } => {
            let extractor = config.build_extractor(cli.mappings.as_deref())?;
            let options = if fast {
                chat::ChatOptions::instant(config.base_candidate_count)
            } else {
                chat::ChatOptions {
                    typing_delay: Duration::from_millis(config.typing_delay_ms),
                    count_update_delay: Duration::from_millis(config.count_update_delay_ms),
                    base_candidate_count: config.base_candidate_count,
                }
            };

            println!("💬 scout-chat - スカウト候補検索\n");
            chat::run_chat(&extractor, options).await?;
        }

        Commands::Batch { input, output } => {
            println!("📄 scout-chat - 一括抽出\n");

            let extractor = config.build_extractor(cli.mappings.as_deref())?;
            let output = output.unwrap_or_else(|| input.with_extension("json"));
            if output == input {
                return Err(error::ScoutError::Config(format!(
                    "出力先が入力ファイルと同じです: {}",
                    output.display()
                )));
            }

            let entries = batch::run_batch(&extractor, &input, &output)?;
            let matched = entries.iter().filter(|e| !e.conditions.is_empty()).count();
            println!("\n✅ 抽出完了 ({}/{}件で条件を検出)", matched, entries.len());
        }

        Commands::Mappings { export } => {
            let mappings = config.resolve_mappings(cli.mappings.as_deref())?;
            let json = mappings.to_json()?;

            if let Some(path) = export {
                std::fs::write(&path, json)?;
                println!("✔ 辞書を書き出しました: {}", path.display());
            } else {
                println!("{}", json);
            }
        }

        Commands::Config { set_mappings, clear_mappings, set_typing_delay, show } => {
            let mut config = config;

            if let Some(path) = set_mappings {
                // 保存前に読み込めることを確認
                config.build_extractor(Some(path.as_path()))?;
                config.set_mappings_path(Some(path))?;
                println!("✔ カスタム辞書を設定しました");
            } else if clear_mappings {
                config.set_mappings_path(None)?;
                println!("✔ カスタム辞書の設定を解除しました");
            }

            if let Some(ms) = set_typing_delay {
                config.set_typing_delay(ms)?;
                println!("✔ 待ち時間を設定しました: {}ms", ms);
            }

            if show {
                println!("設定:");
                println!(
                    "  カスタム辞書: {}",
                    config
                        .mappings_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  入力中表示: {}ms", config.typing_delay_ms);
                println!("  候補者数更新: {}ms", config.count_update_delay_ms);
                println!("  基準候補者数: {}名", config.base_candidate_count);
            }
        }
    }

    Ok(())
}
