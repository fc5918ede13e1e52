use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scout-chat")]
#[command(about = "採用要件チャット・検索条件抽出デモツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カスタムキーワード辞書（JSON、組み込み辞書にマージ）
    #[arg(short, long, global = true)]
    pub mappings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 採用要件テキストから検索条件を抽出
    Extract {
        /// 採用要件テキスト
        #[arg(required = true)]
        text: String,

        /// 出力形式 (json/text)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// 対話式チャット
    Chat {
        /// 入力中表示などの待ち時間を省略
        #[arg(long)]
        fast: bool,
    },

    /// テキストファイルの各行から一括抽出してJSONを出力
    Batch {
        /// 入力テキストファイル（1行1件）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（デフォルト: 入力ファイル名.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// キーワード辞書を表示/書き出し
    Mappings {
        /// 辞書をJSONファイルに書き出す
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// カスタム辞書のパスを設定
        #[arg(long)]
        set_mappings: Option<PathBuf>,

        /// カスタム辞書の設定を解除
        #[arg(long)]
        clear_mappings: bool,

        /// 入力中表示の待ち時間（ミリ秒）を設定
        #[arg(long)]
        set_typing_delay: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown format: {}. Use json or text", s)),
        }
    }
}
