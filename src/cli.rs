use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "beauty-ai")]
#[command(about = "AI美容解析・セルフィー診断ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真ファイルを解析して診断結果を表示
    Analyze {
        /// 画像ファイルのパス（png/jpeg/webp）
        #[arg(required = true)]
        image: PathBuf,
    },

    /// カメラでセルフィーを撮影して解析
    Selfie {
        /// カメラデバイス
        #[arg(short, long, default_value = "/dev/video0")]
        device: String,

        /// 確認なしで即キャプチャ
        #[arg(long)]
        no_confirm: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
