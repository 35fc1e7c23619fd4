use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "障害者福祉ポータル: スキーム申請と申請状況の確認", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ストアファイルを置くディレクトリ（設定より優先）
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ログイン状態にする
    Login,

    /// ログアウトする
    Logout,

    /// 申請できるスキームを分類別に一覧表示
    Schemes,

    /// スキームに申請する
    Apply {
        /// スキームID（例: pre-matric, disability-pension）
        #[arg(short, long, required = true)]
        scheme: String,

        /// フォーム入力JSONファイル（省略時は対話入力）
        #[arg(short, long)]
        form: Option<PathBuf>,
    },

    /// 申請状況と統計を表示
    Dashboard {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示・変更
    Config {
        /// 送信待ち時間（ミリ秒）
        #[arg(long)]
        submit_delay_ms: Option<u64>,

        /// ダッシュボード遷移までの待ち時間（ミリ秒）
        #[arg(long)]
        redirect_delay_ms: Option<u64>,

        /// ストアディレクトリを設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
