use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wanted-watch")]
#[command(about = "FBI最重要指名手配リスト ブラウズ・検索ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 指名手配リストを取得して表示
    List {
        /// ページ番号（1始まり）
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// フリーテキストでファンアウト検索
    Search {
        /// 検索語（title/subjects/hair/eyes/race/sex/nationality/place_of_birthを横断）
        #[arg(required = true)]
        query: String,

        /// ページ番号（1始まり）
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// uidを指定して1件の詳細を表示
    Show {
        /// レコードのuid
        #[arg(required = true)]
        uid: String,
    },

    /// お気に入りの管理
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },
}

#[derive(Subcommand)]
pub enum FavCommands {
    /// uidを指定してお気に入りに追加（レコードを取得して保存）
    Add {
        #[arg(required = true)]
        uid: String,
    },

    /// uidを指定してお気に入りから削除
    Remove {
        #[arg(required = true)]
        uid: String,
    },

    /// お気に入り一覧を表示
    List,
}
