//! wanted-watch CLIのライブラリ部分
//!
//! コアロジック（型・検索・状態・マージ規則）はwanted-commonにあり、
//! ここにはCLI固有の層（HTTPクライアント・ファイル永続化・設定）のみを置く

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod favorites;
