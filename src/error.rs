use thiserror::Error;

#[derive(Error, Debug)]
pub enum WantedWatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("レコードが見つかりません: {0}")]
    RecordNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, WantedWatchError>;
