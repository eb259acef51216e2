//! お気に入り永続化のシリアライズ層
//!
//! ストレージ本体はフロントエンドごとに異なる
//! （Web: localStorage / CLI: 設定ディレクトリのJSONファイル）が、
//! キーとJSON表現はここで固定する

use crate::types::WantedRecord;

/// 永続化キー（localStorageキー / ファイル名の双方に使う）
pub const FAVORITES_KEY: &str = "wanted-watch-favorites";

/// 永続化データからお気に入りを復元する
///
/// 欠落・破損データは空として扱う（この境界から先にエラーを出さない）。
/// uidの重複は先勝ちで除去する
pub fn favorites_from_json(json: &str) -> Vec<WantedRecord> {
    let parsed: Vec<WantedRecord> = match serde_json::from_str(json) {
        Ok(records) => records,
        Err(_) => return Vec::new(),
    };

    let mut favorites: Vec<WantedRecord> = Vec::with_capacity(parsed.len());
    for record in parsed {
        if !favorites.iter().any(|f| f.uid == record.uid) {
            favorites.push(record);
        }
    }
    favorites
}

/// お気に入り全件をJSONへ直列化する（上書き保存、マージなし）
pub fn favorites_to_json(favorites: &[WantedRecord]) -> String {
    // Vec<WantedRecord>のシリアライズは失敗しない
    serde_json::to_string(favorites).unwrap_or_else(|_| "[]".to_string())
}
