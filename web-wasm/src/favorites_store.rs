//! お気に入りのlocalStorage永続化
//!
//! 固定キーにJSON配列として全件を上書き保存する。
//! 読み込みは欠落・破損を空として扱う（起動を止めない）

use gloo::storage::{LocalStorage, Storage};
use wanted_common::favorites::FAVORITES_KEY;
use wanted_common::types::WantedRecord;

/// 保存済みお気に入りを読み込む（欠落・破損は空）
pub fn load() -> Vec<WantedRecord> {
    LocalStorage::get(FAVORITES_KEY).unwrap_or_default()
}

/// 全件を上書き保存する（last-write-wins、マージなし）
///
/// 保存失敗（容量超過等）でアプリは止めない
pub fn save(favorites: &[WantedRecord]) {
    if let Err(e) = LocalStorage::set(FAVORITES_KEY, favorites) {
        web_sys::console::warn_1(&format!("お気に入りの保存に失敗: {:?}", e).into());
    }
}
