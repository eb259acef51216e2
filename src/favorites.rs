//! お気に入りのファイル永続化
//!
//! 設定ディレクトリ配下のJSONファイル1つに全件を上書き保存する。
//! 読み込みは欠落・破損を空として扱う（起動を止めない）

use crate::error::{Result, WantedWatchError};
use std::path::PathBuf;
use wanted_common::favorites::{favorites_from_json, favorites_to_json, FAVORITES_KEY};
use wanted_common::types::WantedRecord;

pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// デフォルトの保存先（~/.config/wanted-watch/wanted-watch-favorites.json）
    pub fn open_default() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| WantedWatchError::Config("ホームディレクトリが見つかりません".into()))?;
        let path = home
            .join(".config")
            .join("wanted-watch")
            .join(format!("{}.json", FAVORITES_KEY));
        Ok(Self { path })
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// 保存済みお気に入りを読み込む（欠落・破損は空）
    pub fn load(&self) -> Vec<WantedRecord> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => favorites_from_json(&content),
            Err(_) => Vec::new(),
        }
    }

    /// 全件を上書き保存する（last-write-wins）
    pub fn save(&self, favorites: &[WantedRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, favorites_to_json(favorites))?;
        Ok(())
    }
}
