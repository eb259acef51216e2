//! アプリケーション状態と純粋リデューサ
//!
//! 状態遷移はすべて `reduce` を経由する。副作用（お気に入りの永続化）は
//! リデューサの外、ディスパッチ側の責務（`Action::persists_favorites` 参照）

use crate::search::{apply_filters, Filters};
use crate::types::WantedRecord;

/// ページネーションカーソル（filtered に対する）
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    /// 1始まり
    pub page: u32,
    /// 1ページあたりの件数
    pub limit: u32,
    /// filtered の総件数
    pub total: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 12,
            total: 0,
        }
    }
}

/// アプリケーション状態
///
/// 不変条件:
/// - `filtered` は常に現在の `records` / `search_term` / `filters` から
///   導出された結果と一致する
/// - `favorites` はuidごとに高々1件
/// - `pagination.total` は `filtered.len()` と一致する
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// 最後に成功した取得の結果（信頼できる唯一のソース）
    pub records: Vec<WantedRecord>,
    /// 検索・フィルタ適用後の導出ビュー
    pub filtered: Vec<WantedRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub filters: Filters,
    /// 詳細表示中のレコード
    pub selected: Option<WantedRecord>,
    pub pagination: Pagination,
    /// お気に入り（お気に入り登録時点のスナップショット）
    pub favorites: Vec<WantedRecord>,
}

impl AppState {
    /// 総ページ数（最低1）
    pub fn total_pages(&self) -> u32 {
        let len = self.filtered.len() as u32;
        let limit = self.pagination.limit.max(1);
        len.div_ceil(limit).max(1)
    }

    /// 現在ページに表示するスライス
    pub fn page_items(&self) -> &[WantedRecord] {
        let limit = self.pagination.limit.max(1) as usize;
        let start = (self.pagination.page.saturating_sub(1) as usize) * limit;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + limit).min(self.filtered.len());
        &self.filtered[start..end]
    }

    pub fn is_favorite(&self, uid: &str) -> bool {
        self.favorites.iter().any(|f| f.uid == uid)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty() || self.filters.is_active()
    }

    /// filtered と total を現在の records/検索条件から再計算する
    fn refilter(&mut self) {
        self.filtered = apply_filters(&self.records, &self.search_term, &self.filters);
        self.pagination.total = self.filtered.len() as u32;
    }

    /// ページを有効範囲 [1, total_pages] に収める
    fn clamp_page(&mut self) {
        self.pagination.page = self.pagination.page.clamp(1, self.total_pages());
    }
}

/// 状態遷移アクション
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// 取得開始（loading=true, error解除）
    FetchStart,
    /// 取得成功（recordsを丸ごと差し替え）
    FetchSuccess(Vec<WantedRecord>),
    /// 取得失敗（既存のrecordsは保持したままエラー表示）
    FetchFailure(String),
    /// 全滅時のサンプルデータ投入（エラーメッセージは保持する）
    FallbackData(Vec<WantedRecord>),
    SetSearchTerm(String),
    ClearSearch,
    SetSexFilter(String),
    SetRaceFilter(String),
    SetSubjectsFilter(Vec<String>),
    ClearFilters,
    SetPage(u32),
    AddFavorite(WantedRecord),
    RemoveFavorite(String),
    /// 起動時の永続ストアからの復元
    LoadFavorites(Vec<WantedRecord>),
    Select(WantedRecord),
    ClearSelection,
}

impl Action {
    /// このアクションの適用後にお気に入りを永続化すべきか
    ///
    /// 永続化の副作用は追加/削除の2遷移に限定する（復元は含まない）
    pub fn persists_favorites(&self) -> bool {
        matches!(self, Action::AddFavorite(_) | Action::RemoveFavorite(_))
    }
}

/// 純粋な状態遷移関数 `(state, action) -> state'`
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::FetchStart => {
            next.loading = true;
            next.error = None;
        }

        Action::FetchSuccess(records) => {
            next.loading = false;
            next.error = None;
            next.records = records;
            next.refilter();
            next.clamp_page();
        }

        Action::FetchFailure(message) => {
            next.loading = false;
            next.error = Some(message);
        }

        Action::FallbackData(records) => {
            next.loading = false;
            next.records = records;
            next.refilter();
            next.clamp_page();
        }

        Action::SetSearchTerm(term) => {
            next.search_term = term;
            next.refilter();
            next.pagination.page = 1;
        }

        Action::ClearSearch => {
            next.search_term.clear();
            next.refilter();
            next.pagination.page = 1;
        }

        Action::SetSexFilter(sex) => {
            next.filters.sex = sex;
            next.refilter();
            next.pagination.page = 1;
        }

        Action::SetRaceFilter(race) => {
            next.filters.race = race;
            next.refilter();
            next.pagination.page = 1;
        }

        Action::SetSubjectsFilter(subjects) => {
            next.filters.subjects = subjects;
            next.refilter();
            next.pagination.page = 1;
        }

        Action::ClearFilters => {
            next.filters = Filters::default();
            next.refilter();
            next.pagination.page = 1;
        }

        Action::SetPage(page) => {
            next.pagination.page = page;
            next.clamp_page();
        }

        Action::AddFavorite(record) => {
            // 同一uidの二重登録は無視（冪等）
            if !next.is_favorite(&record.uid) {
                next.favorites.push(record);
            }
        }

        Action::RemoveFavorite(uid) => {
            next.favorites.retain(|f| f.uid != uid);
        }

        Action::LoadFavorites(favorites) => {
            // 復元時もuidの一意性を保証する
            next.favorites.clear();
            for record in favorites {
                if !next.is_favorite(&record.uid) {
                    next.favorites.push(record);
                }
            }
        }

        Action::Select(record) => {
            next.selected = Some(record);
        }

        Action::ClearSelection => {
            next.selected = None;
        }
    }

    next
}
