//! メインアプリケーションコンポーネントと状態オーナー

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::api::fbi;
use crate::components::{
    detail_modal::DetailModal, filter_panel::FilterPanel, header::Header,
    pagination::Pagination, search_bar::SearchBar, wanted_grid::WantedGrid,
};
use crate::favorites_store;
use wanted_common::{reduce, sample_records, Action, AppState};

/// セッションごとに1つ生成される状態オーナー
///
/// すべての状態変更は `dispatch` （純粋リデューサ）を経由する。
/// 永続化の副作用はお気に入りの追加/削除のときだけ発生する。
/// グローバルシングルトンにはせず、Leptosのcontextで配る
#[derive(Clone, Copy)]
pub struct AppStore {
    state: RwSignal<AppState>,
    /// 取得要求の世代番号。古い要求の結果は到着時に破棄する
    fetch_epoch: StoredValue<u64>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AppState::default()),
            fetch_epoch: StoredValue::new(0),
        }
    }

    pub fn state(&self) -> RwSignal<AppState> {
        self.state
    }

    /// アクションを適用する
    pub fn dispatch(&self, action: Action) {
        let persist = action.persists_favorites();
        self.state.update(|s| *s = reduce(s, action));

        if persist {
            let favorites = self.state.with_untracked(|s| s.favorites.clone());
            favorites_store::save(&favorites);
        }
    }

    /// 起動時にlocalStorageからお気に入りを復元する
    pub fn hydrate_favorites(&self) {
        self.dispatch(Action::LoadFavorites(favorites_store::load()));
    }

    /// 新しい取得要求を開始し、世代番号を返す
    fn begin_fetch(&self) -> u64 {
        self.fetch_epoch.update_value(|e| *e += 1);
        self.dispatch(Action::FetchStart);
        self.fetch_epoch.get_value()
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.fetch_epoch.get_value() == epoch
    }

    /// リスト取得（最新の要求だけが状態に反映される）
    pub fn load_list(self) {
        let epoch = self.begin_fetch();
        spawn_local(async move {
            match fbi::fetch_list(1).await {
                Ok(result) => {
                    if self.is_current(epoch) {
                        self.dispatch(Action::FetchSuccess(result.items));
                    }
                }
                Err(e) => self.handle_fetch_error(epoch, e),
            }
        });
    }

    /// ファンアウト検索を発行する（空クエリはリスト取得に等しい）
    pub fn search_remote(self) {
        let query = self
            .state
            .with_untracked(|s| s.search_term.trim().to_string());
        if query.is_empty() {
            self.load_list();
            return;
        }

        let epoch = self.begin_fetch();
        spawn_local(async move {
            match fbi::search(&query, 1).await {
                Ok(result) => {
                    if self.is_current(epoch) {
                        self.dispatch(Action::FetchSuccess(result.items));
                    }
                }
                Err(e) => self.handle_fetch_error(epoch, e),
            }
        });
    }

    /// 詳細モーダルを開く
    ///
    /// 手元のスナップショットで即座に開き、uid指定の取得が成功したら
    /// 最新データで差し替える。API失敗時のみサンプルを引く
    pub fn open_detail(self, record: wanted_common::WantedRecord) {
        let uid = record.uid.clone();
        self.dispatch(Action::Select(record));

        spawn_local(async move {
            let fresh = match fbi::fetch_by_uid(&uid).await {
                Ok(found) => found,
                Err(_) => sample_records().into_iter().find(|r| r.uid == uid),
            };

            if let Some(fresh) = fresh {
                // モーダルが同じレコードを表示している間だけ差し替える
                let still_open = self
                    .state
                    .with_untracked(|s| s.selected.as_ref().map(|r| r.uid == uid) == Some(true));
                if still_open {
                    self.dispatch(Action::Select(fresh));
                }
            }
        });
    }

    fn handle_fetch_error(&self, epoch: u64, e: JsValue) {
        // 古い要求の失敗は無視する
        if !self.is_current(epoch) {
            return;
        }

        web_sys::console::error_1(&e);
        self.dispatch(Action::FetchFailure("データの取得に失敗しました".to_string()));

        // 初回表示を空にしない
        let empty = self.state.with_untracked(|s| s.records.is_empty());
        if empty {
            self.dispatch(Action::FallbackData(sample_records()));
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new();
    provide_context(store);

    // 起動時: お気に入り復元 -> 初回リスト取得
    store.hydrate_favorites();
    store.load_list();

    let state = store.state();

    view! {
        <div class="container">
            <Header />

            <SearchBar />
            <FilterPanel />

            <Show when=move || state.get().error.is_some()>
                <div class="error-banner">
                    <span>{move || state.get().error.clone().unwrap_or_default()}</span>
                    <button
                        class="btn btn-small btn-secondary"
                        on:click=move |_| store.load_list()
                    >
                        "再試行"
                    </button>
                </div>
            </Show>

            <div class="result-summary">
                <span>{move || format!("{}件が該当", state.get().pagination.total)}</span>
                <Show when=move || !state.get().favorites.is_empty()>
                    <span class="favorites-count">
                        {move || format!("⭐ お気に入り {}件", state.get().favorites.len())}
                    </span>
                </Show>
            </div>

            <Show
                when=move || !state.get().loading
                fallback=|| view! { <p class="loading">"読み込み中..."</p> }
            >
                <Show
                    when=move || !state.get().filtered.is_empty()
                    fallback=move || view! {
                        <div class="empty-state">
                            <p>"該当するレコードがありません"</p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| store.dispatch(Action::ClearSearch)
                            >
                                "全件表示"
                            </button>
                        </div>
                    }
                >
                    <WantedGrid />
                    <Pagination />
                </Show>
            </Show>

            <DetailModal />
        </div>
    }
}
