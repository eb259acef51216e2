//! ページネーションコンポーネント
//!
//! 絞り込み結果に対するクライアント側のページ送り

use leptos::prelude::*;
use wanted_common::Action;

use crate::app::AppStore;

#[component]
pub fn Pagination() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let state = store.state();

    let page = move || state.get().pagination.page;
    let total_pages = move || state.get().total_pages();

    view! {
        <div class="pagination">
            <button
                class="btn btn-secondary"
                disabled=move || page() <= 1
                on:click=move |_| {
                    store.dispatch(Action::SetPage(page().saturating_sub(1)));
                }
            >
                "← 前へ"
            </button>

            <span class="page-indicator">
                {move || format!("{} / {} ページ", page(), total_pages())}
            </span>

            <button
                class="btn btn-primary"
                disabled=move || page() >= total_pages()
                on:click=move |_| {
                    store.dispatch(Action::SetPage(page() + 1));
                }
            >
                "次へ →"
            </button>
        </div>
    }
}
