//! 検索バーコンポーネント
//!
//! 入力はその場でクライアント側の絞り込みに反映し、
//! Enter/検索ボタンで上流へのファンアウト検索を発行する

use leptos::prelude::*;
use wanted_common::Action;

use crate::app::AppStore;

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let state = store.state();

    let search_term = move || state.get().search_term.clone();
    let has_term = move || !state.get().search_term.is_empty();

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="名前・容疑・特徴で検索..."
                prop:value=search_term
                on:input=move |ev| {
                    store.dispatch(Action::SetSearchTerm(event_target_value(&ev)));
                }
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        store.search_remote();
                    }
                }
            />
            <button
                class="btn btn-primary"
                on:click=move |_| store.search_remote()
            >
                "検索"
            </button>
            <Show when=has_term>
                <button
                    class="btn btn-small btn-tertiary"
                    on:click=move |_| {
                        store.dispatch(Action::ClearSearch);
                        store.load_list();
                    }
                >
                    "クリア"
                </button>
            </Show>
        </div>
    }
}
