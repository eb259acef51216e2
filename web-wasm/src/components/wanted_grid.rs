//! レコード一覧グリッドコンポーネント

use leptos::prelude::*;
use wanted_common::{Action, WantedRecord};

use crate::app::AppStore;

#[component]
pub fn WantedGrid() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let state = store.state();

    view! {
        <div class="wanted-grid">
            <For
                each=move || state.get().page_items().to_vec()
                key=|record| record.uid.clone()
                children=move |record| {
                    view! { <WantedCard record=record /> }
                }
            />
        </div>
    }
}

#[component]
fn WantedCard(record: WantedRecord) -> impl IntoView {
    let store = expect_context::<AppStore>();
    let state = store.state();

    let image_url = record
        .primary_image()
        .unwrap_or("https://via.placeholder.com/300x400?text=Photo+Not+Available")
        .to_string();

    let is_favorite = {
        let uid = record.uid.clone();
        move || state.get().is_favorite(&uid)
    };
    let is_favorite_label = is_favorite.clone();

    let on_toggle_favorite = {
        let record = record.clone();
        move |_| {
            if state.get_untracked().is_favorite(&record.uid) {
                store.dispatch(Action::RemoveFavorite(record.uid.clone()));
            } else {
                store.dispatch(Action::AddFavorite(record.clone()));
            }
        }
    };

    let on_view_details = {
        let record = record.clone();
        move |_| store.open_detail(record.clone())
    };

    let demographics = [record.sex.as_deref(), record.age_range.as_deref()]
        .iter()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join(" / ");

    view! {
        <div class="wanted-card" class:favorite=is_favorite>
            <img src=image_url alt=record.title.clone() />
            <div class="card-info">
                <h4>{record.title.clone()}</h4>

                <Show when={
                    let has_warning = record.warning_message.is_some();
                    move || has_warning
                }>
                    <p class="warning-badge">"⚠ 危険人物"</p>
                </Show>

                <div class="subject-badges">
                    {record
                        .subjects
                        .iter()
                        .map(|s| view! { <span class="subject-badge">{s.clone()}</span> })
                        .collect_view()}
                </div>

                <Show when={
                    let has_demographics = !demographics.is_empty();
                    move || has_demographics
                }>
                    <p class="text-muted">{demographics.clone()}</p>
                </Show>

                <div class="card-actions">
                    <button class="btn btn-small btn-primary" on:click=on_view_details>
                        "詳細を見る"
                    </button>
                    <button class="btn btn-small btn-secondary" on:click=on_toggle_favorite>
                        {move || if is_favorite_label() { "⭐ お気に入り" } else { "☆ 追加" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
