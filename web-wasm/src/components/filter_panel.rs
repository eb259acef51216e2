//! 絞り込みパネルコンポーネント
//!
//! 性別（完全一致）・人種（部分一致）・容疑カテゴリ（交差）の
//! 構造化フィルタ。容疑カテゴリの候補は現在のレコードから導出する

use leptos::prelude::*;
use wanted_common::Action;

use crate::app::AppStore;

#[component]
pub fn FilterPanel() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let state = store.state();

    // レコード中に現れる容疑カテゴリ（重複なし、出現順）
    let subject_options = Memo::new(move |_| {
        let mut options: Vec<String> = Vec::new();
        for record in &state.get().records {
            for subject in &record.subjects {
                if !options.contains(subject) {
                    options.push(subject.clone());
                }
            }
        }
        options
    });

    let toggle_subject = move |subject: String| {
        let mut selected = state.get_untracked().filters.subjects;
        if let Some(pos) = selected.iter().position(|s| s == &subject) {
            selected.remove(pos);
        } else {
            selected.push(subject);
        }
        store.dispatch(Action::SetSubjectsFilter(selected));
    };

    view! {
        <div class="filter-panel">
            <div class="form-group">
                <label for="filter-sex">"性別"</label>
                <select
                    id="filter-sex"
                    on:change=move |ev| {
                        store.dispatch(Action::SetSexFilter(event_target_value(&ev)));
                    }
                >
                    <option value="" selected=move || state.get().filters.sex.is_empty()>
                        "指定なし"
                    </option>
                    <option value="Male" selected=move || state.get().filters.sex == "Male">
                        "男性"
                    </option>
                    <option value="Female" selected=move || state.get().filters.sex == "Female">
                        "女性"
                    </option>
                </select>
            </div>

            <div class="form-group">
                <label for="filter-race">"人種（部分一致）"</label>
                <input
                    type="text"
                    id="filter-race"
                    prop:value=move || state.get().filters.race.clone()
                    on:input=move |ev| {
                        store.dispatch(Action::SetRaceFilter(event_target_value(&ev)));
                    }
                />
            </div>

            <div class="form-group subjects-filter">
                <label>"容疑カテゴリ"</label>
                <For
                    each=move || subject_options.get()
                    key=|subject| subject.clone()
                    children=move |subject| {
                        let label = subject.clone();
                        let checked = {
                            let subject = subject.clone();
                            move || state.get().filters.subjects.contains(&subject)
                        };
                        view! {
                            <label class="subject-pill">
                                <input
                                    type="checkbox"
                                    checked=checked
                                    on:change={
                                        let subject = subject.clone();
                                        move |_| toggle_subject(subject.clone())
                                    }
                                />
                                {label}
                            </label>
                        }
                    }
                />
            </div>

            <Show when=move || state.get().filters.is_active()>
                <button
                    class="btn btn-small btn-tertiary"
                    on:click=move |_| store.dispatch(Action::ClearFilters)
                >
                    "フィルタ解除"
                </button>
            </Show>
        </div>
    }
}
