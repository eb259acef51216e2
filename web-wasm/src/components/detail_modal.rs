//! 詳細モーダルコンポーネント

use leptos::prelude::*;
use wanted_common::{Action, WantedRecord};

use crate::app::AppStore;

#[component]
pub fn DetailModal() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let state = store.state();

    view! {
        {move || {
            state.get().selected.map(|record| {
                view! {
                    <div class="modal-overlay" on:click=move |_| store.dispatch(Action::ClearSelection)>
                        <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                            <DetailBody record=record />
                            <button
                                class="btn btn-secondary modal-close"
                                on:click=move |_| store.dispatch(Action::ClearSelection)
                            >
                                "閉じる"
                            </button>
                        </div>
                    </div>
                }
            })
        }}
    }
}

#[component]
fn DetailBody(record: WantedRecord) -> impl IntoView {
    let image_url = record
        .primary_image()
        .unwrap_or("https://via.placeholder.com/400x500?text=Photo+Not+Available")
        .to_string();

    view! {
        <div class="detail-body">
            <img src=image_url alt=record.title.clone() />

            <div class="detail-text">
                <h2>{record.title.clone()}</h2>

                {record.warning_message.as_ref().map(|warning| {
                    view! {
                        <div class="warning-banner">
                            <strong>{format!("⚠ 警告: {}", warning)}</strong>
                        </div>
                    }
                })}

                {record.reward_text.as_ref().map(|reward| {
                    view! {
                        <div class="reward-banner">
                            <strong>{reward.clone()}</strong>
                        </div>
                    }
                })}

                <h3>"容疑"</h3>
                <div class="subject-badges">
                    {record
                        .subjects
                        .iter()
                        .map(|s| view! { <span class="subject-badge">{s.clone()}</span> })
                        .collect_view()}
                </div>

                <h3>"個人情報"</h3>
                <dl class="detail-list">
                    <DetailRow label="性別" value=record.sex.clone() />
                    <DetailRow label="人種" value=record.race.clone() />
                    <DetailRow label="年齢" value=record.age_range.clone() />
                    <DetailRow label="身長" value=record.height_min.clone() />
                    <DetailRow label="体重" value=record.weight.clone() />
                    <DetailRow label="髪色" value=record.hair.clone() />
                    <DetailRow label="目の色" value=record.eyes.clone() />
                    <DetailRow label="国籍" value=record.nationality.clone() />
                    <DetailRow label="出生地" value=record.place_of_birth.clone() />
                </dl>

                {(!record.dates_of_birth_used.is_empty()).then(|| {
                    view! {
                        <h3>"使用された生年月日"</h3>
                        <p>{record.dates_of_birth_used.join(", ")}</p>
                    }
                })}

                {record.details.as_ref().map(|details| {
                    view! {
                        <h3>"詳細"</h3>
                        <p class="details-text">{details.clone()}</p>
                    }
                })}

                <p class="contact-note text-muted">
                    "この人物に関する情報をお持ちの場合は、決して近づかず、
                     最寄りの警察またはFBIに連絡してください。"
                </p>
            </div>
        </div>
    }
}

#[component]
fn DetailRow(label: &'static str, value: Option<String>) -> impl IntoView {
    value.map(|v| {
        view! {
            <div class="detail-row">
                <dt>{label}</dt>
                <dd>{v}</dd>
            </div>
        }
    })
}
