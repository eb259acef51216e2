//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Wanted Watch - FBI最重要指名手配リスト"</h1>
            <p class="text-muted">"データ提供: FBI公式API"</p>
        </header>
    }
}
