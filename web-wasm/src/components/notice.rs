//! お知らせ表示（送信結果・ログイン要求）

use leptos::prelude::*;

#[component]
pub fn Notice(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="notice" role="status">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
