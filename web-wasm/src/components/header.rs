//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Department for Welfare of Persons with Disabilities"</h1>
        </header>
    }
}
