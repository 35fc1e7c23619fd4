//! ログインパネルコンポーネント
//!
//! 認証は行わず、ボタンでセッションフラグを立てるだけ。

use leptos::prelude::*;

#[component]
pub fn LoginPanel<FL>(on_login: FL) -> impl IntoView
where
    FL: Fn(()) + 'static + Clone + Send + Sync,
{
    let (username, set_username) = signal(String::new());

    view! {
        <div class="login-panel">
            <h2>"Citizen Login"</h2>
            <form on:submit={
                let on_login = on_login.clone();
                move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_login(());
                }
            }>
                <div class="form-group">
                    <label for="username">"Mobile Number / UDID"</label>
                    <input
                        type="text"
                        id="username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            set_username.set(event_target_value(&ev));
                        }
                    />
                </div>
                <button type="submit" class="btn btn-primary">"Login"</button>
            </form>
        </div>
    }
}
