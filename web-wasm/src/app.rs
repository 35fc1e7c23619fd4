//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use welfare_portal_common::session::{self, Gated, Route, SessionGate};
use welfare_portal_common::{
    load_dashboard, ApplicationForm, DashboardView, LocalRecordStore, SubmissionFlow, Timer,
};
use crate::browser_store::{now, BrowserStorage, GlooTimer};
use crate::components::{
    application_form::ApplicationFormPanel,
    dashboard_panel::DashboardPanel,
    header::Header,
    login_panel::LoginPanel,
    notice::Notice,
};

/// 表示中の画面
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Apply,
    Dashboard,
}

impl Page {
    fn from_route(route: &Route) -> Self {
        match route {
            Route::Login => Page::Login,
            Route::Dashboard => Page::Dashboard,
            Route::Scheme(_) => Page::Apply,
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Login);
    let (scheme_id, set_scheme_id) = signal("pre-matric".to_string());
    let (dashboard, set_dashboard) = signal(None::<DashboardView>);
    let (is_submitting, set_is_submitting) = signal(false);
    let (notice, set_notice) = signal(None::<String>);

    // 画面遷移。申請・ダッシュボードは未ログインならログイン画面へ
    let navigate = move |route: Route| {
        let gate = SessionGate::new(BrowserStorage);
        match route {
            Route::Dashboard => match load_dashboard(&gate, &LocalRecordStore::new(BrowserStorage)) {
                Gated::Open(view) => {
                    set_dashboard.set(Some(view));
                    set_page.set(Page::Dashboard);
                }
                Gated::Redirect(to) => {
                    set_notice.set(Some("Please login to view your dashboard".to_string()));
                    set_page.set(Page::from_route(&to));
                }
            },
            Route::Scheme(id) => match gate.check() {
                Gated::Open(()) => {
                    set_scheme_id.set(id);
                    set_page.set(Page::Apply);
                }
                Gated::Redirect(to) => {
                    set_notice.set(Some("Please login to apply for schemes".to_string()));
                    set_page.set(Page::from_route(&to));
                }
            },
            Route::Login => set_page.set(Page::Login),
        }
    };

    // ログイン済みならダッシュボードから開始
    if SessionGate::new(BrowserStorage).is_active() {
        navigate(Route::Dashboard);
    }

    let on_login = move |_| {
        match session::sign_in(&BrowserStorage) {
            Ok(()) => {
                set_notice.set(Some("Login Successful".to_string()));
                navigate(Route::Dashboard);
            }
            Err(e) => set_notice.set(Some(format!("ログイン失敗: {}", e))),
        }
    };

    let on_logout = move |_| {
        if let Err(e) = session::sign_out(&BrowserStorage) {
            gloo::console::warn!(format!("ログアウト失敗: {}", e));
        }
        set_dashboard.set(None);
        navigate(Route::Login);
    };

    // 申請送信ハンドラ
    let on_submit = move |form: ApplicationForm| {
        set_is_submitting.set(true);
        let scheme = scheme_id.get_untracked();

        spawn_local(async move {
            let flow = SubmissionFlow::new(
                LocalRecordStore::new(BrowserStorage),
                SessionGate::new(BrowserStorage),
                GlooTimer,
            );

            match flow.submit(&scheme, form, now()).await {
                Ok(Gated::Open(receipt)) => {
                    set_is_submitting.set(false);
                    set_notice.set(Some(format!(
                        "Application Submitted Successfully! Your application ID is {}. You can track it in your dashboard.",
                        receipt.application_id
                    )));
                    GlooTimer.sleep(receipt.redirect_after).await;
                    navigate(receipt.redirect);
                }
                Ok(Gated::Redirect(to)) => {
                    set_is_submitting.set(false);
                    navigate(to);
                }
                Err(e) => {
                    set_is_submitting.set(false);
                    gloo::console::error!(format!("申請保存失敗: {}", e));
                    set_notice.set(Some(format!("Submission failed: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <nav class="nav">
                <button class="btn btn-tertiary" on:click=move |_| navigate(Route::Scheme(scheme_id.get_untracked()))>
                    "Apply for a Scheme"
                </button>
                <button class="btn btn-tertiary" on:click=move |_| navigate(Route::Dashboard)>
                    "My Dashboard"
                </button>
                <button class="btn btn-tertiary" on:click=on_logout>
                    "Logout"
                </button>
            </nav>

            <Notice message=notice />

            {move || match page.get() {
                Page::Login => view! { <LoginPanel on_login=on_login /> }.into_any(),
                Page::Apply => view! {
                    <ApplicationFormPanel
                        scheme_id=scheme_id
                        set_scheme_id=set_scheme_id
                        is_submitting=is_submitting
                        on_submit=on_submit
                    />
                }.into_any(),
                Page::Dashboard => view! { <DashboardPanel view_data=dashboard /> }.into_any(),
            }}
        </div>
    }
}
