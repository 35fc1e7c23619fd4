//! 市民ダッシュボードコンポーネント
//!
//! 統計カードと申請一覧。「詳細」「ダウンロード」は表示のみ。

use leptos::prelude::*;
use welfare_portal_common::dashboard::{actions_for, status_badge, ApplicationAction};
use welfare_portal_common::{ApplicationRecord, DashboardView};

#[component]
pub fn DashboardPanel(view_data: ReadSignal<Option<DashboardView>>) -> impl IntoView {
    let stats = move || view_data.with(|v| v.as_ref().map(|v| v.stats()).unwrap_or_default());
    let records = move || view_data.with(|v| v.as_ref().map(|v| v.records.clone()).unwrap_or_default());

    view! {
        <div class="dashboard">
            <div class="stats-grid">
                <StatCard label="Total Applications" value=Signal::derive(move || stats().total_applications.to_string()) />
                <StatCard label="Approved" value=Signal::derive(move || stats().approved_count.to_string()) />
                <StatCard label="Pending" value=Signal::derive(move || stats().pending_count.to_string()) />
                <StatCard label="Benefits Received" value=Signal::derive(move || stats().benefits_display()) />
            </div>

            <h2>"Application Status"</h2>
            <div class="application-list">
                <For
                    each=records
                    key=|record| record.id.clone()
                    children=move |record| view! { <ApplicationRow record=record /> }
                />
            </div>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
fn ApplicationRow(record: ApplicationRecord) -> impl IntoView {
    let badge = status_badge(&record.status);
    let actions = actions_for(&record);
    let id = record.id.clone();

    view! {
        <div class="application-row">
            <div class="application-info">
                <h3>{record.scheme_name.clone()}</h3>
                <span class=format!("badge {}", badge.class)>
                    {badge.icon.glyph()}" "{badge.label}
                </span>
                <div class="application-meta">
                    <span>"Application ID: "{record.id.clone()}</span>
                    <span>"Applied: "{record.applied_date.clone()}</span>
                    <span>"Amount: "{record.amount.clone()}</span>
                </div>
            </div>
            <div class="application-actions">
                {actions
                    .into_iter()
                    .map(|action| {
                        let id = id.clone();
                        let class = match action {
                            ApplicationAction::ViewDetails => "btn btn-secondary btn-small",
                            ApplicationAction::Download => "btn btn-primary btn-small",
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| {
                                    gloo::console::log!(format!("{} requested for {}", action.label(), id));
                                }
                            >
                                {action.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
