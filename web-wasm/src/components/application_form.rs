//! スキーム申請フォームコンポーネント

use leptos::prelude::*;
use welfare_portal_common::catalog;
use welfare_portal_common::form::{DISABILITY_PERCENTAGES, DISABILITY_TYPES};
use welfare_portal_common::{ApplicationForm, SchemeCategory};

#[component]
pub fn ApplicationFormPanel<FS>(
    scheme_id: ReadSignal<String>,
    set_scheme_id: WriteSignal<String>,
    is_submitting: ReadSignal<bool>,
    on_submit: FS,
) -> impl IntoView
where
    FS: Fn(ApplicationForm) + 'static + Clone + Send + Sync,
{
    let (form, set_form) = signal(ApplicationForm::new());
    let (missing, set_missing) = signal(Vec::<String>::new());

    let scheme = move || catalog::lookup(&scheme_id.get());

    view! {
        <div class="application-panel">
            <div class="form-group">
                <label for="scheme">"Scheme"</label>
                <select
                    id="scheme"
                    on:change=move |ev| set_scheme_id.set(event_target_value(&ev))
                >
                    {SchemeCategory::ALL
                        .iter()
                        .map(|category| view! {
                            <optgroup label=category.label()>
                                {catalog::by_category(*category)
                                    .map(|s| {
                                        let id = s.id;
                                        view! {
                                            <option value=id selected=move || scheme_id.get() == id>
                                                {s.name}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </optgroup>
                        })
                        .collect_view()}
                </select>
            </div>

            {move || scheme().map(|s| view! {
                <div class="scheme-summary">
                    <h2>{s.name}</h2>
                    <p class="text-muted">{s.category.label()}</p>
                    <p>{s.description}</p>
                    <p><strong>"Eligibility: "</strong>{s.eligibility}</p>
                    <p><strong>"Amount: "</strong>{s.amount.unwrap_or(catalog::AMOUNT_NOT_AVAILABLE)}</p>
                    <h3>"Required Documents"</h3>
                    <ul>
                        {s.documents.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                    </ul>
                </div>
            })}

            <form on:submit={
                let on_submit = on_submit.clone();
                move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    let current = form.get();
                    let fields = current.missing_fields();
                    if fields.is_empty() {
                        set_missing.set(Vec::new());
                        on_submit(current);
                    } else {
                        set_missing.set(fields);
                    }
                }
            }>
                <TextField label="Full Name" field="name" form=form set_form=set_form />
                <TextField label="Email Address" field="email" input_type="email" form=form set_form=set_form />
                <TextField label="Mobile Number" field="mobile" input_type="tel" form=form set_form=set_form />
                <TextField label="Date of Birth" field="dateOfBirth" input_type="date" form=form set_form=set_form />
                <SelectField label="Disability Type" field="disabilityType" options=DISABILITY_TYPES form=form set_form=set_form />
                <SelectField label="Disability Percentage" field="disabilityPercentage" options=DISABILITY_PERCENTAGES form=form set_form=set_form />
                <TextField label="Address" field="address" form=form set_form=set_form />
                <TextField label="City" field="city" form=form set_form=set_form />
                <TextField label="State" field="state" form=form set_form=set_form />
                <TextField label="Pincode" field="pincode" form=form set_form=set_form />
                <TextField label="Annual Income (₹)" field="income" input_type="number" form=form set_form=set_form />
                <TextField label="Bank Account Number" field="bankAccount" form=form set_form=set_form />
                <TextField label="IFSC Code" field="ifscCode" form=form set_form=set_form />

                <div class="form-group">
                    <label for="additionalInfo">"Additional Information"</label>
                    <textarea
                        id="additionalInfo"
                        rows="3"
                        prop:value=move || form.with(|f| f.additional_info.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_form.update(|f| f.additional_info = value);
                        }
                    />
                </div>

                <Show when=move || !missing.get().is_empty()>
                    <p class="form-error">
                        {move || format!("Please fill in: {}", missing.get().join(", "))}
                    </p>
                </Show>

                <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Submitting..." } else { "Submit Application" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn TextField(
    label: &'static str,
    field: &'static str,
    form: ReadSignal<ApplicationForm>,
    set_form: WriteSignal<ApplicationForm>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field>{label}" *"</label>
            <input
                type=input_type
                id=field
                name=field
                required
                prop:value=move || form.with(|f| f.get_field(field).unwrap_or_default().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_form.update(|f| {
                        f.set_field(field, value);
                    });
                }
            />
        </div>
    }
}

#[component]
fn SelectField(
    label: &'static str,
    field: &'static str,
    options: &'static [(&'static str, &'static str)],
    form: ReadSignal<ApplicationForm>,
    set_form: WriteSignal<ApplicationForm>,
) -> impl IntoView {
    let current = move || form.with(|f| f.get_field(field).unwrap_or_default().to_string());

    view! {
        <div class="form-group">
            <label for=field>{label}" *"</label>
            <select
                id=field
                required
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_form.update(|f| {
                        f.set_field(field, value);
                    });
                }
            >
                <option value="" selected=move || current().is_empty()>"Select..."</option>
                {options
                    .iter()
                    .map(|(value, text)| {
                        let value = *value;
                        view! {
                            <option value=value selected=move || current() == value>{*text}</option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
