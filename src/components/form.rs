//! Form Components
//!
//! Labeled text input and dropdown used across the entry forms.

use leptos::*;

/// Labeled text input bound to a pair of signals
#[component]
pub fn TextField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-neutral-600 mb-1">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-white rounded-lg px-4 py-2
                       border border-neutral-300 focus:border-indigo-500 focus:outline-none"
            />
        </div>
    }
}

/// Labeled dropdown. Options are `(value, label)` pairs; pass a derived
/// signal for cascading lists.
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(into)]
    options: MaybeSignal<Vec<(String, String)>>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(into, optional)]
    disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-neutral-600 mb-1">{label}</label>
            <select
                on:change=move |ev| set_value.set(event_target_value(&ev))
                prop:value=move || value.get()
                disabled=move || disabled.get()
                class="w-full bg-white rounded-lg px-4 py-2
                       border border-neutral-300 focus:border-indigo-500 focus:outline-none
                       disabled:bg-neutral-100 disabled:text-neutral-400"
            >
                {move || {
                    options.get()
                        .into_iter()
                        .map(|(option_value, option_label)| view! {
                            <option value=option_value>{option_label}</option>
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
