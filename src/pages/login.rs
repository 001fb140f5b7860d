//! Login Page
//!
//! Admin sign-in. An existing session skips straight to the dashboard;
//! a fresh login lands on the QR generator.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::TextField;
use crate::state::{AppState, AuthStore};

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let auth = use_context::<AuthStore>().expect("AuthStore not found");
    let state = use_context::<AppState>().expect("AppState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    // A session persisted from an earlier visit goes straight to the
    // dashboard. Checked once on mount; a fresh login routes itself below.
    let auth_for_effect = auth.clone();
    let navigate = use_navigate();
    let navigate_for_effect = navigate.clone();
    create_effect(move |_| {
        if auth_for_effect.token.with_untracked(Option::is_some) {
            navigate_for_effect("/dashboard", Default::default());
        }
    });

    let loading = auth.loading;
    let on_login = move |_| {
        let email = email.get();
        let password = password.get();

        let auth = auth.clone();
        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.login(&email, &password).await {
                Ok(()) => navigate("/generate-qr", Default::default()),
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="flex min-h-screen items-center flex-col pt-[8%]">
            <h1 class="text-2xl text-blue-900 font-bold mb-6 text-center">"Duty Track"</h1>

            <div class="w-1/2 p-10 rounded-xl border border-neutral-800/50 shadow-md">
                <div class="flex flex-col gap-8">
                    <TextField label="Email" value=email set_value=set_email />
                    <TextField
                        label="Password"
                        value=password
                        set_value=set_password
                        input_type="password"
                    />
                </div>

                <div class="w-full flex justify-center mt-6">
                    <button
                        on:click=on_login
                        disabled=move || loading.get()
                        class="px-6 py-2 bg-neutral-800 hover:bg-neutral-700 disabled:bg-neutral-500
                               text-neutral-200 rounded-lg font-medium transition-colors"
                    >
                        {move || if loading.get() { "Logging In" } else { "Login" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
