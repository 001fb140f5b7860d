//! Header Component
//!
//! Fixed top bar with the app brand and the logout action.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::AuthStore;

/// Header bar component
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_context::<AuthStore>().expect("AuthStore not found");
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.logout();
        navigate("/", Default::default());
    };

    view! {
        <header class="h-16 fixed w-full z-40 flex justify-center">
            <div class="mx-12 px-4 rounded-xl w-full flex justify-between items-center bg-neutral-300 shadow-xl">
                <h1 class="text-xl font-bold text-blue-900">"Duty Track"</h1>

                <button
                    on:click=on_logout
                    class="px-4 py-2 bg-neutral-800 hover:bg-neutral-700 text-neutral-200 rounded-lg font-medium transition-colors"
                >
                    "Logout"
                </button>
            </div>
        </header>
    }
}
