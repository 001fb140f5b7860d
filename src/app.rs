//! App Root Component
//!
//! Main application component with routing, the authenticated shell, and
//! global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Header, Sidebar, Toast};
use crate::pages::{
    AddSubAdmin, AddUsers, DashboardHome, DashboardLayout, DutyBoard, GenerateQr, Login, ScanLog,
};
use crate::state::{provide_app_state, provide_auth_store, AuthStore};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_auth_store();
    provide_app_state();

    view! {
        <Router>
            <div class="min-h-screen bg-neutral-100 text-neutral-900">
                <Routes>
                    <Route path="/" view=Login />

                    // Everything else sits behind the session check.
                    <Route path="" view=Shell>
                        <Route path="dashboard" view=DashboardLayout>
                            <Route path="" view=DashboardHome />
                            <Route path="user" view=DutyBoard />
                            <Route path="qr-code" view=ScanLog />
                        </Route>
                        <Route path="generate-qr" view=GenerateQr />
                        <Route path="add-users" view=AddUsers />
                        <Route path="add-subadmin" view=AddSubAdmin />
                        <Route path="/*any" view=NotFound />
                    </Route>
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Authenticated layout: header, sidebar, and the routed page. Without a
/// session it bounces back to the login page.
#[component]
fn Shell() -> impl IntoView {
    let auth = use_context::<AuthStore>().expect("AuthStore not found");

    view! {
        {move || {
            if auth.is_logged_in() {
                view! {
                    <Header />
                    <div class="pt-16 flex">
                        <Sidebar />
                        <div class="w-4/5 ml-[20%]">
                            <Outlet />
                        </div>
                    </div>
                }
                .into_view()
            } else {
                view! { <Redirect path="/" /> }.into_view()
            }
        }}
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-neutral-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
