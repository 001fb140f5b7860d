//! Dashboard Shell
//!
//! Tab navigation over the two dashboard views. `/dashboard` itself lands on
//! the users tab.

use leptos::*;
use leptos_router::*;

/// Dashboard layout with persistent tab navigation
#[component]
pub fn DashboardLayout() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-neutral-100 sm:p-8">
            <header class="mb-6 bg-white rounded-xl shadow-xl p-6">
                <nav class="flex flex-col sm:flex-row space-y-2 sm:space-y-0 sm:space-x-1 mt-4 border-b border-neutral-200">
                    <TabLink href="/dashboard/user" title="Users Dashboard" />
                    <TabLink href="/dashboard/qr-code" title="QR Code Log" />
                </nav>
            </header>

            <main class="bg-white rounded-xl shadow-xl p-6 min-h-[60vh]">
                <Outlet />
            </main>
        </div>
    }
}

/// The bare `/dashboard` route redirects to the users tab.
#[component]
pub fn DashboardHome() -> impl IntoView {
    view! { <Redirect path="/dashboard/user" /> }
}

#[component]
fn TabLink(
    href: &'static str,
    title: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="flex-1 sm:flex-none sm:w-auto text-center py-3 px-6 rounded-t-lg transition-all
                   duration-300 font-medium whitespace-nowrap text-neutral-600
                   hover:text-indigo-600 hover:bg-neutral-100 border-b-2 border-transparent"
            active_class="bg-indigo-600 text-white border-indigo-500 shadow-md"
        >
            {title}
        </A>
    }
}
