//! Sidebar Component
//!
//! Section navigation for the admin console.

use leptos::*;
use leptos_router::*;

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="h-screen w-1/5 fixed border border-neutral-800/50 rounded-xl bg-neutral-200">
            <div class="p-4 h-full w-full flex gap-4 flex-col">
                <div class="gap-2 flex flex-col">
                    <SidebarLink href="/dashboard" label="Dashboard" />
                    <SidebarLink href="/generate-qr" label="Generate QR" />
                    <SidebarLink href="/add-users" label="Add User" />
                    <SidebarLink href="/add-subadmin" label="Add Sub Admin" />
                </div>
            </div>
        </aside>
    }
}

/// Individual sidebar link
#[component]
fn SidebarLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="bg-neutral-800 hover:bg-neutral-700 text-neutral-400 cursor-pointer py-2 px-4 transition-all ease-in-out rounded-lg text-sm"
            active_class="bg-green-700 text-neutral-200 font-semibold"
        >
            {label}
        </A>
    }
}
