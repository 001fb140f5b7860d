//! Add Sub-Admin Page

use leptos::*;

use crate::api::client;
use crate::components::{SelectField, TextField};
use crate::model::SubAdminDraft;
use crate::state::AppState;

fn role_options() -> Vec<(String, String)> {
    vec![
        (String::new(), "Select Role".to_string()),
        ("sho".to_string(), "SHO".to_string()),
        ("co".to_string(), "All Circle".to_string()),
        ("asp".to_string(), "ASP".to_string()),
    ]
}

/// Sub-admin creation page component
#[component]
pub fn AddSubAdmin() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (name, set_name) = create_signal(String::new());
    let (mobile, set_mobile) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (role, set_role) = create_signal(String::new());

    let on_create = move |_| {
        let draft = SubAdminDraft {
            name: name.get(),
            role: role.get(),
            mobile_no: mobile.get(),
            password: password.get(),
        };

        if draft.name.is_empty()
            || draft.role.is_empty()
            || draft.mobile_no.is_empty()
            || draft.password.is_empty()
        {
            state.show_error("Please fill all fields: Role, Name, Mobile No, and Password.");
            return;
        }

        let state = state.clone();
        spawn_local(async move {
            match client::create_sub_admin(&draft).await {
                Ok(()) => {
                    state.show_success("Sub admin created");
                    set_name.set(String::new());
                    set_mobile.set(String::new());
                    set_password.set(String::new());
                    set_role.set(String::new());
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="flex justify-center items-center">
            <div class="bg-white w-3/4 mt-16 shadow-xl border border-neutral-200 p-8 rounded-xl flex flex-col gap-4">
                <h2 class="text-xl font-semibold mb-2 text-neutral-700">"Add Sub Admin"</h2>

                <SelectField label="Role" options=role_options() value=role set_value=set_role />
                <TextField label="Name" value=name set_value=set_name />
                <TextField label="Mobile No" value=mobile set_value=set_mobile />
                <TextField label="Password" value=password set_value=set_password input_type="password" />

                <div class="flex justify-center mt-4">
                    <button
                        on:click=on_create
                        class="w-1/3 px-4 py-2 bg-neutral-800 hover:bg-neutral-700
                               text-neutral-200 rounded-lg font-medium transition-colors"
                    >
                        "Create User"
                    </button>
                </div>
            </div>
        </div>
    }
}
