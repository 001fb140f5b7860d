//! Add Users Page
//!
//! Single personnel entry with cascading CO / police-station dropdowns, and
//! the bulk spreadsheet upload feeding the 207-aware signup endpoint.

use leptos::*;

use crate::api::{client, SignupOutcome};
use crate::components::{RecruitUpload, SelectField, TextField};
use crate::model::NewPerson;
use crate::state::{AppState, AuthStore};

fn co_options() -> Vec<(String, String)> {
    vec![
        (String::new(), "Select CO".to_string()),
        ("city".to_string(), "City".to_string()),
        ("kairana".to_string(), "Kairana".to_string()),
        ("thanabhawan".to_string(), "Thanabhawan".to_string()),
    ]
}

/// Police-station choices depend on the selected circle.
fn station_options_for(co: &str) -> Vec<(String, String)> {
    let stations: &[(&str, &str)] = match co {
        "city" => &[("shamli", "Shamli"), ("adarshMandi", "Adarsh Mandi")],
        "kairana" => &[
            ("kairana", "Kairana"),
            ("jhinjhana", "Jhinjana"),
            ("kandhala", "Kandhala"),
        ],
        "thanabhawan" => &[
            ("thanabhawan", "Thanabhawan"),
            ("babri", "Babri"),
            ("garipukhta", "Garipukhta"),
        ],
        _ => return vec![(String::new(), "Select CO first".to_string())],
    };

    std::iter::once((String::new(), "Select Police Station".to_string()))
        .chain(
            stations
                .iter()
                .map(|(value, label)| (value.to_string(), label.to_string())),
        )
        .collect()
}

/// Create-users page component
#[component]
pub fn AddUsers() -> impl IntoView {
    let auth = use_context::<AuthStore>().expect("AuthStore not found");
    let state = use_context::<AppState>().expect("AppState not found");

    let (name, set_name) = create_signal(String::new());
    let (pno_no, set_pno_no) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (co, set_co) = create_signal(String::new());
    let (police_station, set_police_station) = create_signal(String::new());
    let (modal_open, set_modal_open) = create_signal(false);

    // Changing the circle invalidates the station choice.
    create_effect(move |_| {
        co.track();
        set_police_station.set(String::new());
    });

    let station_options = create_memo(move |_| station_options_for(&co.get()));

    let auth_for_create = auth.clone();
    let state_for_create = state.clone();
    let on_create = move |_| {
        let Some(admin_id) = auth_for_create.admin_id() else {
            state_for_create.show_error("Admin ID not found. Cannot create user.");
            return;
        };

        let draft = NewPerson {
            name: name.get(),
            pno_no: pno_no.get(),
            password: password.get(),
            co: co.get(),
            police_station: police_station.get(),
        };

        if draft.name.is_empty()
            || draft.pno_no.is_empty()
            || draft.password.is_empty()
            || draft.co.is_empty()
            || draft.police_station.is_empty()
        {
            state_for_create
                .show_error("Please fill all fields: Name, PNO No, Password, CO, and Police Station.");
            return;
        }

        let state = state_for_create.clone();
        spawn_local(async move {
            match client::create_person(&draft, admin_id).await {
                Ok(()) => {
                    state.show_success("User created successfully!");
                    set_name.set(String::new());
                    set_pno_no.set(String::new());
                    set_password.set(String::new());
                    set_co.set(String::new());
                    set_police_station.set(String::new());
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    let auth_for_bulk = auth.clone();
    let state_for_bulk = state.clone();
    let on_bulk_upload = Callback::new(move |batch: Vec<NewPerson>| {
        let Some(admin_id) = auth_for_bulk.admin_id() else {
            state_for_bulk.show_error("Admin ID is missing");
            return;
        };
        if batch.is_empty() {
            state_for_bulk.show_error("No valid user data found in the file.");
            return;
        }

        let state = state_for_bulk.clone();
        spawn_local(async move {
            let total = batch.len();
            match client::create_persons_bulk(&batch, admin_id).await {
                Ok(SignupOutcome::Created) => {
                    state.show_success(&format!("{} users uploaded successfully!", total));
                }
                Ok(SignupOutcome::Partial { message, failed }) => {
                    state.show_success(&message);
                    if failed > 0 {
                        state.show_error(&format!("Failed to create {} user(s).", failed));
                    }
                }
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="flex flex-col items-center min-h-screen bg-neutral-100 p-4">
            <div class="my-4 text-center">
                <h1 class="text-3xl font-bold text-neutral-800">"Create Users"</h1>
                <p class="text-sm text-neutral-500 mt-1">"Single entry or bulk upload"</p>
            </div>

            <div class="w-full max-w-2xl mt-8">
                <div class="flex justify-end mb-4">
                    <button
                        on:click=move |_| set_modal_open.set(true)
                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                    >
                        "Bulk Upload (Excel/CSV)"
                    </button>
                </div>

                <div class="bg-white shadow-xl border border-neutral-200 p-8 rounded-xl flex flex-col gap-4">
                    <h2 class="text-xl font-semibold mb-2 text-neutral-700">"Single User Entry"</h2>

                    <TextField label="Name" value=name set_value=set_name />
                    <TextField label="PNO No" value=pno_no set_value=set_pno_no />
                    <TextField label="Password" value=password set_value=set_password input_type="password" />

                    <SelectField
                        label="Select CO"
                        options=co_options()
                        value=co
                        set_value=set_co
                    />

                    <SelectField
                        label="Select Police Station"
                        options=station_options
                        value=police_station
                        set_value=set_police_station
                        disabled=Signal::derive(move || co.get().is_empty())
                    />

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

            {move || modal_open.get().then(|| view! {
                <RecruitUpload
                    on_upload=on_bulk_upload
                    on_close=Callback::new(move |_| set_modal_open.set(false))
                />
            })}
        </div>
    }
}
