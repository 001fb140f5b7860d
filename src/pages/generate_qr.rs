//! Generate QR Page
//!
//! Single duty-point entry with coordinate validation, plus the bulk
//! spreadsheet upload modal. A successful generate shows the rendered QR
//! code and the reverse-geocoded address preview.

use leptos::*;

use crate::api::{client, geocode};
use crate::components::{DutyPointUpload, TextField};
use crate::model::{validate_latitude, validate_longitude, QrDraft};
use crate::qr;
use crate::state::AppState;

/// QR generator page component
#[component]
pub fn GenerateQr() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (lat, set_lat) = create_signal(String::new());
    let (long, set_long) = create_signal(String::new());
    let (police_station, set_police_station) = create_signal(String::new());
    let (duty_point, set_duty_point) = create_signal(String::new());
    let (cug, set_cug) = create_signal(String::new());

    let lat_error = create_rw_signal(None::<String>);
    let long_error = create_rw_signal(None::<String>);
    let qr_url = create_rw_signal(None::<String>);
    let address = create_rw_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);
    let (modal_open, set_modal_open) = create_signal(false);

    // Validate as the user types, but not before they have typed anything.
    create_effect(move |prev: Option<()>| {
        let value = lat.get();
        if prev.is_some() {
            lat_error.set(validate_latitude(&value));
        }
    });
    create_effect(move |prev: Option<()>| {
        let value = long.get();
        if prev.is_some() {
            long_error.set(validate_longitude(&value));
        }
    });

    let state_for_generate = state.clone();
    let on_generate = move |_| {
        let lat_value = lat.get();
        let long_value = long.get();
        let station_value = police_station.get();

        let lat_err = validate_latitude(&lat_value);
        let long_err = validate_longitude(&long_value);
        lat_error.set(lat_err.clone());
        long_error.set(long_err.clone());

        if lat_err.is_some() || long_err.is_some() || station_value.is_empty() {
            state_for_generate.show_error("Please correct the errors and fill all fields.");
            return;
        }

        let draft = QrDraft {
            latitude: lat_value,
            longitude: long_value,
            police_station: station_value,
            duty_point: duty_point.get(),
            cug: cug.get().trim().parse().ok(),
        };

        set_submitting.set(true);

        let state = state_for_generate.clone();
        spawn_local(async move {
            let resolved = geocode::reverse_geocode(&draft.latitude, &draft.longitude).await;
            address.set(Some(resolved));

            match qr::qr_data_url(&draft) {
                Ok(url) => qr_url.set(Some(url)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error generating QR code: {}", e).into());
                    state.show_error("Failed to generate QR code.");
                    set_submitting.set(false);
                    return;
                }
            }

            match client::create_duty_point(&draft).await {
                Ok(()) => state.show_success("QR code generated successfully!"),
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="h-full flex items-center pt-8 flex-col">
            <h1 class="text-4xl text-neutral-900 font-bold">"Generate QR Code"</h1>

            <div class="w-1/2 flex bg-neutral-300 border border-neutral-800/50 p-8 rounded-xl mt-12 flex-col gap-4">
                <div class="flex justify-end mb-4">
                    <button
                        on:click=move |_| set_modal_open.set(true)
                        class="px-4 py-2 bg-green-600 hover:bg-green-700 text-white rounded-lg font-medium transition-colors"
                    >
                        "Upload from Excel"
                    </button>
                </div>

                <h2 class="text-2xl font-semibold mb-2 text-center">"Single Entry"</h2>

                <div>
                    <TextField label="Latitude" value=lat set_value=set_lat input_type="number" />
                    {move || lat_error.get().map(|error| view! {
                        <p class="text-red-500 text-sm">{error}</p>
                    })}
                </div>

                <div>
                    <TextField label="Longitude" value=long set_value=set_long input_type="number" />
                    {move || long_error.get().map(|error| view! {
                        <p class="text-red-500 text-sm">{error}</p>
                    })}
                </div>

                <TextField label="Police Station" value=police_station set_value=set_police_station />
                <TextField label="CUG Number" value=cug set_value=set_cug input_type="number" />
                <TextField label="Duty Point" value=duty_point set_value=set_duty_point />

                <div class="flex justify-center">
                    <button
                        on:click=on_generate
                        disabled=move || submitting.get()
                        class="px-6 py-2 bg-neutral-800 hover:bg-neutral-700 disabled:bg-neutral-500
                               text-neutral-200 rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Generating..." } else { "Generate Single QR" }}
                    </button>
                </div>
            </div>

            {move || qr_url.get().map(|url| view! {
                <div class="mt-8 flex flex-col items-center p-6 border rounded-lg shadow-lg bg-white">
                    <h2 class="text-xl font-semibold mb-4">"Scan Me!"</h2>
                    <img
                        src=url
                        alt="Generated QR Code"
                        class="w-64 h-64 border-4 border-neutral-200"
                    />
                    {move || address.get().map(|resolved| view! {
                        <p class="mt-4 text-sm text-neutral-600">{resolved}</p>
                    })}
                </div>
            })}

            {move || modal_open.get().then(|| view! {
                <DutyPointUpload on_close=Callback::new(move |_| set_modal_open.set(false)) />
            })}
        </div>
    }
}
