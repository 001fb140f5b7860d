//! Spreadsheet Upload Modals
//!
//! The two bulk-import dialogs (duty points and personnel) plus the shared
//! FileReader plumbing that turns the chosen file into bytes.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api::client;
use crate::import;
use crate::model::NewPerson;

/// Read the file into memory and hand the bytes to the callback.
fn read_file_bytes(file: &web_sys::File, on_loaded: impl FnMut(Vec<u8>) + 'static) {
    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };

    let onload = {
        let reader = reader.clone();
        let mut on_loaded = on_loaded;
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Ok(result) = reader.result() {
                if let Some(buffer) = result.dyn_ref::<js_sys::ArrayBuffer>() {
                    on_loaded(js_sys::Uint8Array::new(buffer).to_vec());
                }
            }
        }) as Box<dyn FnMut(_)>)
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let _ = reader.read_as_array_buffer(file);
}

fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input: web_sys::HtmlInputElement = event_target(ev);
    input.files().and_then(|files| files.get(0))
}

/// Bulk duty-point upload: parses the sheet and posts to `/qr/create/bulk`.
#[component]
pub fn DutyPointUpload(on_close: Callback<()>) -> impl IntoView {
    let file = create_rw_signal(None::<web_sys::File>);
    let (loading, set_loading) = create_signal(false);
    let (message, set_message) = create_signal(String::new());

    let on_file_change = move |ev: web_sys::Event| {
        file.set(selected_file(&ev));
        set_message.set(String::new());
    };

    let on_upload_click = move |_| {
        let Some(chosen) = file.get_untracked() else {
            set_message.set("Please select an Excel file.".to_string());
            return;
        };

        set_loading.set(true);
        set_message.set("Processing file...".to_string());

        let name = chosen.name();
        read_file_bytes(&chosen, move |bytes| {
            match import::parse_duty_points(&bytes, &name) {
                Err(e) => {
                    set_message.set(format!("Error: {}", e));
                    set_loading.set(false);
                }
                Ok(drafts) => {
                    let count = drafts.len();
                    set_message.set(format!("Found {} valid entries. Uploading...", count));

                    spawn_local(async move {
                        match client::create_duty_points_bulk(&drafts).await {
                            Ok(()) => {
                                set_message
                                    .set(format!("Successfully processed {} entries.", count));
                                file.set(None);
                                gloo_timers::callback::Timeout::new(2000, move || {
                                    on_close.call(());
                                })
                                .forget();
                            }
                            Err(e) => {
                                set_message.set(format!("Upload failed: {}", e));
                            }
                        }
                        set_loading.set(false);
                    });
                }
            }
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex justify-center items-center z-50">
            <div class="bg-white p-8 rounded-lg shadow-xl w-full max-w-lg">
                <h2 class="text-2xl font-bold mb-4">"Bulk QR Code Upload (Excel)"</h2>
                <p class="mb-4 text-sm text-neutral-600">
                    <span class="font-semibold">"Required Columns: "</span>
                    "Latitude, Longitude, Police Station, cug. Duty Point is optional."
                </p>

                <input
                    type="file"
                    accept=".xlsx, .xls, .csv"
                    on:change=on_file_change
                    class="mb-4 block w-full text-sm text-neutral-500"
                />

                {move || {
                    let text = message.get();
                    (!text.is_empty()).then(|| {
                        let color = if text.starts_with("Error") || text.starts_with("Upload failed") {
                            "text-red-600"
                        } else {
                            "text-blue-600"
                        };
                        view! { <p class=format!("mb-4 text-sm {}", color)>{text}</p> }
                    })
                }}

                <div class="flex justify-end space-x-4">
                    <button
                        on:click=move |_| on_close.call(())
                        disabled=move || loading.get()
                        class="px-4 py-2 border border-neutral-300 rounded-lg hover:bg-neutral-100 transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        on:click=on_upload_click
                        disabled=move || loading.get() || file.with(Option::is_none)
                        class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 disabled:bg-neutral-400
                               text-white rounded-lg transition-colors"
                    >
                        {move || if loading.get() { "Uploading..." } else { "Process & Generate Bulk QR" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Bulk personnel upload: parses the sheet and hands the rows to the page,
/// which owns the signup call and its 207 reporting.
#[component]
pub fn RecruitUpload(
    on_upload: Callback<Vec<NewPerson>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let file = create_rw_signal(None::<web_sys::File>);
    let (loading, set_loading) = create_signal(false);
    let (message, set_message) = create_signal(String::new());

    let on_file_change = move |ev: web_sys::Event| {
        file.set(selected_file(&ev));
        set_message.set(String::new());
    };

    let on_upload_click = move |_| {
        let Some(chosen) = file.get_untracked() else {
            set_message.set("Please select a file first.".to_string());
            return;
        };

        set_loading.set(true);

        let name = chosen.name();
        read_file_bytes(&chosen, move |bytes| {
            match import::parse_recruits(&bytes, &name) {
                Err(e) => {
                    set_message.set(format!("Error: {}", e));
                }
                Ok(recruits) => {
                    file.set(None);
                    on_upload.call(recruits);
                    on_close.call(());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50">
            <div class="bg-white p-6 rounded-lg shadow-xl w-96">
                <h2 class="text-xl font-bold mb-4">"Bulk User Upload"</h2>
                <p class="text-sm text-neutral-600 mb-4">
                    "Upload an Excel or CSV file containing columns: "
                    <span class="font-semibold">"name, pnoNo, Password, co, policeStation."</span>
                    <span class="ml-1 italic text-red-500">"(Password is case-sensitive)"</span>
                </p>

                <input
                    type="file"
                    accept=".xlsx, .xls, .csv"
                    on:change=on_file_change
                    class="mb-4 block w-full text-sm text-neutral-500"
                />

                {move || {
                    let text = message.get();
                    (!text.is_empty()).then(|| view! {
                        <p class="mb-4 text-sm text-red-600">{text}</p>
                    })
                }}

                <div class="flex justify-end gap-2">
                    <button
                        on:click=move |_| on_close.call(())
                        disabled=move || loading.get()
                        class="px-4 py-2 border border-neutral-300 rounded-lg hover:bg-neutral-100 transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        on:click=on_upload_click
                        disabled=move || loading.get() || file.with(Option::is_none)
                        class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 disabled:bg-neutral-400
                               text-white rounded-lg transition-colors"
                    >
                        {move || if loading.get() { "Processing..." } else { "Upload & Create" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
