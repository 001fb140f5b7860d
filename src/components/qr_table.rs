//! QR Table Component
//!
//! Scan-log table: police-station search, multi-select with select-all,
//! newest-first ordering, and the two bulk actions (printable PDF sheet,
//! delete).

use leptos::*;
use std::collections::HashSet;
use wasm_bindgen::JsCast;

use crate::api::client;
use crate::model::{QrDraft, QrRecord};
use crate::pdf;
use crate::state::AppState;

/// Scan history table over the full scan log
#[component]
pub fn QrTable() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (search, set_search) = create_signal(String::new());
    let selected = create_rw_signal(HashSet::<String>::new());

    let state_for_filter = state.clone();
    let filtered = create_memo(move |_| {
        let needle = search.get().to_lowercase();
        let scans = state_for_filter.all_scans.get();
        if needle.is_empty() {
            scans
        } else {
            scans
                .into_iter()
                .filter(|scan| scan.police_station.to_lowercase().contains(&needle))
                .collect()
        }
    });

    let is_all_selected = create_memo(move |_| {
        let visible = filtered.get();
        !visible.is_empty() && selected.with(|sel| visible.iter().all(|scan| sel.contains(&scan.id)))
    });
    let is_indeterminate = create_memo(move |_| {
        !selected.with(HashSet::is_empty) && !is_all_selected.get()
    });
    let selection_empty = move || selected.with(HashSet::is_empty);

    let toggle_all = move |_| {
        if is_all_selected.get() {
            selected.set(HashSet::new());
        } else {
            // Select only the currently visible rows.
            selected.set(filtered.get().iter().map(|scan| scan.id.clone()).collect());
        }
    };

    let toggle_row = move |id: String| {
        selected.update(|sel| {
            if !sel.remove(&id) {
                sel.insert(id);
            }
        });
    };

    let on_search = move |ev| {
        set_search.set(event_target_value(&ev));
        // Selection refers to visible rows; drop it when the view changes.
        selected.set(HashSet::new());
    };

    let state_for_pdf = state.clone();
    let generate_pdf = move |_| {
        let drafts: Vec<QrDraft> = filtered
            .get_untracked()
            .iter()
            .filter(|scan| selected.with_untracked(|sel| sel.contains(&scan.id)))
            .map(QrDraft::from)
            .collect();
        if drafts.is_empty() {
            state_for_pdf.show_error("Please select at least one row to generate a QR code.");
            return;
        }

        match pdf::qr_sheet(&drafts) {
            Ok(bytes) => {
                download_bytes(pdf::SHEET_FILE_NAME, &bytes);
                state_for_pdf.show_success("PDF successfully generated!");
            }
            Err(e) => {
                web_sys::console::error_1(&format!("PDF generation failed: {}", e).into());
                state_for_pdf.show_error("Could not generate PDF.");
            }
        }
    };

    let state_for_delete = state.clone();
    let delete_selected = move |_| {
        let ids: Vec<String> = selected.with_untracked(|sel| sel.iter().cloned().collect());
        if ids.is_empty() {
            return;
        }

        let state = state_for_delete.clone();
        spawn_local(async move {
            match client::delete_scans(&ids).await {
                Ok(deleted) => {
                    state.remove_scans(&ids);
                    selected.set(HashSet::new());
                    state.show_success(&format!("Deleted {} QR record(s)", deleted));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error while deleting QRs: {}", e).into());
                    state.show_error("Error while deleting selected QRs");
                }
            }
        });
    };

    let total = {
        let state = state.clone();
        create_memo(move |_| state.all_scans.with(Vec::len))
    };

    view! {
        <div class="bg-neutral-200 rounded-xl shadow-2xl p-4 md:p-6 overflow-x-auto">
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4 mb-4">
                <h2 class="text-2xl font-bold text-indigo-700 whitespace-nowrap">
                    "Duty Point Scans"
                </h2>

                <input
                    type="text"
                    placeholder="Search Police Station..."
                    prop:value=move || search.get()
                    on:input=on_search
                    class="w-full sm:w-80 px-4 py-2 border border-neutral-300 rounded-lg
                           focus:border-indigo-500 focus:outline-none"
                />

                <div class="flex gap-4">
                    <button
                        on:click=generate_pdf
                        disabled=selection_empty
                        class="px-4 py-2 bg-green-700 hover:bg-green-600 disabled:opacity-50
                               disabled:cursor-not-allowed text-white rounded-lg font-medium transition-colors"
                    >
                        {move || format!("Generate QrCode ({})", selected.with(HashSet::len))}
                    </button>
                    <button
                        on:click=delete_selected
                        disabled=selection_empty
                        class="px-4 py-2 bg-red-500 hover:bg-red-600/70 disabled:opacity-50
                               disabled:cursor-not-allowed text-white rounded-lg font-medium transition-colors"
                    >
                        {move || format!("Delete ({})", selected.with(HashSet::len))}
                    </button>
                </div>
            </div>

            <p class="mb-3 text-sm text-neutral-600">
                {move || format!(
                    "{} of {} row(s) selected (Total: {}).",
                    selected.with(HashSet::len),
                    filtered.with(Vec::len),
                    total.get()
                )}
            </p>

            {move || {
                if total.get() == 0 {
                    return view! {
                        <div class="p-6 text-center text-neutral-500 bg-white rounded-lg shadow-inner">
                            "No data records available."
                        </div>
                    }
                    .into_view();
                }

                let visible = filtered.get();
                if visible.is_empty() {
                    return view! {
                        <div class="p-6 text-center text-neutral-500 bg-white rounded-lg shadow-inner mt-4">
                            {format!("No records found for \"{}\".", search.get())}
                        </div>
                    }
                    .into_view();
                }

                // Newest first.
                let rows: Vec<QrRecord> = visible.into_iter().rev().collect();

                view! {
                    <table class="min-w-full divide-y divide-neutral-200">
                        <thead class="bg-indigo-50 sticky top-0">
                            <tr>
                                <th class="px-4 py-3 text-left w-1">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || is_all_selected.get()
                                        prop:indeterminate=move || is_indeterminate.get()
                                        on:change=toggle_all
                                    />
                                </th>
                                <ColumnHeader label="Latitude" />
                                <ColumnHeader label="Longitude" />
                                <ColumnHeader label="Police Station" />
                                <ColumnHeader label="Duty Point" />
                                <ColumnHeader label="Scanned" />
                                <ColumnHeader label="Scanned On" />
                                <ColumnHeader label="Scanned By" />
                                <ColumnHeader label="Updated At" />
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-neutral-100">
                            {rows.into_iter().map(|scan| {
                                let row_id = scan.id.clone();
                                let check_id = scan.id.clone();
                                let is_selected = {
                                    let id = scan.id.clone();
                                    move || selected.with(|sel| sel.contains(&id))
                                };
                                let row_class = {
                                    let is_selected = is_selected.clone();
                                    move || {
                                        if is_selected() {
                                            "transition-colors cursor-pointer bg-indigo-50 hover:bg-indigo-100"
                                        } else {
                                            "transition-colors cursor-pointer hover:bg-neutral-50"
                                        }
                                    }
                                };

                                view! {
                                    <tr
                                        class=row_class
                                        on:click=move |_| toggle_row(row_id.clone())
                                    >
                                        <td class="px-4 py-4 w-1">
                                            <input
                                                type="checkbox"
                                                prop:checked=is_selected
                                                on:click=move |ev: web_sys::MouseEvent| {
                                                    ev.stop_propagation();
                                                    toggle_row(check_id.clone());
                                                }
                                            />
                                        </td>
                                        <Cell value=scan.latitude.clone() />
                                        <Cell value=scan.longitude.clone() />
                                        <Cell value=scan.police_station.clone() />
                                        <Cell value=scan.duty_point.clone() />
                                        <td class="px-4 py-4 text-sm font-semibold whitespace-nowrap">
                                            {if scan.is_scanned {
                                                view! { <span class="text-green-600">"Yes"</span> }
                                            } else {
                                                view! { <span class="text-red-600">"No"</span> }
                                            }}
                                        </td>
                                        <Cell value=scan.scanned_on.clone().unwrap_or_else(|| "N/A".to_string()) />
                                        <Cell value=scan.scanned_by.clone() />
                                        <Cell value=format_timestamp(&scan.updated_at) />
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_view()
            }}
        </div>
    }
}

#[component]
fn ColumnHeader(label: &'static str) -> impl IntoView {
    view! {
        <th class="px-4 py-3 text-left text-xs font-semibold text-indigo-800 uppercase tracking-wider whitespace-nowrap">
            {label}
        </th>
    }
}

#[component]
fn Cell(#[prop(into)] value: String) -> impl IntoView {
    view! {
        <td class="px-4 py-4 text-sm font-medium text-neutral-800 whitespace-nowrap">
            {value}
        </td>
    }
}

/// Render backend ISO timestamps as a readable local-style string, leaving
/// anything unparseable untouched.
fn format_timestamp(value: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(value) {
        Ok(ts) => ts.format("%d %b %Y, %I:%M %p").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Trigger a browser download of in-memory bytes via a temporary object URL.
fn download_bytes(file_name: &str, bytes: &[u8]) {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array.into());
    let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence(&parts) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        if let Ok(anchor) = document.create_element("a") {
            let _ = anchor.set_attribute("href", &url);
            let _ = anchor.set_attribute("download", file_name);
            if let Some(element) = anchor.dyn_ref::<web_sys::HtmlElement>() {
                element.click();
            }
        }
    }

    let _ = web_sys::Url::revoke_object_url(&url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2026-08-05T14:30:00.000Z"),
            "05 Aug 2026, 02:30 PM"
        );
        // Non-ISO values pass through untouched.
        assert_eq!(format_timestamp("05-08-2026 02:30 PM"), "05-08-2026 02:30 PM");
        assert_eq!(format_timestamp(""), "");
    }
}
