//! Duty Board Page
//!
//! Personnel view of the dashboard: loads the admin's persons, fans out one
//! fetch per person for scan history, geocodes the last scan of each, and
//! filters the table by station, date window, time phase, and search text.

use chrono::NaiveDate;
use leptos::*;

use crate::api::{client, geocode};
use crate::components::{PersonTable, SelectField, TextField};
use crate::filter::{self, ScanFilter, TIME_PHASES};
use crate::state::{AppState, AuthStore};

/// Duty board page component
#[component]
pub fn DutyBoard() -> impl IntoView {
    let auth = use_context::<AuthStore>().expect("AuthStore not found");
    let state = use_context::<AppState>().expect("AppState not found");

    let (query, set_query) = create_signal(String::new());
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (phase_label, set_phase_label) = create_signal(String::new());
    let (station, set_station) = create_signal(String::new());

    // Outstanding per-person fetches; loading clears when it hits zero.
    let pending = create_rw_signal(0usize);

    let auth_for_effect = auth.clone();
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let Some(admin_id) = auth_for_effect.admin_id() else {
            return;
        };

        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match client::fetch_persons(admin_id).await {
                Ok(persons) => {
                    state.persons.set(persons.clone());
                    if persons.is_empty() {
                        state.loading.set(false);
                        return;
                    }

                    // One task per person; results merge in whatever order
                    // they land.
                    pending.set(persons.len());
                    for person in persons {
                        let state = state.clone();
                        spawn_local(async move {
                            let scans = match client::fetch_scans(&person.pno_no).await {
                                Ok(scans) => scans,
                                Err(e) => {
                                    web_sys::console::error_1(
                                        &format!(
                                            "Error fetching QR data for PNO {}: {}",
                                            person.pno_no, e
                                        )
                                        .into(),
                                    );
                                    Vec::new()
                                }
                            };

                            // The most recent scan locates the person.
                            let address = match scans.last() {
                                Some(last) => {
                                    geocode::reverse_geocode(&last.latitude, &last.longitude).await
                                }
                                None => "N/A".to_string(),
                            };

                            state.insert_history(&person.pno_no, scans);
                            state.insert_address(&person.pno_no, address);

                            pending.update(|count| *count = count.saturating_sub(1));
                            if pending.get_untracked() == 0 {
                                state.loading.set(false);
                            }
                        });
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                    state.loading.set(false);
                }
            }
        });
    });

    let state_for_stations = state.clone();
    let station_options = create_memo(move |_| {
        let mut options = vec![(String::new(), "All Stations".to_string())];
        options.extend(
            filter::station_names(&state_for_stations.scan_history.get())
                .into_iter()
                .map(|name| (name.clone(), name)),
        );
        options
    });

    let phase_options: Vec<(String, String)> = std::iter::once((String::new(), "All Times".to_string()))
        .chain(
            TIME_PHASES
                .iter()
                .map(|phase| (phase.label.to_string(), phase.label.to_string())),
        )
        .collect();

    let state_for_filter = state.clone();
    let filtered = create_memo(move |_| {
        let scan_filter = ScanFilter {
            start_date: NaiveDate::parse_from_str(&start_date.get(), "%Y-%m-%d").ok(),
            end_date: NaiveDate::parse_from_str(&end_date.get(), "%Y-%m-%d").ok(),
            phase: filter::phase_by_label(&phase_label.get()).copied(),
            station: Some(station.get()).filter(|name| !name.is_empty()),
        };

        let persons = state_for_filter.persons.get();
        let scans = state_for_filter.scan_history.get();
        let mut visible =
            filter::filter_persons(&persons, &scans, &scan_filter, query.get().trim());
        // Newest first.
        visible.reverse();
        visible
    });

    view! {
        <div class="w-full p-4">
            <div class="my-4 flex flex-wrap items-end gap-4 px-4 py-3 bg-neutral-200 rounded-xl">
                <div class="w-48">
                    <SelectField
                        label="Police Station"
                        options=station_options
                        value=station
                        set_value=set_station
                    />
                </div>

                <DateField label="Start Date" value=start_date set_value=set_start_date />
                <DateField label="End Date" value=end_date set_value=set_end_date />

                <div class="w-56">
                    <SelectField
                        label="Time Phase"
                        options=phase_options
                        value=phase_label
                        set_value=set_phase_label
                    />
                </div>

                <div class="w-64">
                    <TextField
                        label="Search"
                        value=query
                        set_value=set_query
                        placeholder="Search by name or PNO..."
                    />
                </div>
            </div>

            <PersonTable persons=filtered loading=state.loading />
        </div>
    }
}

#[component]
fn DateField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-neutral-600 mb-1">{label}</label>
            <input
                type="date"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="p-2 border border-neutral-300 rounded-md h-10 text-sm bg-white
                       focus:border-indigo-500 focus:outline-none"
            />
        </div>
    }
}
