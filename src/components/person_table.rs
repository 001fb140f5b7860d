//! Person Table Component
//!
//! Duty-board table: one block per person, one sub-row per scan, with the
//! identity cells row-spanned across the block. The address column shows the
//! geocoded location of the last scan.

use leptos::*;

use crate::components::ImageSlider;
use crate::model::Person;
use crate::state::AppState;

/// Personnel table with per-scan sub-rows
#[component]
pub fn PersonTable(
    #[prop(into)]
    persons: Signal<Vec<Person>>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        {move || {
            if loading.get() {
                return view! {
                    <div class="w-full p-4 flex items-center justify-center">
                        <p class="text-center">"Loading person and QR data... Please wait."</p>
                    </div>
                }
                .into_view();
            }

            let persons = persons.get();
            if persons.is_empty() {
                return view! {
                    <div class="w-full p-4">
                        <p class="text-center">
                            "No person data found for this user or no results match the current filter."
                        </p>
                    </div>
                }
                .into_view();
            }

            let history = state.scan_history.get();
            let addresses = state.addresses.get();

            view! {
                <div class="overflow-x-auto shadow-lg rounded-lg">
                    <table class="min-w-full divide-y divide-neutral-200">
                        <thead class="bg-neutral-50">
                            <tr>
                                <HeaderCell label="Sr No." />
                                <HeaderCell label="Name" />
                                <HeaderCell label="PNO No." />
                                <HeaderCell label="Location (Address)" />
                                <HeaderCell label="Scanned On" />
                                <HeaderCell label="Police Station" />
                                <HeaderCell label="Images" />
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-neutral-200">
                            {persons.iter().enumerate().map(|(index, person)| {
                                let scans = history.get(&person.pno_no).cloned().unwrap_or_default();
                                let scan_count = scans.len();
                                let address = addresses
                                    .get(&person.pno_no)
                                    .cloned()
                                    .unwrap_or_else(|| {
                                        if scan_count > 0 {
                                            "Fetching Address...".to_string()
                                        } else {
                                            "N/A".to_string()
                                        }
                                    });

                                if scan_count == 0 {
                                    // No scan history: one placeholder row.
                                    return view! {
                                        <tr class="hover:bg-neutral-100 transition-colors bg-red-50/50">
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{index + 1}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">{person.name.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">{person.pno_no.clone()}</td>
                                            <td class="px-6 py-4 whitespace-normal text-sm">{address}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">"Never Scanned"</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">"N/A"</td>
                                            <td class="px-6 py-4">
                                                <ImageSlider photos=person.photos.clone() />
                                            </td>
                                        </tr>
                                    }
                                    .into_view();
                                }

                                let person = person.clone();
                                scans
                                    .into_iter()
                                    .enumerate()
                                    .map(|(scan_index, scan)| {
                                        let first = scan_index == 0;
                                        view! {
                                            <tr class="hover:bg-neutral-100 transition-colors">
                                                {first.then(|| view! {
                                                    <td rowspan=scan_count class="px-6 py-4 whitespace-nowrap text-sm font-medium border-r border-neutral-200">
                                                        {index + 1}
                                                    </td>
                                                    <td rowspan=scan_count class="px-6 py-4 whitespace-nowrap text-sm border-r border-neutral-200">
                                                        {person.name.clone()}
                                                    </td>
                                                    <td rowspan=scan_count class="px-6 py-4 whitespace-nowrap text-sm border-r border-neutral-200">
                                                        {person.pno_no.clone()}
                                                    </td>
                                                    <td rowspan=scan_count class="px-6 py-4 whitespace-normal text-sm border-r border-neutral-200">
                                                        {address.clone()}
                                                    </td>
                                                })}
                                                <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                    {scan.scanned_on.clone().unwrap_or_default()}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                    {scan.police_station.clone()}
                                                </td>
                                                {first.then(|| view! {
                                                    <td rowspan=scan_count class="px-6 py-4 border-l border-neutral-200">
                                                        <ImageSlider photos=person.photos.clone() />
                                                    </td>
                                                })}
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            }
            .into_view()
        }}
    }
}

#[component]
fn HeaderCell(label: &'static str) -> impl IntoView {
    view! {
        <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-neutral-500 uppercase tracking-wider">
            {label}
        </th>
    }
}
