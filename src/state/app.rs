//! App-wide data caches and notifications
//!
//! Reactive state shared across pages: the admin's person list, per-PNO scan
//! history, resolved addresses, the full scan log, and the toast signals.
//! Caches are overwritten wholesale on refetch; partial results merge in as
//! the per-person fetches land.

use leptos::*;
use std::collections::HashMap;

use crate::model::{Person, QrRecord};

/// Application state provided to all components.
#[derive(Clone)]
pub struct AppState {
    /// Duty persons owned by the logged-in admin.
    pub persons: RwSignal<Vec<Person>>,
    /// Scan history keyed by PNO.
    pub scan_history: RwSignal<HashMap<String, Vec<QrRecord>>>,
    /// Resolved address per PNO, from the last scan's coordinates.
    pub addresses: RwSignal<HashMap<String, String>>,
    /// Every scan record, for the scan log table.
    pub all_scans: RwSignal<Vec<QrRecord>>,
    /// Global loading state.
    pub loading: RwSignal<bool>,
    /// Error message to display.
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts).
    pub success: RwSignal<Option<String>>,
}

/// Provide app state to the component tree.
pub fn provide_app_state() {
    let state = AppState {
        persons: create_rw_signal(Vec::new()),
        scan_history: create_rw_signal(HashMap::new()),
        addresses: create_rw_signal(HashMap::new()),
        all_scans: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl AppState {
    /// Merge one person's scan history into the cache.
    pub fn insert_history(&self, pno_no: &str, scans: Vec<QrRecord>) {
        self.scan_history.update(|history| {
            history.insert(pno_no.to_string(), scans);
        });
    }

    /// Merge one person's resolved address into the cache.
    pub fn insert_address(&self, pno_no: &str, address: String) {
        self.addresses.update(|addresses| {
            addresses.insert(pno_no.to_string(), address);
        });
    }

    /// Drop deleted records from the scan log without a refetch.
    pub fn remove_scans(&self, ids: &[String]) {
        self.all_scans.update(|scans| {
            scans.retain(|scan| !ids.contains(&scan.id));
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
