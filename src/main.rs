//! Duty Track
//!
//! Personnel duty tracking admin console built with Leptos (WASM).
//!
//! # Features
//!
//! - Admin login with persisted sessions
//! - Duty personnel creation, single or spreadsheet bulk
//! - Location-tagged QR code generation with printable PDF sheets
//! - Scan history correlated with reverse-geocoded addresses
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It is a thin client over the Duty Track REST API.

use leptos::*;

mod api;
mod app;
mod components;
mod filter;
mod import;
mod model;
mod pages;
mod pdf;
mod qr;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
