//! State Management
//!
//! Signal-based stores shared through the Leptos context: the auth session
//! and the app-wide data caches.

pub mod app;
pub mod auth;

pub use app::{provide_app_state, AppState};
pub use auth::{provide_auth_store, AuthStore};
