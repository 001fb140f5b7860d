//! UI Components
//!
//! Reusable Leptos components for the admin console.

pub mod form;
pub mod header;
pub mod image_slider;
pub mod loading;
pub mod person_table;
pub mod qr_table;
pub mod sidebar;
pub mod toast;
pub mod upload;

pub use form::{SelectField, TextField};
pub use header::Header;
pub use image_slider::ImageSlider;
pub use loading::ListSkeleton;
pub use person_table::PersonTable;
pub use qr_table::QrTable;
pub use sidebar::Sidebar;
pub use toast::Toast;
pub use upload::{DutyPointUpload, RecruitUpload};
