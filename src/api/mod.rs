//! Backend access
//!
//! REST calls to the Duty Track API plus the third-party reverse-geocoding
//! endpoint used to label scan coordinates.

pub mod client;
pub mod geocode;

pub use client::SignupOutcome;
