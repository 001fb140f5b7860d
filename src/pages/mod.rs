//! Pages
//!
//! Top-level page components for each route.

pub mod add_subadmin;
pub mod add_users;
pub mod dashboard;
pub mod duty_board;
pub mod generate_qr;
pub mod login;
pub mod scan_log;

pub use add_subadmin::AddSubAdmin;
pub use add_users::AddUsers;
pub use dashboard::{DashboardHome, DashboardLayout};
pub use duty_board::DutyBoard;
pub use generate_qr::GenerateQr;
pub use login::Login;
pub use scan_log::ScanLog;
