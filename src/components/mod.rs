//! UI Components
//!
//! Leptos components making up the admin dashboard.

mod dashboard;
mod root_shell;
mod summary_tiles;
mod token_box;
mod work_list;

pub use dashboard::Dashboard;
pub use root_shell::RootShell;
pub use summary_tiles::SummaryTiles;
pub use token_box::TokenBox;
pub use work_list::WorkList;
