//! Reusable command handlers

mod detail;
mod list;

pub use detail::{not_found, print_detail};
pub use list::run_list_command;
