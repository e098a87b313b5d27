//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod filters;
mod forms;
mod global;

pub use common::OutputFormat;
pub use filters::{BlogFilterArgs, EventFilterArgs};
pub use forms::{ContactArgs, InternshipArgs, SubmissionArgs, SubscribeArgs};
pub use global::GlobalOptions;
