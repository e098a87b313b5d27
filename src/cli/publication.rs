//! Journal and newsletter archive commands

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::client::ContentApi;
use crate::client::models::{JournalIssue, NewsletterIssue};
use crate::error::Result;
use crate::models::{JournalDisplay, NewsletterDisplay};

/// Run the journal list command
pub async fn journals(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<JournalIssue, JournalDisplay, _, _>(
        opts,
        "journal issues",
        |loader| async move { loader.list_journals().await },
    )
    .await
}

/// Run the newsletter list command
pub async fn newsletters(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<NewsletterIssue, NewsletterDisplay, _, _>(
        opts,
        "newsletter issues",
        |loader| async move { loader.list_newsletter_archive().await },
    )
    .await
}
