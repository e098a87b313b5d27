//! Team and leadership commands

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::client::ContentApi;
use crate::client::models::{Leader, TeamMember};
use crate::error::Result;
use crate::models::{LeaderDisplay, TeamMemberDisplay};

/// Run the team list command
pub async fn team(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<TeamMember, TeamMemberDisplay, _, _>(
        opts,
        "team members",
        |loader| async move { loader.list_team().await },
    )
    .await
}

/// Run the leadership list command
pub async fn leadership(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Leader, LeaderDisplay, _, _>(opts, "leaders", |loader| async move {
        loader.list_leadership().await
    })
    .await
}
