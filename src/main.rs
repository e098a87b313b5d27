//! GCADR content CLI - cached, fault-tolerant access to the center's site content

use clap::Parser;

mod cache;
mod cli;
mod client;
mod config;
mod content;
mod error;
mod models;
mod output;
mod source;

use cli::args::GlobalOptions;
use cli::{
    AnnouncementCommands, BlogCommands, CarouselCommands, Cli, Commands, ContactCommands,
    EventCommands, GalleryCommands, InternshipCommands, JournalCommands, LeadershipCommands,
    NewsletterCommands, SubmissionCommands, TeamCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Status => cli::status::run(&opts).await,
        Commands::Version => {
            println!("gcadr version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Overview => cli::home::overview(&opts).await,
        Commands::Blog(blog_cmd) => match blog_cmd {
            BlogCommands::List { filters } => cli::blog::list(&opts, &filters).await,
            BlogCommands::Get { slug } => cli::blog::get(&opts, &slug).await,
        },
        Commands::Event(event_cmd) => match event_cmd {
            EventCommands::List { filters } => cli::event::list(&opts, &filters).await,
            EventCommands::Get { slug } => cli::event::get(&opts, &slug).await,
        },
        Commands::Gallery(gallery_cmd) => match gallery_cmd {
            GalleryCommands::List => cli::gallery::list(&opts).await,
            GalleryCommands::Get { slug } => cli::gallery::get(&opts, &slug).await,
        },
        Commands::Team(TeamCommands::List) => cli::people::team(&opts).await,
        Commands::Leadership(LeadershipCommands::List) => cli::people::leadership(&opts).await,
        Commands::Announcement(AnnouncementCommands::List { limit }) => {
            cli::notice::announcements(&opts, limit).await
        }
        Commands::Carousel(CarouselCommands::List) => cli::notice::carousel(&opts).await,
        Commands::Journal(JournalCommands::List) => cli::publication::journals(&opts).await,
        Commands::Newsletter(newsletter_cmd) => match newsletter_cmd {
            NewsletterCommands::List => cli::publication::newsletters(&opts).await,
            NewsletterCommands::Subscribe(args) => cli::forms::subscribe(&opts, &args).await,
        },
        Commands::Search { query } => cli::home::search(&opts, &query).await,
        Commands::Contact(ContactCommands::Send(args)) => cli::forms::contact(&opts, &args).await,
        Commands::Internship(InternshipCommands::Apply(args)) => {
            cli::forms::internship(&opts, &args).await
        }
        Commands::Submission(SubmissionCommands::Send(args)) => {
            cli::forms::submission(&opts, &args).await
        }
    }
}
