//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod blog;
pub mod context;
pub mod event;
pub mod forms;
pub mod gallery;
pub mod handlers;
pub mod home;
pub mod notice;
pub mod people;
pub mod publication;
pub mod status;

pub use args::{
    BlogFilterArgs, ContactArgs, EventFilterArgs, InternshipArgs, OutputFormat, SubmissionArgs,
    SubscribeArgs,
};
pub use context::CommandContext;

/// GCADR content CLI - read the center's site content and send its forms
#[derive(Parser, Debug)]
#[command(name = "gcadr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "GCADR_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "GCADR_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Content API base URL
    #[arg(long, global = true, env = "GCADR_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Site host name (a vercel.app host selects the production API)
    #[arg(long, global = true, env = "GCADR_SITE_HOST", hide_env = true)]
    pub site_host: Option<String>,

    /// Static fallback root: directory or http(s) URL
    #[arg(long, global = true, env = "GCADR_STATIC_ROOT", hide_env = true)]
    pub static_root: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true, env = "GCADR_TIMEOUT_MS", hide_env = true)]
    pub timeout_ms: Option<u64>,

    /// Disable the response cache
    #[arg(long, global = true, env = "GCADR_NO_CACHE", hide_env = true)]
    pub no_cache: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "GCADR_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configuration and content source status
    Status,

    /// Display version information
    Version,

    /// Home page content: carousel, announcements, featured blogs and events
    Overview,

    /// Read blog posts
    #[command(subcommand)]
    Blog(BlogCommands),

    /// Read events
    #[command(subcommand)]
    Event(EventCommands),

    /// Browse photo galleries
    #[command(subcommand)]
    Gallery(GalleryCommands),

    /// List the student team
    #[command(subcommand)]
    Team(TeamCommands),

    /// List faculty leadership
    #[command(subcommand)]
    Leadership(LeadershipCommands),

    /// List announcements
    #[command(subcommand)]
    Announcement(AnnouncementCommands),

    /// List home page carousel slides
    #[command(subcommand)]
    Carousel(CarouselCommands),

    /// List journal issues
    #[command(subcommand)]
    Journal(JournalCommands),

    /// Newsletter archive and subscription
    #[command(subcommand)]
    Newsletter(NewsletterCommands),

    /// Search blogs and events by title
    #[command(after_help = "EXAMPLES:\n  \
            gcadr search mediation\n  \
            gcadr search \"online dispute\" --format json")]
    Search {
        /// Search text
        query: String,
    },

    /// Contact the center
    #[command(subcommand)]
    Contact(ContactCommands),

    /// Internship applications
    #[command(subcommand)]
    Internship(InternshipCommands),

    /// Blog and journal manuscript submissions
    #[command(subcommand)]
    Submission(SubmissionCommands),
}

/// Blog subcommands
#[derive(Subcommand, Debug)]
pub enum BlogCommands {
    /// List published blog posts
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            gcadr blog list                       # All posts\n  \
            gcadr blog list --featured            # Featured only\n  \
            gcadr blog list --category mediation  # By category slug\n  \
            gcadr blog list -n 5 --format json    # Latest five as JSON"
    )]
    List {
        #[command(flatten)]
        filters: BlogFilterArgs,
    },

    /// Show one blog post
    #[command(visible_alias = "g")]
    Get {
        /// Post slug
        slug: String,
    },
}

/// Event subcommands
#[derive(Subcommand, Debug)]
pub enum EventCommands {
    /// List events
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            gcadr event list --upcoming           # Not started yet\n  \
            gcadr event list --type workshop      # By event type"
    )]
    List {
        #[command(flatten)]
        filters: EventFilterArgs,
    },

    /// Show one event
    #[command(visible_alias = "g")]
    Get {
        /// Event slug
        slug: String,
    },
}

/// Gallery subcommands
#[derive(Subcommand, Debug)]
pub enum GalleryCommands {
    /// List galleries
    #[command(visible_alias = "ls")]
    List,

    /// Show one gallery with its images
    #[command(visible_alias = "g")]
    Get {
        /// Gallery slug
        slug: String,
    },
}

/// Team subcommands
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List active team members
    #[command(visible_alias = "ls")]
    List,
}

/// Leadership subcommands
#[derive(Subcommand, Debug)]
pub enum LeadershipCommands {
    /// List faculty leadership
    #[command(visible_alias = "ls")]
    List,
}

/// Announcement subcommands
#[derive(Subcommand, Debug)]
pub enum AnnouncementCommands {
    /// List active announcements, newest first
    #[command(visible_alias = "ls")]
    List {
        /// Maximum results to return
        #[arg(long, short = 'n')]
        limit: Option<u32>,
    },
}

/// Carousel subcommands
#[derive(Subcommand, Debug)]
pub enum CarouselCommands {
    /// List active carousel slides
    #[command(visible_alias = "ls")]
    List,
}

/// Journal subcommands
#[derive(Subcommand, Debug)]
pub enum JournalCommands {
    /// List journal issues
    #[command(visible_alias = "ls")]
    List,
}

/// Newsletter subcommands
#[derive(Subcommand, Debug)]
pub enum NewsletterCommands {
    /// List archived newsletter issues
    #[command(visible_alias = "ls")]
    List,

    /// Subscribe an email address to the newsletter
    #[command(after_help = "EXAMPLES:\n  \
            gcadr newsletter subscribe asha@example.com --name \"Asha Rao\"")]
    Subscribe(SubscribeArgs),
}

/// Contact subcommands
#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Send a message to the center
    #[command(after_help = "EXAMPLES:\n  \
            gcadr contact send --name \"Asha Rao\" --email asha@example.com \\\n      \
            --subject Internships --message \"Are applications open?\"")]
    Send(ContactArgs),
}

/// Internship subcommands
#[derive(Subcommand, Debug)]
pub enum InternshipCommands {
    /// Apply for an internship (uploads CV and writing sample)
    #[command(after_help = "EXAMPLES:\n  \
            gcadr internship apply --name \"Asha Rao\" --email asha@example.com \\\n      \
            --university GNLU --course \"B.A. LL.B.\" --year 3 \\\n      \
            --start 2025-05-01 --end 2025-06-15 --letter \"...\" \\\n      \
            --cv cv.pdf --writing-sample sample.pdf")]
    Apply(InternshipArgs),
}

/// Submission subcommands
#[derive(Subcommand, Debug)]
pub enum SubmissionCommands {
    /// Submit a blog or journal manuscript
    #[command(after_help = "EXAMPLES:\n  \
            gcadr submission send --type journal --title \"Consent in Mediation\" \\\n      \
            --author \"R. Iyer\" --email r@example.com --content-file paper.txt -k mediation,consent")]
    Send(SubmissionArgs),
}
