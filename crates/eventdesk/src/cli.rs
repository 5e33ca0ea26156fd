//! Clap derive structures for the `eventdesk` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// eventdesk -- command-line client for the event management service
#[derive(Debug, Parser)]
#[command(
    name = "eventdesk",
    version,
    about = "Manage events and participants from the command line",
    long_about = "A client for the event management REST service.\n\n\
        Renders the dashboard, event list, event form and statistics views\n\
        as HTML, or prints the same data as tables, JSON or YAML.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Service profile to use
    #[arg(long, short = 'p', env = "EVENTDESK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Service base URL including the API path (overrides profile)
    #[arg(long, short = 'S', env = "EVENTDESK_SERVER", global = true)]
    pub server: Option<String>,

    /// Output format [default: from config, else html]
    #[arg(long, short = 'o', env = "EVENTDESK_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Events per search page (overrides profile)
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered HTML page
    Html,
    /// Pretty table
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the dashboard (counts and recent events)
    #[command(alias = "dash")]
    Dashboard,

    /// Show aggregate statistics
    Stats,

    /// Enter a view by name (dashboard, events, create-event, statistics)
    View(ViewArgs),

    /// Manage events
    #[command(alias = "ev", alias = "e")]
    Events(EventsArgs),

    /// Manage event participants
    #[command(alias = "pt")]
    Participants(ParticipantsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// View name
    pub name: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  EVENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub command: EventsCommand,
}

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// List all events
    #[command(alias = "ls")]
    List,

    /// Filtered, paginated search
    Search(SearchArgs),

    /// Show an event with its participants
    Show {
        /// Event ID
        id: i64,
    },

    /// Create an event
    Create(CreateEventArgs),

    /// Update an event; omitted fields keep their current value
    Edit {
        /// Event ID
        id: i64,

        #[command(flatten)]
        fields: EditEventArgs,
    },

    /// Delete an event
    #[command(alias = "rm")]
    Delete {
        /// Event ID
        id: i64,
    },

    /// List events with a status (ACTIVE, COMPLETED, CANCELLED)
    ByStatus {
        status: String,
    },

    /// List events run by an organizer
    ByOrganizer {
        organizer: String,
    },

    /// Render the blank create form
    NewForm,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keyword matched against name and description
    #[arg(long)]
    pub keyword: Option<String>,

    /// Status code
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub organizer: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Earliest start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Latest start date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Zero-based page index
    #[arg(long, default_value = "0")]
    pub page: u32,
}

#[derive(Debug, Args)]
pub struct CreateEventArgs {
    /// Event name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Start (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub start: String,

    /// End (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub end: String,

    #[arg(long)]
    pub location: String,

    #[arg(long)]
    pub organizer: String,

    /// Maximum number of participants
    #[arg(long)]
    pub capacity: u32,
}

#[derive(Debug, Args)]
pub struct EditEventArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Start (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub start: Option<String>,

    /// End (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub end: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub organizer: Option<String>,

    #[arg(long)]
    pub capacity: Option<u32>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PARTICIPANTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ParticipantsArgs {
    #[command(subcommand)]
    pub command: ParticipantsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ParticipantsCommand {
    /// List participants of an event
    #[command(alias = "ls")]
    List {
        /// Event ID
        event: i64,
    },

    /// Register a participant for an event
    Register {
        /// Event ID
        event: i64,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Cancel a registration
    #[command(alias = "rm")]
    Remove {
        /// Event ID
        event: i64,

        /// Participation ID
        participation: i64,
    },

    /// List every registration made with an email address
    Lookup {
        email: String,
    },

    /// Cancel a registration by event and email address
    CancelByEmail {
        /// Event ID
        event: i64,

        email: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG & COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create an initial config file
    Init {
        /// Server for the `default` profile
        #[arg(long, default_value = "http://localhost:8080/api")]
        server: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display the current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
