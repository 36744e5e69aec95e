use crate::export::ExportFormat;
use crate::models::entry_kind::EntryKind;
use clap::{Parser, Subcommand};

fn parse_kind(s: &str) -> Result<EntryKind, String> {
    EntryKind::from_label(s).ok_or_else(|| {
        format!("unknown entry kind '{s}' (use activity, pain or weight)")
    })
}

/// Command-line interface definition for PhysioTracker
#[derive(Parser)]
#[command(
    name = "physiotracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log exercise, pain check-ins and body weight; track pain-safe progress towards a distance goal",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log an activity, a pain check-in or a weigh-in (or edit one with --edit)
    Add {
        /// Date of the entry (YYYY-MM-DD, `today` or `yesterday`)
        date: Option<String>,

        #[arg(
            long = "kind",
            short = 'k',
            value_parser = parse_kind,
            help = "Entry kind: activity, pain or weight [default: activity]"
        )]
        kind: Option<EntryKind>,

        #[arg(long = "activity", short = 'a', help = "Activity type, e.g. Running")]
        activity: Option<String>,

        #[arg(long = "context", help = "Outdoor, Treadmill, Track, Trail, Gym/Weights...")]
        context: Option<String>,

        #[arg(long = "distance", short = 'd', help = "Distance in km")]
        distance: Option<f64>,

        #[arg(long = "duration", short = 'm', help = "Duration in minutes")]
        duration: Option<u32>,

        #[arg(
            long = "intensity",
            value_parser = clap::value_parser!(u8).range(1..=10),
            help = "Perceived effort (RPE 1-10)"
        )]
        intensity: Option<u8>,

        #[arg(long = "location", help = "Pain location: Lower Back, Knee, Neck, General...")]
        location: Option<String>,

        #[arg(
            long = "pain",
            short = 'p',
            value_parser = clap::value_parser!(u8).range(0..=10),
            help = "Pain level (0-10)"
        )]
        pain: Option<u8>,

        #[arg(long = "weight", short = 'w', help = "Body weight in kg")]
        weight: Option<f64>,

        #[arg(long = "notes", short = 'n')]
        notes: Option<String>,

        #[arg(long = "id", help = "Entry id to edit (used with --edit)")]
        id: Option<i64>,

        #[arg(
            long = "edit",
            requires = "id",
            help = "Edit an existing entry instead of adding a new one"
        )]
        edit: bool,
    },

    /// Delete an entry by id
    Del {
        #[arg(long = "id")]
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries, newest first
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "kind", short = 'k', value_parser = parse_kind)]
        kind: Option<EntryKind>,

        #[arg(long = "today", help = "Show only today's entries")]
        now: bool,
    },

    /// Daily activity vs pain for the last days
    Trend {
        #[arg(long = "days", help = "Number of logged days to show")]
        days: Option<usize>,
    },

    /// Show or set the distance goal
    Goal {
        #[arg(
            long = "set",
            requires_all = ["distance", "by"],
            help = "Record a new goal (becomes the active one)"
        )]
        set: bool,

        #[arg(long = "activity", short = 'a', help = "Activity the goal applies to")]
        activity: Option<String>,

        #[arg(long = "distance", short = 'd', help = "Target distance in km")]
        distance: Option<f64>,

        #[arg(
            long = "max-pain",
            value_parser = clap::value_parser!(u8).range(0..=10),
            default_value_t = 3,
            help = "Highest pain level still considered safe"
        )]
        max_pain: u8,

        #[arg(long = "by", help = "Target date (YYYY-MM-DD)")]
        by: Option<String>,

        #[arg(long = "history", help = "List every goal ever recorded")]
        history: bool,
    },

    /// Progress towards the active goal
    Status {
        #[arg(long = "today", value_name = "DATE", help = "Evaluate as of this date")]
        today: Option<String>,
    },

    /// Import a spreadsheet CSV export
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export entries or daily aggregates
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Export one row per day instead of raw entries")]
        daily: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
