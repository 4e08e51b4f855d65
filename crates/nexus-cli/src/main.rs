//! NexusHR CLI - Command-line interface for the employee roster manager.

use clap::{Args, Parser, Subcommand};

mod commands;
mod image;
mod output;

use commands::{
    add, delete, export, list, login, logout, states, stats, toggle, update, whoami,
};

#[derive(Parser)]
#[command(name = "nexus-hr")]
#[command(about = "NexusHR employee roster manager")]
struct Cli {
    /// Data directory holding the persisted roster and session
    #[arg(long, global = true, default_value = ".nexus-hr")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

/// Filter flags shared by `list` and `export`.
#[derive(Args, Clone)]
struct FilterArgs {
    /// Case-insensitive substring matched against full names
    #[arg(long, default_value = "")]
    search: String,
    /// Gender filter: Male, Female, Other, or All
    #[arg(long, default_value = "All")]
    gender: String,
    /// Status filter: Active, Inactive, or All
    #[arg(long, default_value = "All")]
    status: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in (always succeeds; no credential is checked)
    Login {
        /// Display name (defaults to "Admin User")
        #[arg(long, default_value = "")]
        name: String,
        /// Email address (defaults to "admin@nexushr.com")
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Sign out and discard the session
    Logout,
    /// Show the signed-in session
    Whoami,
    /// List employees matching the filters
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a new employee
    Add {
        /// Full name
        #[arg(long, default_value = "")]
        full_name: String,
        /// Gender: Male, Female, or Other
        #[arg(long, default_value = "Male")]
        gender: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        dob: String,
        /// US state name
        #[arg(long, default_value = "")]
        state: String,
        /// Profile image: an http(s) URL or a local file to embed
        #[arg(long, default_value = "")]
        image: String,
        /// Create the record as inactive
        #[arg(long)]
        inactive: bool,
    },
    /// Update fields of an existing employee
    Update {
        /// Employee id (e.g. EMP001)
        id: String,
        /// Full name
        #[arg(long)]
        full_name: Option<String>,
        /// Gender: Male, Female, or Other
        #[arg(long)]
        gender: Option<String>,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: Option<String>,
        /// US state name
        #[arg(long)]
        state: Option<String>,
        /// Profile image: an http(s) URL or a local file to embed
        #[arg(long)]
        image: Option<String>,
        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,
    },
    /// Permanently delete an employee
    Delete {
        /// Employee id (e.g. EMP001)
        id: String,
        /// Confirm the permanent deletion
        #[arg(long)]
        yes: bool,
    },
    /// Toggle an employee's active status
    Toggle {
        /// Employee id (e.g. EMP001)
        id: String,
    },
    /// Show roster counts
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the filtered roster as CSV
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        /// Output file (defaults to nexus_employees_<date>.csv)
        #[arg(long)]
        out: Option<String>,
    },
    /// Print the accepted US state names
    States,
}

fn main() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir;

    let result = match cli.command {
        Commands::Login { name, email } => login::run(&data_dir, &name, &email),
        Commands::Logout => logout::run(&data_dir),
        Commands::Whoami => whoami::run(&data_dir),
        Commands::List { filters, json } => list::run(&data_dir, &filters, json),
        Commands::Add {
            full_name,
            gender,
            dob,
            state,
            image,
            inactive,
        } => add::run(&data_dir, full_name, &gender, dob, state, &image, inactive),
        Commands::Update {
            id,
            full_name,
            gender,
            dob,
            state,
            image,
            active,
        } => update::run(&data_dir, &id, full_name, gender, dob, state, image, active),
        Commands::Delete { id, yes } => delete::run(&data_dir, &id, yes),
        Commands::Toggle { id } => toggle::run(&data_dir, &id),
        Commands::Stats { json } => stats::run(&data_dir, json),
        Commands::Export { filters, out } => export::run(&data_dir, &filters, out),
        Commands::States => states::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
