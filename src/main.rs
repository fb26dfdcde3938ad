mod cli;
mod hook;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use claude_code_cue::storage::ConfigStore;

#[derive(Parser)]
#[command(name = "claude-code-cue", version, about = "Claude Code Cue — audio cues for Claude Code")]
struct App {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Manage the sound library
    Sounds {
        #[command(subcommand)]
        action: SoundsAction,
    },
    /// Install cue hooks into Claude Code settings
    Apply {
        /// settings.json to update (defaults to ~/.claude/settings.json)
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Classify an execution record read from stdin
    Classify,
    /// Claude Code hook entry points
    Hook {
        #[command(subcommand)]
        action: HookAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Display the full configuration
    Show,
    /// Get a config value (dot notation: globalSettings.volume)
    Get {
        /// Config key (dot notation)
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key (dot notation)
        key: String,
        /// Value (JSON: true, 0.5, null, "string")
        value: String,
    },
    /// Restore default configuration
    Reset,
    /// Write a timestamped copy of the configuration
    Backup,
    /// Replace the configuration with a file's contents
    Import { file: PathBuf },
    /// Print the config file path
    Path,
}

#[derive(Subcommand)]
enum SoundsAction {
    /// List available sounds
    List,
    /// Play a sound by id or filename
    Preview { id: String },
    /// Copy a directory of sound files into the library
    Install { dir: PathBuf },
}

#[derive(Subcommand)]
enum HookAction {
    /// PostToolUse: classify the tool result and play its cue
    PostToolUse,
    /// PreToolUse: play the tool's start cue
    PreToolUse,
    /// Lifecycle event cue (userPromptSubmit, sessionStart, stop, notification)
    Event { id: String },
}

fn main() {
    let app = App::parse();

    // Hook: ALWAYS exit 0
    let command = match app.command {
        Commands::Hook { action } => hook::run(match action {
            HookAction::PostToolUse => hook::HookAction::PostToolUse,
            HookAction::PreToolUse => hook::HookAction::PreToolUse,
            HookAction::Event { id } => hook::HookAction::Event { id },
        }),
        command => command,
    };

    claude_code_cue::tracing_init::init_cli_tracing(app.verbose);
    let store = ConfigStore::open_default();

    let result = match command {
        Commands::Config { action } => match action {
            ConfigAction::Show => cli::config::run_show(&store),
            ConfigAction::Get { key } => cli::config::run_get(&store, &key),
            ConfigAction::Set { key, value } => cli::config::run_set(&store, &key, &value),
            ConfigAction::Reset => cli::config::run_reset(&store),
            ConfigAction::Backup => cli::config::run_backup(&store),
            ConfigAction::Import { file } => cli::config::run_import(&store, &file),
            ConfigAction::Path => cli::config::run_path(&store),
        },
        Commands::Sounds { action } => match action {
            SoundsAction::List => cli::sounds::list(&store),
            SoundsAction::Preview { id } => cli::sounds::preview(&store, &id),
            SoundsAction::Install { dir } => cli::sounds::install(&store, &dir),
        },
        Commands::Apply { settings } => cli::apply::run(settings),
        Commands::Classify => cli::classify::run(&store),
        Commands::Hook { .. } => unreachable!("hook commands exit in hook::run"),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
