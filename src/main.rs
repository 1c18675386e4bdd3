use clap::{Parser, Subcommand};
use linguaspark_state::commands::*;
use linguaspark_state::core::{
    command_init::{CommandContext, CommandInit},
    error::Result,
    print_error,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linguaspark")]
#[command(about = "Local state for the LinguaSpark language-learning assistant")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Directory holding config.json and the stored state
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the logged-in user
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Read or write a preference
    Pref {
        #[command(subcommand)]
        action: PrefAction,
    },
    /// Set the native and target language
    Lang {
        /// Language you speak (e.g. "English")
        from: String,
        /// Language you are learning (e.g. "Spanish")
        to: String,
    },
    /// Record or browse chat history
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
    /// Show learning statistics
    Stats,
    /// Export all local data as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Replace local data with a previously exported JSON file
    Import {
        /// Exported JSON file
        file: PathBuf,
    },
    /// Delete all local data
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Record a login
    Login { username: String, email: String },
    /// Show the current user
    Show,
    /// Clear the current user
    Logout,
}

#[derive(Subcommand)]
enum PrefAction {
    /// Set a preference (value parsed as JSON, otherwise taken as text)
    Set { key: String, value: String },
    /// Print a preference
    Get { key: String },
}

#[derive(Subcommand)]
enum ChatAction {
    /// Record one exchange
    Add {
        /// What the learner wrote
        user: String,
        /// What the assistant replied
        bot: String,
    },
    /// Show the most recent messages
    History {
        /// Number of messages to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Empty the chat history
    Clear,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = CommandInit::initialize(cli.data_dir.clone())
        .and_then(|context| run(&context, cli.command));

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(context: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::User { action } => match action {
            UserAction::Login { username, email } => execute_user_login(context, &username, &email),
            UserAction::Show => execute_user_show(context),
            UserAction::Logout => execute_user_logout(context),
        },
        Commands::Pref { action } => match action {
            PrefAction::Set { key, value } => execute_pref_set(context, &key, &value),
            PrefAction::Get { key } => execute_pref_get(context, &key),
        },
        Commands::Lang { from, to } => execute_languages(context, &from, &to),
        Commands::Chat { action } => match action {
            ChatAction::Add { user, bot } => execute_chat_add(context, &user, &bot),
            ChatAction::History { limit } => execute_chat_history(context, limit),
            ChatAction::Clear => execute_chat_clear(context),
        },
        Commands::Stats => execute_stats(context),
        Commands::Export { output } => execute_export(context, output.as_deref()),
        Commands::Import { file } => execute_import(context, &file),
        Commands::Reset { yes } => execute_reset(context, yes),
    }
}
