// src/cli.rs

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    version,
    args_conflicts_with_subcommands = true,
    about = "aqualog - log aquarium water readings and get dosing advice",
    long_about = "aqualog keeps pH, ammonia, nitrite and nitrate readings for the length of one terminal session, draws trend lines, highlights out-of-range values and prints static dosing advice for the latest reading. Nothing is written to disk."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // 不带子命令时作为 session 的参数
    #[command(flatten)]
    pub session: SessionArgs,
}

#[derive(Args, Debug)]
pub struct SessionArgs {
    #[arg(
        long,
        env = "AQUALOG_SECRET",
        hide_env_values = true,
        help = "Shared password for adding readings (falls back to ~/.config/aqualog/secret, then the built-in default)"
    )]
    pub secret: Option<String>,

    #[arg(long, env = "EDITOR", default_value = "vi", help = "Editor used by `add -e` for notes")]
    pub editor: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Starts an interactive logging session (the default).
    /// Adding readings requires the shared password. The password is a
    /// convenience lock for a shared terminal and protects nothing.
    Session(SessionArgs),

    /// Prints dosing advice for a single reading without starting a session.
    Dose {
        #[arg(long, help = "pH")]
        ph: String,
        #[arg(long, help = "Ammonia in ppm")]
        ammonia: String,
        #[arg(long, help = "Nitrite in ppm")]
        nitrite: String,
        #[arg(long, help = "Nitrate in ppm")]
        nitrate: String,
    },
}

/// One line typed at the session prompt.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct PromptLine {
    #[command(subcommand)]
    pub command: PromptCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum PromptCommand {
    /// Unlocks `add` for this session.
    Login,

    /// Records a new reading. Prompts for each value.
    Add {
        #[arg(short, long, help = "Write the notes in $EDITOR instead of at the prompt")]
        edit: bool,
    },

    /// Shows every reading, flagging out-of-range values with `!`.
    Table,

    /// Shows trend lines for all four parameters.
    Chart,

    /// Shows dosing advice for the latest reading.
    Dose,

    /// Shows the latest reading.
    Latest,

    /// Ends the session. All readings are discarded.
    #[command(alias = "exit")]
    Quit,
}
