// src/main.rs

mod alerts;
mod auth;
mod cli;
mod commands;
mod dosing;
mod error;
mod models;
mod render;
mod session;
mod store;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aqualog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // 不带子命令时直接进入会话
    let command = cli.command.unwrap_or(Commands::Session(cli.session));

    let result = match command {
        Commands::Session(args) => commands::handle_session(args.secret, args.editor),
        Commands::Dose {
            ph,
            ammonia,
            nitrite,
            nitrate,
        } => commands::handle_dose(&ph, &ammonia, &nitrite, &nitrate),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
