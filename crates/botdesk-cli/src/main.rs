//! botdesk — manage chatbot agents stored on this machine.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use commands::Context;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = botdesk_core::ConfigStore::new().load();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(config.log_filter.as_str())
            .with_writer(std::io::stderr)
            .init();
    }

    let store = commands::open_store(cli.storage.as_deref(), &config);
    let ctx = Context::new(store, &config);

    match cli.command {
        Commands::Signup(ref args) => commands::account::signup(&ctx, args)?,
        Commands::Login {
            ref username,
            ref password,
        } => commands::account::login(&ctx, username, password)?,
        Commands::Logout => commands::dashboard::logout(&ctx)?,
        Commands::List { json } => commands::dashboard::list(&ctx, json)?,
        Commands::Create { ref fields, copy } => commands::agent::create(&ctx, fields, copy)?,
        Commands::Edit {
            ref id,
            ref fields,
            copy,
        } => commands::agent::edit(&ctx, id, fields, copy)?,
        Commands::Delete { ref id } => commands::dashboard::delete(&ctx, id)?,
        Commands::Embed { ref id, copy } => commands::agent::embed(&ctx, id, copy)?,
        Commands::Open { ref path } => commands::open::run(&ctx, path)?,
    }

    Ok(())
}
