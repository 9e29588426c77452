use anyhow::{Context, Result};
use tabi_core::config::resolve_workspace_path;

use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogSink};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())
        .context("Failed to resolve data directory")?;

    let sink = match cli.command {
        Some(Commands::Browse { .. }) => LogSink::File(&data_dir),
        _ => LogSink::Stderr,
    };
    logging::init(cli.log_level, sink);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&data_dir, cli.format);
    };

    let ctx = ExecutionContext::new(data_dir, cli.itinerary, cli.format)?;

    match command {
        Commands::Browse { no_splash, day } => handlers::browse::handle(&ctx, no_splash, day),
        Commands::Days { view } => handlers::days::handle(&ctx, &view),
        Commands::Day { number, view } => handlers::day::handle(&ctx, number, &view),
        Commands::Map { day, event } => handlers::map::handle(&ctx, day, event),
        Commands::Check => handlers::check::handle(&ctx),
        Commands::Config { init } => handlers::config::handle(&ctx, init),
    }
}
