use clap::Subcommand;

use super::common::ViewModeArgs;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive itinerary browser")]
    Browse {
        #[arg(long, help = "Skip the introductory splash screen")]
        no_splash: bool,

        #[arg(long, value_name = "N", help = "Start on day N (1-based) instead of the home list")]
        day: Option<usize>,
    },

    #[command(about = "List every day of the trip")]
    Days {
        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Show one day's timeline")]
    Day {
        #[arg(value_name = "N", help = "Day number (1-based)")]
        number: usize,

        #[command(flatten)]
        view: ViewModeArgs,
    },

    #[command(about = "Print map search links for a day's events")]
    Map {
        #[arg(value_name = "N", help = "Day number (1-based)")]
        day: usize,

        #[arg(value_name = "EVENT", help = "Event number within the day (1-based)")]
        event: Option<usize>,
    },

    #[command(about = "Load the itinerary and report what was found")]
    Check,

    #[command(about = "Show the resolved configuration")]
    Config {
        #[arg(long, help = "Write a default config.toml if none exists")]
        init: bool,
    },
}
