//! aircast CLI - Projected end dates and released-episode estimates for airing shows.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "aircast")]
#[command(about = "Projected end dates and released-episode estimates for airing shows", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Augment an HTML info panel with its projected end date and released count
    Annotate {
        /// HTML file containing the info panel
        file: PathBuf,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Evaluation instant (RFC 3339). Defaults to now.
        #[arg(long)]
        now: Option<String>,

        /// JSON file overriding row labels and literals
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Estimate from a start date and episode count
    Estimate {
        /// Start date (e.g. "Jan 7, 2024" or 2024-01-07)
        #[arg(short, long)]
        start: String,

        /// Total episode count
        #[arg(short, long)]
        episodes: u32,

        /// Broadcast text (e.g. "Sundays at 23:30 (JST)")
        #[arg(short, long)]
        broadcast: Option<String>,

        /// Evaluation instant (RFC 3339). Defaults to now.
        #[arg(long)]
        now: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Also list every episode's air date
        #[arg(long)]
        schedule: bool,
    },

    /// Parse broadcast text into a weekly slot
    Slot {
        /// Broadcast text (e.g. "Sundays at 23:30 (JST)")
        text: String,

        /// Start date; prints the first airing instant
        #[arg(short, long)]
        start: Option<String>,
    },
}

/// Install the global subscriber; `RUST_LOG` wins over the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Annotate {
            file,
            output,
            now,
            config,
        } => commands::annotate::annotate(
            &file,
            output.as_deref(),
            now.as_deref(),
            config.as_deref(),
            cli.quiet,
        ),
        Commands::Estimate {
            start,
            episodes,
            broadcast,
            now,
            format,
            schedule,
        } => commands::estimate::estimate(
            &start,
            episodes,
            broadcast.as_deref(),
            now.as_deref(),
            format,
            schedule,
        ),
        Commands::Slot { text, start } => commands::slot::show_slot(&text, start.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_estimate_args() {
        let cli = Cli::try_parse_from([
            "aircast",
            "-vv",
            "estimate",
            "--start",
            "Jan 7, 2024",
            "--episodes",
            "12",
            "--broadcast",
            "Sundays at 23:30 (JST)",
            "--format",
            "json",
            "--schedule",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Some(Commands::Estimate {
            start,
            episodes,
            broadcast,
            format,
            now,
            schedule,
        }) = cli.command
        else {
            panic!("expected estimate command");
        };
        assert_eq!(start, "Jan 7, 2024");
        assert_eq!(episodes, 12);
        assert_eq!(broadcast.as_deref(), Some("Sundays at 23:30 (JST)"));
        assert_eq!(format, Format::Json);
        assert!(now.is_none());
        assert!(schedule);
    }

    #[test]
    fn test_parse_annotate_args() {
        let cli = Cli::try_parse_from([
            "aircast",
            "annotate",
            "panel.html",
            "-o",
            "out.html",
            "--now",
            "2024-02-01T00:00:00Z",
            "-q",
        ])
        .unwrap();

        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Some(Commands::Annotate { ref file, ref output, .. })
                if file == &PathBuf::from("panel.html")
                    && output.as_deref() == Some(std::path::Path::new("out.html"))
        ));
    }

    #[test]
    fn test_estimate_requires_episodes() {
        assert!(Cli::try_parse_from(["aircast", "estimate", "--start", "2024-01-07"]).is_err());
    }
}
