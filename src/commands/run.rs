//! Command dispatch logic for ts-rank

use super::{InitArgs, RankArgs, ValidateArgs, init_config, rank_files, rank_symbols, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "ts-rank", version, author, long_about = None)]
#[command(about = "Rank TypeScript files and symbols by type-checking time")]
#[command(styles = CLAP_STYLES, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<RankSubcommand>,

    // Used when no subcommand is named
    #[command(flatten)]
    files: RankArgs,
}

#[derive(Subcommand, Debug)]
enum RankSubcommand {
    /// Rank files by the total type-check time of their symbols (default)
    Files(RankArgs),
    /// Rank symbols by type-check time, split between sources and dependencies
    Symbols(RankArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// Without a subcommand, the arguments are handled by the `files` command.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.command {
        None => rank_files(host, &cli.files).await,
        Some(RankSubcommand::Files(args)) => rank_files(host, args).await,
        Some(RankSubcommand::Symbols(args)) => rank_symbols(host, args).await,
        Some(RankSubcommand::Init(args)) => init_config(host, args),
        Some(RankSubcommand::Validate(args)) => validate_config(host, args),
    }
}
