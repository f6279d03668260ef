//! Common processing logic shared between the files and symbols commands.

use super::Host;
use crate::Result;
use crate::config::Config;
use crate::filter::GlobFilter;
use crate::metrics::extract;
use crate::ranking::{Grouping, Ranker};
use crate::reports::{Summary, generate_console, generate_json};
use crate::trace::{CheckKind, load_inputs};
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use std::fs;
use std::io::Write;
use std::time::Instant;

const LOG_TARGET: &str = "  command";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Common arguments shared between the files and symbols commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Execution trace written by `tsc --generateTrace`
    #[arg(long, value_name = "PATH", help_heading = "Inputs")]
    pub trace_file: Option<Utf8PathBuf>,

    /// Type catalog written next to the trace
    #[arg(long, value_name = "PATH", help_heading = "Inputs")]
    pub types_file: Option<Utf8PathBuf>,

    /// Only rank declarations whose path matches this glob
    #[arg(long, short = 'p', value_name = "GLOB", help_heading = "Ranking")]
    pub pattern: Option<String>,

    /// Maximum number of files to rank
    #[arg(long, short = 'f', value_name = "COUNT", help_heading = "Ranking")]
    pub file_limit: Option<usize>,

    /// Maximum number of symbols listed per file or per origin
    #[arg(long, short = 't', value_name = "COUNT", help_heading = "Ranking")]
    pub symbol_limit: Option<usize>,

    /// Comma-separated list of check operations to correlate with symbols
    #[arg(long, value_delimiter = ',', value_name = "KINDS", help_heading = "Ranking")]
    pub check_kinds: Option<Vec<CheckKind>>,

    /// Path fragment identifying third-party declarations
    #[arg(long, value_name = "FRAGMENT", help_heading = "Ranking")]
    pub dependency_marker: Option<String>,

    /// Path to configuration file (default is `ts-rank.toml` in the root directory)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Project directory that input paths and displayed paths are relative to
    #[arg(long, value_name = "PATH")]
    pub root: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Write the ranking to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Also print the console report when writing a JSON file
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

impl CommonArgs {
    /// Overlay the flags that were given on top of `config`.
    fn apply_to(&self, config: &mut Config) {
        if let Some(path) = &self.trace_file {
            config.trace_file.clone_from(path);
        }

        if let Some(path) = &self.types_file {
            config.types_file.clone_from(path);
        }

        if let Some(pattern) = &self.pattern {
            config.pattern.clone_from(pattern);
        }

        if let Some(limit) = self.file_limit {
            config.file_limit = limit;
        }

        if let Some(limit) = self.symbol_limit {
            config.symbol_limit = limit;
        }

        if let Some(kinds) = &self.check_kinds {
            config.check_kinds.clone_from(kinds);
        }

        if let Some(marker) = &self.dependency_marker {
            config.dependency_marker.clone_from(marker);
        }
    }
}

pub struct Common<'a, H: Host> {
    pub config: Config,
    pub root: Utf8PathBuf,
    host: &'a mut H,
    color: ColorMode,
    json: Option<Utf8PathBuf>,
    console: bool,
}

impl<'a, H: Host> Common<'a, H> {
    /// Initialize logging and assemble the configuration for a run
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory does not exist, or if the configuration cannot be loaded or is invalid
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        init_logging(args.log_level);

        let root = args.root.clone().unwrap_or_else(|| Utf8PathBuf::from("."));
        let root = root
            .canonicalize_utf8()
            .into_app_err_with(|| format!("resolving root directory '{root}'"))?;

        let mut config = Config::load(&root, args.config.as_ref())?;
        args.apply_to(&mut config);
        config.validate()?;
        config.resolve_paths(&root);

        log::debug!(target: LOG_TARGET, "Using configuration {config:?}");

        Ok(Self {
            config,
            root,
            host,
            color: args.color,
            json: args.json.clone(),
            console: args.console,
        })
    }

    /// Load the inputs, rank them under `grouping` and emit the requested reports
    ///
    /// # Errors
    ///
    /// Returns an error if a report cannot be produced or written. Unreadable inputs are not errors.
    pub async fn report(&mut self, grouping: Grouping) -> Result<()> {
        let start = Instant::now();

        let (trace, catalog) = load_inputs(&self.config.trace_file, &self.config.types_file).await;
        let filter = GlobFilter::new(&self.config.pattern)?;

        let metrics = extract(&trace.items, &catalog.items, &self.config);
        let filtered = filter.apply(&metrics);
        log::info!(
            target: LOG_TARGET,
            "{} of {} metrics match '{}'",
            filtered.len(),
            metrics.len(),
            filter.pattern()
        );

        let ranking = Ranker::new(&self.config).rank(&filtered, grouping);

        let summary = Summary {
            trace_file: self.config.trace_file.clone(),
            types_file: self.config.types_file.clone(),
            trace_count: trace.items.len(),
            catalog_count: catalog.items.len(),
            measured_count: metrics.len(),
            check_kinds: self.config.check_kinds.clone(),
            pattern: self.config.pattern.clone(),
            file_limit: self.config.file_limit,
            symbol_limit: self.config.symbol_limit,
            warnings: [trace.warning, catalog.warning].into_iter().flatten().collect(),
            elapsed: start.elapsed(),
        };

        let show_console = self.console || self.json.is_none();

        if show_console {
            let mut console_output = String::new();
            let use_colors = match self.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => {
                    use std::io::{IsTerminal, stdout};
                    stdout().is_terminal()
                }
            };
            generate_console(&summary, &ranking, &self.root, use_colors, &mut console_output)?;
            let _ = write!(self.host.output(), "{console_output}");
        } else {
            for warning in &summary.warnings {
                let _ = writeln!(self.host.error(), "warning: {warning}");
            }
        }

        if let Some(filename) = &self.json {
            let mut json_output = String::new();
            generate_json(&summary, &ranking, &mut json_output)?;
            fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
        }

        Ok(())
    }
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when running more than once in a process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
