use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};

/// Command-line arguments for the folio binary.
#[derive(Debug, Parser)]
#[command(
    name = "folio",
    version,
    about = "Render a markdown page into an HTML template, or serve it with live reload",
    allow_external_subcommands = true,
    ignore_errors = true
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "FOLIO_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render the embedded page once to standard output.
    Render(ModeArgs),
    /// Serve the page over HTTP, re-reading it from disk on every request.
    Serve(ModeArgs),
    /// Any other command word is accepted and ignored.
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Trailing arguments after the command word, flags included, are accepted and ignored.
#[derive(Debug, Args, Default, Clone)]
pub struct ModeArgs {
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub ignored: Vec<String>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct Overrides {
    /// Override the listener host.
    #[arg(long = "host", value_name = "HOST", global = true)]
    pub host: Option<String>,

    /// Override the listener port.
    #[arg(long = "port", value_name = "PORT", global = true)]
    pub port: Option<u16>,

    /// Override the graceful shutdown timeout.
    #[arg(
        long = "graceful-shutdown-seconds",
        value_name = "SECONDS",
        global = true
    )]
    pub graceful_shutdown_seconds: Option<u64>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,

    /// Override the markdown document read in serve mode.
    #[arg(long = "document", value_name = "PATH", global = true)]
    pub document: Option<PathBuf>,

    /// Override the page template read in serve mode.
    #[arg(long = "template", value_name = "PATH", global = true)]
    pub template: Option<PathBuf>,

    /// Override the stylesheet read in serve mode.
    #[arg(long = "stylesheet", value_name = "PATH", global = true)]
    pub stylesheet: Option<PathBuf>,

    /// Override the directory static assets are served from.
    #[arg(long = "assets-dir", value_name = "PATH", global = true)]
    pub assets_dir: Option<PathBuf>,
}
