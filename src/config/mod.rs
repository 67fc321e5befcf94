//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub use cli::{CliArgs, Command, ModeArgs, Overrides};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "folio";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_GRACEFUL_SHUTDOWN_SECS: u64 = 5;
const DEFAULT_DOCUMENT: &str = "index.md";
const DEFAULT_TEMPLATE: &str = "index.html";
const DEFAULT_STYLESHEET: &str = "index.css";
const DEFAULT_ASSETS_DIR: &str = "static";

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub content: ContentSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    pub graceful_shutdown: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

/// Files read on every request in serve mode, and the static asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSettings {
    pub document: PathBuf,
    pub template: PathBuf,
    pub stylesheet: PathBuf,
    pub assets_dir: PathBuf,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            stylesheet: PathBuf::from(DEFAULT_STYLESHEET),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("FOLIO").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    server: RawServerSettings,
    logging: RawLoggingSettings,
    content: RawContentSettings,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(host) = overrides.host.as_ref() {
            self.server.host = Some(host.clone());
        }
        if let Some(port) = overrides.port {
            self.server.port = Some(port);
        }
        if let Some(seconds) = overrides.graceful_shutdown_seconds {
            self.server.graceful_shutdown_seconds = Some(seconds);
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(path) = overrides.document.as_ref() {
            self.content.document = Some(path.clone());
        }
        if let Some(path) = overrides.template.as_ref() {
            self.content.template = Some(path.clone());
        }
        if let Some(path) = overrides.stylesheet.as_ref() {
            self.content.stylesheet = Some(path.clone());
        }
        if let Some(path) = overrides.assets_dir.as_ref() {
            self.content.assets_dir = Some(path.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            server,
            logging,
            content,
        } = raw;

        let server = build_server_settings(server)?;
        let logging = build_logging_settings(logging)?;
        let content = build_content_settings(content)?;

        Ok(Self {
            server,
            logging,
            content,
        })
    }
}

fn build_server_settings(server: RawServerSettings) -> Result<ServerSettings, LoadError> {
    let host = server.host.unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = server.port.unwrap_or(DEFAULT_PORT);
    if port == 0 {
        return Err(LoadError::invalid(
            "server.port",
            "port must be greater than zero",
        ));
    }

    let addr = parse_socket_addr(&host, port)
        .map_err(|reason| LoadError::invalid("server.addr", reason))?;

    let graceful_secs = server
        .graceful_shutdown_seconds
        .unwrap_or(DEFAULT_GRACEFUL_SHUTDOWN_SECS);
    if graceful_secs == 0 {
        return Err(LoadError::invalid(
            "server.graceful_shutdown_seconds",
            "must be greater than zero",
        ));
    }

    Ok(ServerSettings {
        addr,
        graceful_shutdown: Duration::from_secs(graceful_secs),
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_content_settings(content: RawContentSettings) -> Result<ContentSettings, LoadError> {
    let defaults = ContentSettings::default();

    Ok(ContentSettings {
        document: non_empty_path(content.document, defaults.document, "content.document")?,
        template: non_empty_path(content.template, defaults.template, "content.template")?,
        stylesheet: non_empty_path(
            content.stylesheet,
            defaults.stylesheet,
            "content.stylesheet",
        )?,
        assets_dir: non_empty_path(content.assets_dir, defaults.assets_dir, "content.assets_dir")?,
    })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawServerSettings {
    host: Option<String>,
    port: Option<u16>,
    graceful_shutdown_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawContentSettings {
    document: Option<PathBuf>,
    template: Option<PathBuf>,
    stylesheet: Option<PathBuf>,
    assets_dir: Option<PathBuf>,
}

fn parse_socket_addr(host: &str, port: u16) -> Result<SocketAddr, String> {
    let host = if host.eq_ignore_ascii_case("localhost") {
        DEFAULT_HOST
    } else {
        host
    };
    let candidate = format!("{host}:{port}");
    candidate
        .parse()
        .map_err(|err| format!("invalid address `{candidate}`: {err}"))
}

fn non_empty_path(
    value: Option<PathBuf>,
    default: PathBuf,
    key: &'static str,
) -> Result<PathBuf, LoadError> {
    let path = value.unwrap_or(default);
    if path.as_os_str().is_empty() {
        return Err(LoadError::invalid(key, "path must not be empty"));
    }
    Ok(path)
}

/// Resolve configuration using the supplied CLI arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}
