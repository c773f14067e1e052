use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Full filter override in `tracing_subscriber` directive syntax.
pub const LOG_FILTER_ENV: &str = "ECONLINK_LOG";

/// Targets that `--log-level` applies to. Everything else stays at `warn`.
const ECONLINK_TARGETS: [&str; 3] = ["econlink", "econlink_link", "econlink_proto"];

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Directives that raise the econlink crates to `level` and keep dependencies at `warn`.
pub fn filter_directives(level: LogLevel) -> String {
    let mut directives = String::from("warn");
    for target in ECONLINK_TARGETS {
        directives.push_str(&format!(",{target}={}", level.as_str()));
    }
    directives
}

fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)))
}

/// Install the stderr subscriber. Output on stdout stays machine-readable.
///
/// `ECONLINK_LOG`, when set to a valid filter, replaces the level-derived one.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(build_filter(level))
        .with_ansi(false)
        .with_target(true);

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}
