use std::error::Error;
use std::path::{Path, PathBuf};
use chrono::Utc;
use log::{info, error, debug};
use env_logger::{Builder, Target};

/// Directory holding the log files, `~/.protcalc/logs`
pub fn log_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".protcalc")
        .join("logs")
}

/// Initialize logging into a timestamped file under `log_dir`.
///
/// The terminal belongs to the UI while it runs, so nothing is logged to stderr.
pub fn init_logging(log_dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    std::fs::create_dir_all(log_dir)?;

    let log_file = log_dir.join(format!("protcalc_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                std::thread::current().name().unwrap_or("main"),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

/// Map a requested level onto one env_logger understands, falling back to `info`
pub fn resolve_log_level(requested: Option<&str>) -> &'static str {
    let level = requested.unwrap_or("info").to_lowercase();

    match level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => {
            eprintln!("Invalid log level '{level}', defaulting to 'info'");
            "info"
        }
    }
}

/// Route the chosen level to this crate through `RUST_LOG`
pub fn set_log_level(level: &str) {
    std::env::set_var("RUST_LOG", format!("protcalc={}", resolve_log_level(Some(level))));
}

/// Log system information at startup
pub fn log_system_info() {
    info!("=== protcalc starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Current working directory: {:?}", std::env::current_dir().unwrap_or_default());
    info!("Available CPU cores: {}", num_cpus::get());

    debug!("Environment variables:");
    for (key, value) in std::env::vars() {
        if key.starts_with("PROTCALC_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

/// Log application shutdown
pub fn log_shutdown() {
    info!("=== protcalc shutting down ===");
    info!("Application terminated at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Log a fatal error, echoing it to stderr in case the logger never came up
pub fn log_critical_error(error: &str, context: Option<&str>) {
    if let Some(ctx) = context {
        error!("CRITICAL ERROR [{ctx}]: {error}");
    } else {
        error!("CRITICAL ERROR: {error}");
    }

    if let Some(ctx) = context {
        eprintln!("[{}] CRITICAL ERROR [{}]: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), ctx, error);
    } else {
        eprintln!("[{}] CRITICAL ERROR: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), error);
    }
}
