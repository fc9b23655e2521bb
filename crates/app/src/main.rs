use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::Clock;
use services::{AdminHistoryService, AppServices, SessionController};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://quiz.sqlite3";
const DB_URL_ENV: &str = "QUIZ_DB_URL";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn session(&self) -> Arc<SessionController> {
        self.services.session()
    }

    fn admin(&self) -> Arc<AdminHistoryService> {
        self.services.admin()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    verbose: bool,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--verbose]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DB_URL_ENV}, RUST_LOG");
}

impl Args {
    /// `env_db_url` is the value of `QUIZ_DB_URL`, if set. `--db` wins over it.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_db_url: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env_db_url
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut verbose = false;
        let mut help = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            verbose,
            help,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, std::env::var(DB_URL_ENV).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_tracing(parsed.verbose);

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, Clock::default_clock()).await?;
    info!(db = %parsed.db_url, "storage ready");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("חידון השועלים")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: Option<&str>) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, env.map(str::to_string))
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let args = parse(&[], None).unwrap();
        assert_eq!(args.db_url, DEFAULT_DB_URL);
        assert!(!args.verbose);
        assert!(!args.help);
    }

    #[test]
    fn flag_overrides_env() {
        let args = parse(&["--db", "sqlite:///tmp/flag.sqlite3"], Some("sqlite:///tmp/env.sqlite3"))
            .unwrap();
        assert_eq!(args.db_url, "sqlite:///tmp/flag.sqlite3");

        let args = parse(&["-v"], Some("sqlite:///tmp/env.sqlite3")).unwrap();
        assert_eq!(args.db_url, "sqlite:///tmp/env.sqlite3");
        assert!(args.verbose);
    }

    #[test]
    fn rejects_unknown_and_incomplete_flags() {
        assert!(matches!(
            parse(&["--deck-id", "1"], None),
            Err(ArgsError::UnknownArg(_))
        ));
        assert!(matches!(
            parse(&["--db"], None),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            parse(&["--db", "  "], None),
            Err(ArgsError::InvalidDbUrl { .. })
        ));
    }

    #[test]
    fn bare_paths_become_absolute_sqlite_urls() {
        assert_eq!(
            normalize_sqlite_url("/var/quiz.sqlite3".to_string()),
            "sqlite:///var/quiz.sqlite3"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".to_string()),
            "sqlite::memory:"
        );
        assert!(normalize_sqlite_url("quiz.sqlite3".to_string()).starts_with("sqlite:///"));
    }

    #[test]
    fn prepare_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("quiz-app-test-{}", std::process::id()));
        let file = dir.join("nested").join("quiz.sqlite3");
        let url = format!("sqlite://{}", file.display());

        prepare_sqlite_file(&url).unwrap();
        assert!(file.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
