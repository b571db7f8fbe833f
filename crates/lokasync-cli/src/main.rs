use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod commands;

#[derive(Parser)]
#[command(
    name = "lokasync",
    version,
    about = "Incremental machine-translation sync for Android string resources"
)]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Only log errors (keeps stdout parseable)
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reconcile language documents and translate changed/new entries
    Sync {
        /// Project root (the directory holding src/main/res and build/)
        #[arg(short, long)]
        root: PathBuf,
        /// Target language code, repeatable (falls back to lokasync.toml)
        #[arg(long = "lang")]
        langs: Vec<String>,
        /// Translation provider: google or pseudo
        #[arg(long)]
        provider: Option<String>,
        /// Resource root relative to the project dir
        #[arg(long)]
        resource_root: Option<String>,
        /// Per-call timeout for the translation provider
        #[arg(long)]
        timeout_secs: Option<u64>,
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        #[arg(long, default_value_t = false)]
        backup: bool,
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show what a sync run would do, without writing anything
    Status {
        #[arg(short, long)]
        root: PathBuf,
        #[arg(long = "lang")]
        langs: Vec<String>,
        #[arg(long)]
        resource_root: Option<String>,
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn init_tracing(quiet: bool) -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", "lokasync.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let default_filter = if quiet { "error" } else { "info" };
    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        );

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
    guard
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let _guard = init_tracing(cli.quiet);

    let use_color = !cli.no_color
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();

    match cli.cmd {
        Commands::Sync {
            root,
            langs,
            provider,
            resource_root,
            timeout_secs,
            dry_run,
            backup,
            format,
        } => commands::sync::run_sync(
            root,
            langs,
            provider,
            resource_root,
            timeout_secs,
            dry_run,
            backup,
            format,
            use_color,
        ),
        Commands::Status {
            root,
            langs,
            resource_root,
            format,
        } => commands::status::run_status(root, langs, resource_root, format, use_color),
    }
}
