#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use regai_core::config::logs_dir;
use regai_core::logging::LoggingBuilder;
use regai_core::{default_data_dir, AdvisorConfig, NamedView};

/// Startup settings resolved before the window opens.
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub data_dir: PathBuf,
    pub config: AdvisorConfig,
    pub initial_view: NamedView,
}

static LAUNCH: OnceLock<LaunchSettings> = OnceLock::new();

/// Settings set from the command line, or defaults if launched without them.
pub fn launch_settings() -> LaunchSettings {
    LAUNCH.get().cloned().unwrap_or_else(|| LaunchSettings {
        data_dir: default_data_dir(),
        config: AdvisorConfig::default(),
        initial_view: NamedView::default(),
    })
}

/// RegAI - Regenerative Agriculture Advisor
#[derive(Parser, Debug)]
#[command(name = "regai-desktop")]
#[command(about = "RegAI - Regenerative Agriculture Advisor")]
struct Args {
    /// Data directory holding config.json and logs (default: ~/.regai)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Advisor endpoint, overrides config and REGAI_ENDPOINT
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Start on a named view, e.g. `#dashboard` or `chatbot`
    #[arg(long)]
    view: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(data_dir: &std::path::Path, verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    match LoggingBuilder::new(logs_dir(data_dir), "desktop")
        .with_default_level(level)
        .init()
    {
        Ok(path) => tracing::info!("Writing logs to {:?}", path),
        Err(e) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
                )
                .try_init();
            tracing::warn!("JSONL logging unavailable: {}", e);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    setup_logging(&data_dir, args.verbose);

    let mut config = AdvisorConfig::resolve(&data_dir)?;
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    let initial_view = NamedView::from_fragment(args.view.as_deref());

    tracing::info!(
        endpoint = %config.endpoint,
        identity = config.identity.backend(),
        view = %initial_view,
        "Starting RegAI with data dir: {:?}",
        data_dir
    );

    let _ = LAUNCH.set(LaunchSettings {
        data_dir,
        config,
        initial_view,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("RegAI - Regenerative Agriculture Advisor")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
